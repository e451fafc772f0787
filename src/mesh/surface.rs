use crate::error::Result;
use crate::math::Point3;

use super::face::FaceId;
use super::vertex::VertexId;

/// The abstract mesh collaborator the generation pipeline writes to.
///
/// The pipeline only ever writes through this trait; it never reads
/// geometry back (every builder carries the positions it minted). This
/// keeps the core independent of any host scene representation and lets
/// tests substitute a recording double.
pub trait MeshSurface {
    /// Creates a vertex at `point` and returns its handle.
    fn create_vertex(&mut self, point: Point3) -> VertexId;

    /// Creates a face from boundary vertices in winding order.
    ///
    /// The vertices are assumed coplanar and non-self-intersecting in the
    /// given order; the result is undefined otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given or a handle is
    /// stale.
    fn create_face(&mut self, vertices: &[VertexId]) -> Result<FaceId>;

    /// Insets each face individually by `depth` along its own normal.
    ///
    /// For every face, the boundary ring is duplicated, offset by `depth`
    /// along the face normal (negative depth recesses into the mesh), and
    /// the original face is re-pointed at the offset ring; the connecting
    /// rim quads are created as new faces.
    ///
    /// # Errors
    ///
    /// Returns an error if a face handle is stale.
    fn inset_faces(&mut self, faces: &[FaceId], depth: f64) -> Result<()>;

    /// Recomputes per-face and per-vertex normals from current topology.
    fn recompute_normals(&mut self);
}
