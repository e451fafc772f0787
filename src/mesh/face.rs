use crate::math::Vector3;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in a mesh surface.
    pub struct FaceId;
}

/// Data associated with a polygonal mesh face.
///
/// A face is a planar, non-self-intersecting polygon given by its boundary
/// vertices in winding order.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary vertices in winding order.
    pub vertices: Vec<VertexId>,
    /// The face normal; zero until [`recompute_normals`] runs.
    ///
    /// [`recompute_normals`]: crate::mesh::MeshSurface::recompute_normals
    pub normal: Vector3,
}

impl FaceData {
    /// Creates a new face from boundary vertices, with a zero normal.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self {
            vertices,
            normal: Vector3::zeros(),
        }
    }
}
