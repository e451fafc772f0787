use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a mesh surface.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// The vertex normal; zero until [`recompute_normals`] runs.
    ///
    /// [`recompute_normals`]: crate::mesh::MeshSurface::recompute_normals
    pub normal: Vector3,
}

impl VertexData {
    /// Creates a new vertex at the given point, with a zero normal.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            normal: Vector3::zeros(),
        }
    }
}
