use slotmap::SlotMap;

use crate::error::{MeshError, Result};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::face::{FaceData, FaceId};
use super::surface::MeshSurface;
use super::vertex::{VertexData, VertexId};

/// In-memory mesh surface backed by slotmap arenas.
///
/// Entities reference each other via typed IDs (generational indices).
/// Insertion order is tracked separately so [`MeshBuffer::finalize`]
/// produces deterministic index buffers.
#[derive(Debug, Default)]
pub struct MeshBuffer {
    vertices: SlotMap<VertexId, VertexData>,
    faces: SlotMap<FaceId, FaceData>,
    vertex_order: Vec<VertexId>,
    face_order: Vec<FaceId>,
}

/// A finalized facade mesh: flat vertex/normal buffers plus polygon faces
/// as indices into them.
#[derive(Debug, Clone, Default)]
pub struct FacadeMesh {
    /// Vertex positions, in creation order.
    pub vertices: Vec<Point3>,
    /// Vertex normals, parallel to `vertices`.
    pub normals: Vec<Vector3>,
    /// Polygon faces as vertex indices, in creation order.
    pub faces: Vec<Vec<u32>>,
}

impl MeshBuffer {
    /// Creates a new, empty mesh buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices currently in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces currently in the buffer.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the buffer.
    pub fn vertex(&self, id: VertexId) -> std::result::Result<&VertexData, MeshError> {
        self.vertices
            .get(id)
            .ok_or_else(|| MeshError::EntityNotFound("vertex".into()))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the buffer.
    pub fn face(&self, id: FaceId) -> std::result::Result<&FaceData, MeshError> {
        self.faces
            .get(id)
            .ok_or_else(|| MeshError::EntityNotFound("face".into()))
    }

    /// Boundary positions of a face, in winding order.
    fn face_points(&self, face: &FaceData) -> std::result::Result<Vec<Point3>, MeshError> {
        face.vertices
            .iter()
            .map(|&v| self.vertex(v).map(|data| data.point))
            .collect()
    }

    /// Consumes the buffer, flattening handles into index buffers.
    #[must_use]
    pub fn finalize(self) -> FacadeMesh {
        let mut index_of = slotmap::SecondaryMap::with_capacity(self.vertices.len());
        let mut vertices = Vec::with_capacity(self.vertex_order.len());
        let mut normals = Vec::with_capacity(self.vertex_order.len());
        for (i, &id) in self.vertex_order.iter().enumerate() {
            if let Some(data) = self.vertices.get(id) {
                #[allow(clippy::cast_possible_truncation)]
                index_of.insert(id, i as u32);
                vertices.push(data.point);
                normals.push(data.normal);
            }
        }

        let faces = self
            .face_order
            .iter()
            .filter_map(|&id| self.faces.get(id))
            .map(|face| {
                face.vertices
                    .iter()
                    .filter_map(|&v| index_of.get(v).copied())
                    .collect()
            })
            .collect();

        FacadeMesh {
            vertices,
            normals,
            faces,
        }
    }
}

impl MeshSurface for MeshBuffer {
    fn create_vertex(&mut self, point: Point3) -> VertexId {
        let id = self.vertices.insert(VertexData::new(point));
        self.vertex_order.push(id);
        id
    }

    fn create_face(&mut self, vertices: &[VertexId]) -> Result<FaceId> {
        if vertices.len() < 3 {
            return Err(MeshError::DegenerateFace {
                vertex_count: vertices.len(),
            }
            .into());
        }
        for &v in vertices {
            self.vertex(v)?;
        }
        let id = self.faces.insert(FaceData::new(vertices.to_vec()));
        self.face_order.push(id);
        Ok(id)
    }

    fn inset_faces(&mut self, faces: &[FaceId], depth: f64) -> Result<()> {
        for &face_id in faces {
            let ring = self.face(face_id)?.vertices.clone();
            let points = self.face_points(self.face(face_id)?)?;

            // Faces with no usable plane are left untouched.
            let Some(normal) = newell_normal(&points) else {
                continue;
            };
            let offset = normal * depth;

            let recessed: Vec<VertexId> = points
                .iter()
                .map(|p| self.create_vertex(p + offset))
                .collect();

            // Rim quads between the original ring and the recessed ring.
            let n = ring.len();
            for i in 0..n {
                let j = (i + 1) % n;
                self.create_face(&[ring[i], ring[j], recessed[j], recessed[i]])?;
            }

            // The original face becomes the recessed face.
            if let Some(face) = self.faces.get_mut(face_id) {
                face.vertices = recessed;
            }
        }
        Ok(())
    }

    fn recompute_normals(&mut self) {
        let face_normals: Vec<(FaceId, Vector3)> = self
            .faces
            .iter()
            .filter_map(|(id, face)| {
                let points = self.face_points(face).ok()?;
                newell_normal(&points).map(|n| (id, n))
            })
            .collect();

        for data in self.vertices.values_mut() {
            data.normal = Vector3::zeros();
        }
        for &(id, normal) in &face_normals {
            if let Some(face) = self.faces.get_mut(id) {
                face.normal = normal;
            }
        }
        for (id, normal) in face_normals {
            let ring = match self.faces.get(id) {
                Some(face) => face.vertices.clone(),
                None => continue,
            };
            for v in ring {
                if let Some(data) = self.vertices.get_mut(v) {
                    data.normal += normal;
                }
            }
        }
        for data in self.vertices.values_mut() {
            let len = data.normal.norm();
            if len > TOLERANCE {
                data.normal /= len;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_3d::polygon_centroid;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square(buffer: &mut MeshBuffer) -> FaceId {
        let ring: Vec<VertexId> = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
        .into_iter()
        .map(|pt| buffer.create_vertex(pt))
        .collect();
        buffer.create_face(&ring).unwrap()
    }

    // ── Face creation ──────────────────────────────────────────

    #[test]
    fn two_vertex_face_is_rejected() {
        let mut buffer = MeshBuffer::new();
        let a = buffer.create_vertex(p(0.0, 0.0, 0.0));
        let b = buffer.create_vertex(p(1.0, 0.0, 0.0));
        assert!(buffer.create_face(&[a, b]).is_err());
    }

    #[test]
    fn stale_vertex_handle_is_rejected() {
        let mut buffer = MeshBuffer::new();
        let a = buffer.create_vertex(p(0.0, 0.0, 0.0));
        let b = buffer.create_vertex(p(1.0, 0.0, 0.0));
        assert!(buffer.create_face(&[a, b, VertexId::default()]).is_err());
    }

    // ── Inset ──────────────────────────────────────────────────

    #[test]
    fn inset_recesses_face_and_builds_rim() {
        let mut buffer = MeshBuffer::new();
        let face = unit_square(&mut buffer);

        buffer.inset_faces(&[face], -0.2).unwrap();

        // 4 original + 4 recessed vertices; 1 recessed face + 4 rim quads.
        assert_eq!(buffer.vertex_count(), 8);
        assert_eq!(buffer.face_count(), 5);

        // The CCW square's normal is +Z, so depth -0.2 sinks it to z = -0.2.
        let recessed = buffer.face(face).unwrap().vertices.clone();
        let points: Vec<Point3> = recessed
            .iter()
            .map(|&v| buffer.vertex(v).unwrap().point)
            .collect();
        let centroid = polygon_centroid(&points).unwrap();
        assert!((centroid.z - (-0.2)).abs() < 1e-10, "z = {}", centroid.z);
    }

    #[test]
    fn inset_of_stale_face_errors() {
        let mut buffer = MeshBuffer::new();
        assert!(buffer.inset_faces(&[FaceId::default()], -0.2).is_err());
    }

    #[test]
    fn inset_of_nothing_is_a_no_op() {
        let mut buffer = MeshBuffer::new();
        unit_square(&mut buffer);
        buffer.inset_faces(&[], -0.2).unwrap();
        assert_eq!(buffer.face_count(), 1);
    }

    // ── Normals ────────────────────────────────────────────────

    #[test]
    fn recompute_sets_unit_normals() {
        let mut buffer = MeshBuffer::new();
        let face = unit_square(&mut buffer);
        buffer.recompute_normals();

        let normal = buffer.face(face).unwrap().normal;
        assert!((normal.norm() - 1.0).abs() < 1e-10);
        assert!((normal.z - 1.0).abs() < 1e-10);

        for &v in &buffer.face(face).unwrap().vertices.clone() {
            let vn = buffer.vertex(v).unwrap().normal;
            assert!((vn.z - 1.0).abs() < 1e-10);
        }
    }

    // ── Finalize ───────────────────────────────────────────────

    #[test]
    fn finalize_preserves_creation_order() {
        let mut buffer = MeshBuffer::new();
        unit_square(&mut buffer);
        buffer.recompute_normals();

        let mesh = buffer.finalize();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.normals.len(), 4);
        assert_eq!(mesh.faces, vec![vec![0, 1, 2, 3]]);
        assert!((mesh.vertices[1].x - 1.0).abs() < 1e-10);
    }
}
