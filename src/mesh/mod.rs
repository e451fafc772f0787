mod buffer;
mod face;
mod surface;
mod vertex;

pub use buffer::{FacadeMesh, MeshBuffer};
pub use face::{FaceData, FaceId};
pub use surface::MeshSurface;
pub use vertex::{VertexData, VertexId};
