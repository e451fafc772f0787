pub mod build;
pub mod error;
pub mod math;
pub mod mesh;
pub mod plan;

pub use error::{EdifisError, Result};
