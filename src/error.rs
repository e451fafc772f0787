use thiserror::Error;

/// Top-level error type for the Edifis building generator.
#[derive(Debug, Error)]
pub enum EdifisError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Errors related to the mesh surface.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("face needs at least 3 vertices, got {vertex_count}")]
    DegenerateFace { vertex_count: usize },
}

/// Errors related to building generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("parameter {parameter} = {value} must be at least {min}")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
    },
}

/// Convenience type alias for results using [`EdifisError`].
pub type Result<T> = std::result::Result<T, EdifisError>;
