use thiserror::Error;

/// Top-level error type for zone geometry operations.
#[derive(Debug, Error)]
pub enum ZoneGeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon has {vertices} vertices, at least 3 are required")]
    PolygonTooSmall { vertices: usize },

    #[error("pseudo-angle {value} is outside [-1, 1]")]
    PseudoAngleOutOfRange { value: f64 },
}

/// Convenience type alias for results using [`ZoneGeomError`].
pub type Result<T> = std::result::Result<T, ZoneGeomError>;
