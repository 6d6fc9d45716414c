use thiserror::Error;

use crate::geometry::CirclePair;

/// Top-level error type for the trilateration kernel.
#[derive(Debug, Error)]
pub enum TrilatError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl TrilatError {
    /// Input geometry is degenerate: a zero-length vector, an invalid circle,
    /// or concentric circles with different radii.
    #[must_use]
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::Degenerate(_) | GeometryError::ZeroVector)
        )
    }

    /// The three circles do not bound a generic curvilinear triangle.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// A caller-supplied angle is outside `[0, 2*pi]`.
    #[must_use]
    pub fn is_invalid_angle(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::InvalidAngle { .. }))
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("angle {angle} is outside [0, 2*pi] radians (degrees passed?)")]
    InvalidAngle { angle: f64 },
}

/// Errors raised when three circles do not form a curvilinear triangle.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("expected 3 points inside all circles, found {found}")]
    VertexCount { found: usize },

    #[error("circle pair {pair:?} contributed more than one vertex")]
    DuplicatePairVertex { pair: CirclePair },

    #[error("circle pair {pair:?} contributed no vertex")]
    MissingPairVertex { pair: CirclePair },
}

/// Convenience type alias for results using [`TrilatError`].
pub type Result<T> = std::result::Result<T, TrilatError>;
