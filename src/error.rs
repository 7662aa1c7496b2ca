//! Error types for projgrid.

use thiserror::Error;

/// Configuration errors raised while building projections or evaluators.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The projection has no output axes
    #[error("Dimension of projection needs to be larger than 0")]
    InvalidDimension,

    /// Cell dimensions do not line up with the projection's output axes
    #[error("Cell dimension mismatch: projection has {expected} dimensions, got {got} cell dimensions")]
    CellDimensionMismatch { expected: usize, got: usize },

    /// A scaling factor is too close to zero to divide by
    #[error("Scaling factor {index} must be non-zero, got {value:e}")]
    DegenerateScale { index: usize, value: f64 },

    /// Row-indexed scaling ran past the end of the scale vector
    #[error("Scale vector has {len} entries but row {row} needs a scaling factor")]
    ScaleOutOfRange { row: usize, len: usize },

    /// A cell width that is not a positive finite number
    #[error("Cell dimension {axis} must be positive and finite, got {value}")]
    InvalidCellDimension { axis: usize, value: f64 },

    /// Inference settings out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Matrix rows of unequal length
    #[error("Ragged matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix { row: usize, expected: usize, got: usize },

    /// Lower bound above upper bound
    #[error("Invalid bounds on axis {axis}: low {low} > high {high}")]
    InvalidBounds { axis: usize, low: f64, high: f64 },

    /// Orthogonal projection names a component the source space lacks
    #[error("Component {component} is out of range for a space of dimension {space_dim}")]
    InvalidComponent { component: usize, space_dim: usize },

    /// Evaluator settings could not be parsed
    #[error("Settings parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for projgrid operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
