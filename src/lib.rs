//! # projgrid: Projections and Grid Cells for Sampling-Based Search
//!
//! projgrid maps states of a high-dimensional configuration space down to a
//! small Euclidean space and discretizes the result into integer grid
//! cells, the bucket keys that cell-based exploration strategies use.
//!
//! ## Quick Start
//!
//! ```rust
//! use projgrid::{BoxSampler, LinearProjection, ProjectionEvaluator, RealVectorBounds};
//!
//! // A 12-dimensional space, projected onto 3 random axes
//! let bounds = RealVectorBounds::uniform(12, -3.0, 3.0)?;
//! let mut sampler = BoxSampler::with_seed("arm", bounds, 42);
//! let projection = LinearProjection::with_seed(12, 3, 42);
//!
//! // Infer cell sizes by sampling the space, then discretize a state
//! let mut evaluator = ProjectionEvaluator::new(projection);
//! evaluator.setup(&mut sampler)?;
//! let cell = evaluator.compute_coordinates_for_state(&[0.0; 12])?;
//! assert_eq!(cell.dimension(), 3);
//! # Ok::<(), projgrid::ProjectionError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Projection**: anything with an output dimension and a map from a
//!   source state to a Euclidean point ([`Projection`])
//! - **Random projection**: normal draws orthonormalized by Gram-Schmidt
//!   ([`ProjectionMatrix::compute_random`])
//! - **Cell dimensions**: per-axis grid width, set or inferred by sampling
//! - **Coordinates**: `floor(value / width)` per axis ([`ProjectionCoordinates`])

pub mod error;
pub mod evaluator;
pub mod linear;
pub mod matrix;
pub mod projection;
pub mod rng;
pub mod settings;
pub mod space;

// Re-exports for convenience
pub use error::{ProjectionError, Result};
pub use evaluator::ProjectionEvaluator;
pub use linear::{IdentityProjection, LinearProjection, OrthogonalProjection};
pub use matrix::ProjectionMatrix;
pub use projection::{EuclideanProjection, Projection, ProjectionCoordinates};
pub use settings::{EvaluatorSettings, PROJECTION_DIMENSION_SPLITS, PROJECTION_EXTENTS_SAMPLES};
pub use space::{BoxSampler, RealVectorBounds, StateSampler};
