//! Projections of real-vector states.
//!
//! - [`LinearProjection`] — a matrix applied to the state, either supplied
//!   by the caller or drawn at random with [`ProjectionMatrix::compute_random`]
//! - [`OrthogonalProjection`] — keeps a chosen subset of the state's axes
//! - [`IdentityProjection`] — keeps every axis
//!
//! All three project `[f64]` states, so any sampler producing `Vec<f64>`
//! can drive cell-size inference for them.

use crate::error::{ProjectionError, Result};
use crate::matrix::ProjectionMatrix;
use crate::projection::{EuclideanProjection, Projection};
use crate::space::RealVectorBounds;
use rand::Rng;

/// A linear map given by a [`ProjectionMatrix`].
#[derive(Clone, Debug)]
pub struct LinearProjection {
    matrix: ProjectionMatrix,
}

impl LinearProjection {
    pub fn new(matrix: ProjectionMatrix) -> Self {
        Self { matrix }
    }

    /// Random projection from `from` source axes down to `to` outputs.
    pub fn random<R: Rng + ?Sized>(from: usize, to: usize, rng: &mut R) -> Self {
        Self {
            matrix: ProjectionMatrix::random_orthonormal(from, to, rng),
        }
    }

    /// Random projection with per-axis scaling applied to the matrix.
    pub fn random_scaled<R: Rng + ?Sized>(
        from: usize,
        to: usize,
        scale: &[f64],
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self {
            matrix: ProjectionMatrix::compute_random(from, to, Some(scale), rng)?,
        })
    }

    /// Reproducible random projection derived from `seed`.
    pub fn with_seed(from: usize, to: usize, seed: u64) -> Self {
        Self::random(from, to, &mut crate::rng::seeded(seed, "linear_projection"))
    }

    pub fn matrix(&self) -> &ProjectionMatrix {
        &self.matrix
    }
}

impl Projection for LinearProjection {
    type State = [f64];

    fn dimension(&self) -> usize {
        self.matrix.to_dim()
    }

    fn project_into(&self, state: &[f64], out: &mut EuclideanProjection) {
        self.matrix.project_into(state, out);
    }
}

/// Keeps a subset of the state's axes, in the given order.
#[derive(Clone, Debug)]
pub struct OrthogonalProjection {
    components: Vec<usize>,
}

impl OrthogonalProjection {
    /// # Errors
    /// [`ProjectionError::InvalidComponent`] if a component index is not
    /// below `space_dim`.
    pub fn new(space_dim: usize, components: Vec<usize>) -> Result<Self> {
        if let Some(&component) = components.iter().find(|&&c| c >= space_dim) {
            return Err(ProjectionError::InvalidComponent {
                component,
                space_dim,
            });
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Cell widths that split each selected axis of `bounds` into
    /// `dimension_splits` cells.
    ///
    /// # Errors
    /// [`ProjectionError::InvalidComponent`] if `bounds` lacks a selected axis.
    pub fn default_cell_dimensions(
        &self,
        bounds: &RealVectorBounds,
        dimension_splits: f64,
    ) -> Result<Vec<f64>> {
        let extent = bounds.difference();
        self.components
            .iter()
            .map(|&c| {
                extent
                    .get(c)
                    .map(|e| e / dimension_splits)
                    .ok_or(ProjectionError::InvalidComponent {
                        component: c,
                        space_dim: extent.len(),
                    })
            })
            .collect()
    }
}

impl Projection for OrthogonalProjection {
    type State = [f64];

    fn dimension(&self) -> usize {
        self.components.len()
    }

    fn project_into(&self, state: &[f64], out: &mut EuclideanProjection) {
        for (o, &c) in out.values_mut().iter_mut().zip(self.components.iter()) {
            *o = state[c];
        }
    }
}

/// Copies every axis of the state.
#[derive(Clone, Copy, Debug)]
pub struct IdentityProjection {
    dimension: usize,
}

impl IdentityProjection {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Projection for IdentityProjection {
    type State = [f64];

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn project_into(&self, state: &[f64], out: &mut EuclideanProjection) {
        out.values_mut().copy_from_slice(&state[..self.dimension]);
    }
}
