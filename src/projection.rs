//! Projected points, grid coordinates, and the projection capability.
//!
//! A [`Projection`] maps an element of some source space into a small
//! Euclidean space. The evaluator then discretizes that point into
//! [`ProjectionCoordinates`], which search components use as bucket keys.

use std::ops::{Index, IndexMut};

/// A point in the projected Euclidean space.
#[derive(Clone, Debug, PartialEq)]
pub struct EuclideanProjection {
    values: Vec<f64>,
}

impl EuclideanProjection {
    /// Create a zero point of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    /// Create a point from raw values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Get the dimensionality.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Resize in place, zero-filling new axes.
    pub fn resize(&mut self, dimension: usize) {
        self.values.resize(dimension, 0.0);
    }
}

impl Index<usize> for EuclideanProjection {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IndexMut<usize> for EuclideanProjection {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl From<Vec<f64>> for EuclideanProjection {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

/// Integer grid-cell index of a projected point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectionCoordinates {
    cells: Vec<i32>,
}

impl ProjectionCoordinates {
    pub fn from_cells(cells: Vec<i32>) -> Self {
        Self { cells }
    }

    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }
}

impl Index<usize> for ProjectionCoordinates {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// A map from source-space elements into a Euclidean space.
///
/// Implement this for problem-specific projections; the random linear
/// projection in [`crate::linear`] is just one implementation.
pub trait Projection {
    /// Element type of the source space.
    type State: ?Sized;

    /// Number of output axes.
    fn dimension(&self) -> usize;

    /// Project `state` into `out`, which has exactly `dimension()` axes.
    fn project_into(&self, state: &Self::State, out: &mut EuclideanProjection);

    /// Project `state` into a freshly allocated point.
    fn project(&self, state: &Self::State) -> EuclideanProjection {
        let mut out = EuclideanProjection::zeros(self.dimension());
        self.project_into(state, &mut out);
        out
    }
}

impl<P: Projection + ?Sized> Projection for &P {
    type State = P::State;

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn project_into(&self, state: &Self::State, out: &mut EuclideanProjection) {
        (**self).project_into(state, out)
    }
}

impl<P: Projection + ?Sized> Projection for Box<P> {
    type State = P::State;

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn project_into(&self, state: &Self::State, out: &mut EuclideanProjection) {
        (**self).project_into(state, out)
    }
}
