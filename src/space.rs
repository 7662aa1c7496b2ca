//! Source-space sampling.
//!
//! The evaluator never owns a state space. It borrows a [`StateSampler`]
//! for the duration of cell-size inference and draws uniform states from
//! it. [`BoxSampler`] is a ready-made sampler over axis-aligned bounds
//! for real-vector spaces.

use crate::error::{ProjectionError, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Draws uniformly distributed elements of a source space.
pub trait StateSampler {
    /// Element type produced by the sampler.
    type State;

    /// Draw one uniformly distributed state.
    fn sample_uniform(&mut self) -> Self::State;

    /// Human-readable name of the sampled space, used in diagnostics.
    fn space_name(&self) -> &str {
        "unnamed"
    }
}

/// Axis-aligned bounds of a real-vector space.
#[derive(Clone, Debug, PartialEq)]
pub struct RealVectorBounds {
    low: Vec<f64>,
    high: Vec<f64>,
}

impl RealVectorBounds {
    /// Create bounds from per-axis limits.
    ///
    /// # Errors
    /// [`ProjectionError::InvalidBounds`] if any `low[i] > high[i]`, or on
    /// the first unmatched axis when the limits differ in length.
    pub fn new(low: Vec<f64>, high: Vec<f64>) -> Result<Self> {
        if low.len() != high.len() {
            let axis = low.len().min(high.len());
            return Err(ProjectionError::InvalidBounds {
                axis,
                low: low.get(axis).copied().unwrap_or(f64::NAN),
                high: high.get(axis).copied().unwrap_or(f64::NAN),
            });
        }
        for (axis, (&l, &h)) in low.iter().zip(high.iter()).enumerate() {
            if l > h {
                return Err(ProjectionError::InvalidBounds { axis, low: l, high: h });
            }
        }
        Ok(Self { low, high })
    }

    /// The same `[low, high]` interval on every one of `dimension` axes.
    pub fn uniform(dimension: usize, low: f64, high: f64) -> Result<Self> {
        Self::new(vec![low; dimension], vec![high; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.low.len()
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Per-axis extent `high - low`.
    pub fn difference(&self) -> Vec<f64> {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(l, h)| h - l)
            .collect()
    }

    /// Whether `state` lies inside the bounds on every axis.
    pub fn contains(&self, state: &[f64]) -> bool {
        state.len() == self.dimension()
            && state
                .iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(v, (l, h))| v >= l && v <= h)
    }
}

/// Uniform sampler over [`RealVectorBounds`].
pub struct BoxSampler<R: Rng = ChaCha8Rng> {
    name: String,
    bounds: RealVectorBounds,
    rng: R,
}

impl BoxSampler<ChaCha8Rng> {
    /// Create a reproducible sampler whose stream is derived from `seed`.
    pub fn with_seed(name: impl Into<String>, bounds: RealVectorBounds, seed: u64) -> Self {
        Self::new(name, bounds, crate::rng::seeded(seed, "box_sampler"))
    }
}

impl<R: Rng> BoxSampler<R> {
    pub fn new(name: impl Into<String>, bounds: RealVectorBounds, rng: R) -> Self {
        Self {
            name: name.into(),
            bounds,
            rng,
        }
    }

    pub fn bounds(&self) -> &RealVectorBounds {
        &self.bounds
    }
}

impl<R: Rng> StateSampler for BoxSampler<R> {
    type State = Vec<f64>;

    fn sample_uniform(&mut self) -> Vec<f64> {
        let rng = &mut self.rng;
        self.bounds
            .low
            .iter()
            .zip(self.bounds.high.iter())
            .map(|(&l, &h)| if h > l { rng.gen_range(l..=h) } else { l })
            .collect()
    }

    fn space_name(&self) -> &str {
        &self.name
    }
}
