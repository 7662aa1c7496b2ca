//! Tunables for cell-size inference.

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Number of uniform samples drawn when inferring projection extents.
pub const PROJECTION_EXTENTS_SAMPLES: usize = 100;

/// Number of cells that should span the observed extent of each axis.
pub const PROJECTION_DIMENSION_SPLITS: f64 = 20.0;

/// Settings that control how a [`ProjectionEvaluator`] infers cell sizes.
///
/// Missing fields fall back to the defaults when loaded from JSON.
///
/// [`ProjectionEvaluator`]: crate::evaluator::ProjectionEvaluator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorSettings {
    /// Uniform samples drawn from the source space during inference
    pub extent_samples: usize,
    /// Cells per observed extent on each axis
    pub dimension_splits: f64,
}

impl EvaluatorSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Example
    /// ```rust
    /// use projgrid::EvaluatorSettings;
    ///
    /// let settings = EvaluatorSettings::from_json(r#"{"extent_samples": 500}"#).unwrap();
    /// assert_eq!(settings.extent_samples, 500);
    /// assert_eq!(settings.dimension_splits, 20.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that inference can produce positive, finite cell widths.
    ///
    /// # Errors
    /// [`ProjectionError::InvalidSettings`] if `extent_samples` is zero or
    /// `dimension_splits` is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.extent_samples == 0 {
            return Err(ProjectionError::InvalidSettings(
                "extent_samples must be at least 1".to_string(),
            ));
        }
        if !(self.dimension_splits.is_finite() && self.dimension_splits > 0.0) {
            return Err(ProjectionError::InvalidSettings(format!(
                "dimension_splits must be positive and finite, got {}",
                self.dimension_splits
            )));
        }
        Ok(())
    }
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            extent_samples: PROJECTION_EXTENTS_SAMPLES,
            dimension_splits: PROJECTION_DIMENSION_SPLITS,
        }
    }
}
