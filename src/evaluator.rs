//! Projection evaluator: discretizes projected points into grid cells.
//!
//! A [`ProjectionEvaluator`] wraps any [`Projection`] together with one
//! cell width per projected axis. Cell widths are either configured
//! explicitly or inferred once by sampling the source space.
//!
//! # Lifecycle
//!
//! ```text
//! Unconfigured --(set_cell_dimensions | setup)--> Configured
//! ```
//!
//! [`compute_coordinates`](ProjectionEvaluator::compute_coordinates) fails
//! with a configuration error until the evaluator is configured.
//!
//! # Usage
//!
//! ```rust
//! use projgrid::{BoxSampler, LinearProjection, ProjectionEvaluator, RealVectorBounds};
//!
//! let bounds = RealVectorBounds::uniform(8, -1.0, 1.0).unwrap();
//! let mut sampler = BoxSampler::with_seed("arm", bounds, 42);
//!
//! let mut evaluator = ProjectionEvaluator::new(LinearProjection::with_seed(8, 2, 7));
//! evaluator.setup(&mut sampler).unwrap();
//!
//! let cell = evaluator.compute_coordinates_for_state(&[0.1; 8]).unwrap();
//! assert_eq!(cell.dimension(), 2);
//! ```

use crate::error::{ProjectionError, Result};
use crate::projection::{EuclideanProjection, Projection, ProjectionCoordinates};
use crate::settings::EvaluatorSettings;
use crate::space::StateSampler;
use std::borrow::Borrow;
use std::io;
use tracing::{debug, warn};

/// Maps projected points to integer grid cells.
#[derive(Clone, Debug)]
pub struct ProjectionEvaluator<P: Projection> {
    projection: P,
    /// One cell width per projected axis; empty until configured
    cell_dimensions: Vec<f64>,
    settings: EvaluatorSettings,
}

impl<P: Projection> ProjectionEvaluator<P> {
    /// Create an unconfigured evaluator with default inference settings.
    pub fn new(projection: P) -> Self {
        Self::with_settings(projection, EvaluatorSettings::default())
    }

    /// Create an unconfigured evaluator with explicit inference settings.
    pub fn with_settings(projection: P, settings: EvaluatorSettings) -> Self {
        Self {
            projection,
            cell_dimensions: Vec::new(),
            settings,
        }
    }

    // --- Accessors ---

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn settings(&self) -> &EvaluatorSettings {
        &self.settings
    }

    /// Output dimension of the wrapped projection.
    pub fn dimension(&self) -> usize {
        self.projection.dimension()
    }

    pub fn cell_dimensions(&self) -> &[f64] {
        &self.cell_dimensions
    }

    /// Whether coordinates can be computed.
    pub fn is_configured(&self) -> bool {
        self.check_cell_dimensions().is_ok()
    }

    // --- Configuration ---

    /// Set cell widths explicitly, then validate them.
    ///
    /// The widths are stored even when validation fails, so a later
    /// [`setup`](Self::setup) will not infer over them.
    pub fn set_cell_dimensions(&mut self, cell_dimensions: Vec<f64>) -> Result<()> {
        self.cell_dimensions = cell_dimensions;
        self.check_cell_dimensions()
    }

    /// Validate the projection dimension against the cell widths.
    ///
    /// # Errors
    /// [`ProjectionError::InvalidDimension`] for a zero-dimensional projection,
    /// [`ProjectionError::CellDimensionMismatch`] if the lengths differ,
    /// [`ProjectionError::InvalidCellDimension`] for a width that is not a
    /// positive finite number.
    pub fn check_cell_dimensions(&self) -> Result<()> {
        let expected = self.dimension();
        if expected == 0 {
            return Err(ProjectionError::InvalidDimension);
        }
        if self.cell_dimensions.len() != expected {
            return Err(ProjectionError::CellDimensionMismatch {
                expected,
                got: self.cell_dimensions.len(),
            });
        }
        if let Some((axis, &value)) = self
            .cell_dimensions
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(ProjectionError::InvalidCellDimension { axis, value });
        }
        Ok(())
    }

    /// Estimate cell widths from the extent of sampled projections.
    ///
    /// Draws `extent_samples` uniform states, projects them, and splits the
    /// observed range of each axis into `dimension_splits` cells. An axis
    /// whose width comes out below machine epsilon gets width `1.0` and a
    /// warning. Returns the indices of those degenerate axes.
    ///
    /// Does nothing for a zero-dimensional projection.
    ///
    /// # Errors
    /// [`ProjectionError::InvalidSettings`] if the settings cannot yield
    /// positive widths; the stored cell dimensions are left untouched.
    pub fn infer_cell_dimensions<S>(&mut self, sampler: &mut S) -> Result<Vec<usize>>
    where
        S: StateSampler + ?Sized,
        S::State: Borrow<P::State>,
    {
        self.settings.validate()?;
        let dim = self.dimension();
        if dim == 0 {
            return Ok(Vec::new());
        }

        let mut proj = EuclideanProjection::zeros(dim);
        let mut low = vec![f64::INFINITY; dim];
        let mut high = vec![f64::NEG_INFINITY; dim];

        for _ in 0..self.settings.extent_samples {
            let state = sampler.sample_uniform();
            let state: &P::State = state.borrow();
            self.projection.project_into(state, &mut proj);
            for (j, &v) in proj.values().iter().enumerate() {
                low[j] = low[j].min(v);
                high[j] = high[j].max(v);
            }
        }

        let splits = self.settings.dimension_splits;
        let mut degenerate = Vec::new();
        self.cell_dimensions = low
            .iter()
            .zip(high.iter())
            .enumerate()
            .map(|(j, (l, h))| {
                let width = (h - l) / splits;
                if width < f64::EPSILON {
                    warn!(
                        axis = j,
                        space = sampler.space_name(),
                        "Inferred cell size for dimension {} of a projection for space {} is 0. \
                         Setting arbitrary value of 1 instead.",
                        j,
                        sampler.space_name()
                    );
                    degenerate.push(j);
                    1.0
                } else {
                    width
                }
            })
            .collect();

        Ok(degenerate)
    }

    /// Prepare the evaluator for use.
    ///
    /// Infers cell widths if none are set and the projection has at least
    /// one axis, then validates. Calling it again changes nothing.
    pub fn setup<S>(&mut self, sampler: &mut S) -> Result<()>
    where
        S: StateSampler + ?Sized,
        S::State: Borrow<P::State>,
    {
        if self.cell_dimensions.is_empty() && self.dimension() > 0 {
            let degenerate = self.infer_cell_dimensions(sampler)?;
            debug!(
                dimension = self.dimension(),
                degenerate = degenerate.len(),
                space = sampler.space_name(),
                "inferred projection cell dimensions"
            );
        }
        self.check_cell_dimensions()
    }

    // --- Discretization ---

    /// Grid cell containing `projection`: `floor(value / width)` per axis.
    ///
    /// Negative values floor toward negative infinity, so `-0.5` with
    /// width `1.0` lands in cell `-1`.
    pub fn compute_coordinates(
        &self,
        projection: &EuclideanProjection,
    ) -> Result<ProjectionCoordinates> {
        self.check_cell_dimensions()?;
        debug_assert_eq!(
            projection.dimension(),
            self.cell_dimensions.len(),
            "projection has wrong dimension"
        );
        let cells = projection
            .values()
            .iter()
            .zip(self.cell_dimensions.iter())
            // `as` saturates at the i32 range
            .map(|(v, w)| (v / w).floor() as i32)
            .collect();
        Ok(ProjectionCoordinates::from_cells(cells))
    }

    /// Project `state` and return its grid cell.
    pub fn compute_coordinates_for_state(&self, state: &P::State) -> Result<ProjectionCoordinates> {
        self.check_cell_dimensions()?;
        let proj = self.projection.project(state);
        self.compute_coordinates(&proj)
    }

    // --- Debug output ---

    /// Write the projection dimension and cell widths.
    pub fn print_settings<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Projection of dimension {}", self.dimension())?;
        let widths: Vec<String> = self.cell_dimensions.iter().map(|w| w.to_string()).collect();
        writeln!(out, "Cell dimensions: [{}]", widths.join(" "))
    }

    /// Write the values of `projection` on one line, or `NULL` for a
    /// zero-dimensional projection.
    pub fn print_projection<W: io::Write + ?Sized>(
        &self,
        projection: &EuclideanProjection,
        out: &mut W,
    ) -> io::Result<()> {
        let d = self.dimension();
        if d == 0 {
            return writeln!(out, "NULL");
        }
        let values: Vec<String> = projection
            .values()
            .iter()
            .take(d)
            .map(|v| v.to_string())
            .collect();
        writeln!(out, "{}", values.join(" "))
    }
}
