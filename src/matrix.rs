//! Random projection matrices.
//!
//! [`ProjectionMatrix::compute_random`] draws a `to × from` matrix of
//! standard-normal entries and orthonormalizes it with classical
//! Gram-Schmidt, which keeps distances roughly intact without paying for
//! a full SVD.
//!
//! # Row 0
//!
//! Only rows `1..to` are orthogonalized and normalized. Row 0 keeps its
//! raw normal draws and is generally not unit length, so subtracting its
//! component from later rows leaves a residual along it: rows `1..to`
//! are orthonormal among themselves but not orthogonal to row 0.
//!
//! # Scaling
//!
//! When a scale vector with one entry per source axis is supplied, every
//! entry of row `i` is divided by `scale[i]`, the factor at the row's index.

use crate::error::{ProjectionError, Result};
use crate::projection::EuclideanProjection;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense row-major linear map from `from` source axes to `to` outputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ProjectionMatrix {
    rows: Vec<Vec<f64>>,
}

impl ProjectionMatrix {
    /// Wrap explicit rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(ProjectionError::RaggedMatrix {
                    row,
                    expected,
                    got: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build a random, approximately orthonormal projection.
    ///
    /// # Arguments
    /// * `from` - Source dimension (columns)
    /// * `to` - Target dimension (rows)
    /// * `scale` - Optional per-axis scaling; only applied when it has
    ///   exactly `from` entries
    /// * `rng` - Source of standard-normal draws
    ///
    /// # Errors
    /// [`ProjectionError::DegenerateScale`] if an applied scaling factor is
    /// below machine epsilon, [`ProjectionError::ScaleOutOfRange`] if
    /// `to > from` leaves a row without a factor.
    pub fn compute_random<R: Rng + ?Sized>(
        from: usize,
        to: usize,
        scale: Option<&[f64]>,
        rng: &mut R,
    ) -> Result<Self> {
        let Self { mut rows } = Self::random_orthonormal(from, to, rng);

        if let Some(scale) = scale.filter(|s| !s.is_empty() && s.len() == from) {
            for (i, row) in rows.iter_mut().enumerate() {
                let factor = *scale.get(i).ok_or(ProjectionError::ScaleOutOfRange {
                    row: i,
                    len: scale.len(),
                })?;
                if factor.abs() < f64::EPSILON {
                    return Err(ProjectionError::DegenerateScale {
                        index: i,
                        value: factor,
                    });
                }
                for r in row.iter_mut() {
                    *r /= factor;
                }
            }
        }

        Ok(Self { rows })
    }

    /// Unscaled random projection: normal draws, then Gram-Schmidt over
    /// rows `1..to`.
    pub fn random_orthonormal<R: Rng + ?Sized>(from: usize, to: usize, rng: &mut R) -> Self {
        let mut rows: Vec<Vec<f64>> = (0..to)
            .map(|_| (0..from).map(|_| rng.sample::<f64, _>(StandardNormal)).collect())
            .collect();

        for i in 1..to {
            let (done, rest) = rows.split_at_mut(i);
            let row = &mut rest[0];
            for prev in done.iter() {
                let proj = dot(row, prev);
                for (r, p) in row.iter_mut().zip(prev.iter()) {
                    *r -= proj * p;
                }
            }
            let n = dot(row, row).sqrt();
            for r in row.iter_mut() {
                *r /= n;
            }
        }

        Self { rows }
    }

    /// Number of source axes.
    pub fn from_dim(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of output axes.
    pub fn to_dim(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Apply the matrix to `source`, writing one dot product per row.
    pub fn project_into(&self, source: &[f64], out: &mut EuclideanProjection) {
        debug_assert!(
            self.rows.iter().all(|r| r.len() == source.len()),
            "Expected source of dim={}, got {}",
            self.from_dim(),
            source.len()
        );
        for (o, row) in out.values_mut().iter_mut().zip(self.rows.iter()) {
            *o = dot(source, row);
        }
    }

    /// Apply the matrix to `source`.
    pub fn project(&self, source: &[f64]) -> EuclideanProjection {
        let mut out = EuclideanProjection::zeros(self.to_dim());
        self.project_into(source, &mut out);
        out
    }
}

impl TryFrom<Vec<Vec<f64>>> for ProjectionMatrix {
    type Error = ProjectionError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<ProjectionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ProjectionMatrix) -> Self {
        matrix.rows
    }
}

impl fmt::Display for ProjectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for v in row {
                write!(f, "{} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_later_rows_orthonormal() {
        let mut rng = seeded(7, "matrix");
        let m = ProjectionMatrix::compute_random(12, 4, None, &mut rng).unwrap();
        assert_eq!(m.to_dim(), 4);
        assert_eq!(m.from_dim(), 12);

        for i in 1..4 {
            let n = dot(m.row(i), m.row(i));
            assert!((n - 1.0).abs() < 1e-9, "row {} has squared norm {}", i, n);
            for j in 1..i {
                let d = dot(m.row(i), m.row(j));
                assert!(d.abs() < 1e-9, "rows {} and {} have dot {}", i, j, d);
            }
        }
    }

    #[test]
    fn test_first_row_keeps_raw_draws() {
        let mut rng = seeded(3, "matrix");
        let m = ProjectionMatrix::compute_random(5, 2, None, &mut rng).unwrap();

        let mut replay = seeded(3, "matrix");
        let raw: Vec<f64> = (0..5).map(|_| replay.sample::<f64, _>(StandardNormal)).collect();
        assert_eq!(m.row(0), raw.as_slice());
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = ProjectionMatrix::compute_random(8, 3, None, &mut seeded(11, "m")).unwrap();
        let b = ProjectionMatrix::compute_random(8, 3, None, &mut seeded(11, "m")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_is_linear() {
        let m = ProjectionMatrix::compute_random(6, 3, None, &mut seeded(5, "m")).unwrap();
        let x = [1.0, -2.0, 0.5, 3.0, 0.0, -1.5];
        let y = [0.25, 4.0, -3.0, 1.0, 2.0, 0.75];
        let (a, b) = (2.5, -0.75);
        let combo: Vec<f64> = x.iter().zip(y.iter()).map(|(xi, yi)| a * xi + b * yi).collect();

        let px = m.project(&x);
        let py = m.project(&y);
        let pc = m.project(&combo);
        for i in 0..3 {
            let expected = a * px[i] + b * py[i];
            assert!((pc[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_project_known_matrix() {
        let m = ProjectionMatrix::from_rows(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 1.0]]).unwrap();
        let out = m.project(&[1.0, 2.0, 3.0]);
        assert_eq!(out.values(), &[1.0, 5.0]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ProjectionMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::RaggedMatrix { row: 1, expected: 2, got: 1 }
        ));
    }

    #[test]
    fn test_degenerate_scale_rejected() {
        let scale = [1.0, 1e-20, 2.0, 1.0];
        let err = ProjectionMatrix::compute_random(4, 3, Some(&scale), &mut seeded(1, "m"))
            .unwrap_err();
        assert!(matches!(err, ProjectionError::DegenerateScale { index: 1, .. }));
    }

    #[test]
    fn test_scale_divides_by_row_factor() {
        let scale = [2.0, 4.0, 8.0];
        let plain = ProjectionMatrix::compute_random(3, 2, None, &mut seeded(9, "m")).unwrap();
        let scaled =
            ProjectionMatrix::compute_random(3, 2, Some(&scale), &mut seeded(9, "m")).unwrap();
        for i in 0..2 {
            for j in 0..3 {
                assert!((scaled.row(i)[j] - plain.row(i)[j] / scale[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_scale_of_wrong_length_ignored() {
        let scale = [2.0, 4.0];
        let plain = ProjectionMatrix::compute_random(3, 2, None, &mut seeded(9, "m")).unwrap();
        let scaled =
            ProjectionMatrix::compute_random(3, 2, Some(&scale), &mut seeded(9, "m")).unwrap();
        assert_eq!(plain, scaled);
    }

    #[test]
    fn test_scale_out_of_range_when_rows_exceed_source() {
        let scale = [1.0, 1.0];
        let err = ProjectionMatrix::compute_random(2, 3, Some(&scale), &mut seeded(2, "m"))
            .unwrap_err();
        assert!(matches!(err, ProjectionError::ScaleOutOfRange { row: 2, len: 2 }));
    }

    #[test]
    fn test_display_rows() {
        let m = ProjectionMatrix::from_rows(vec![vec![1.0, 2.5], vec![-1.0, 0.0]]).unwrap();
        assert_eq!(m.to_string(), "1 2.5 \n-1 0 \n");
    }

    #[test]
    fn test_ragged_snapshot_rejected() {
        let err = serde_json::from_str::<ProjectionMatrix>("[[1.0, 2.0], [1.0]]").unwrap_err();
        assert!(err.to_string().contains("Ragged matrix"), "got {}", err);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let m = ProjectionMatrix::compute_random(5, 2, None, &mut seeded(4, "m")).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let restored: ProjectionMatrix = serde_json::from_str(&json).unwrap();
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let (a, b) = (m.project(&x), restored.project(&x));
        for i in 0..2 {
            assert!((a[i] - b[i]).abs() < 1e-12);
        }
    }
}
