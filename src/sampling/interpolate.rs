use serde::{Deserialize, Serialize};

use super::cache::BoundaryCache;
use super::extrapolate::{sprague_boundary, SPRAGUE_BOUNDARY_SAMPLES};
use super::{linear_combination, window, Channel, GRID_TOLERANCE};
use crate::error::{Result, SpectralError};

/// Rows produce the polynomial coefficients `a0..a5` from a six-point window.
const SPRAGUE_COEFFICIENTS: [[f64; 6]; 6] = [
    [0.0, 0.0, 24.0, 0.0, 0.0, 0.0],
    [2.0, -16.0, 0.0, 16.0, -2.0, 0.0],
    [-1.0, 16.0, -30.0, 16.0, -1.0, 0.0],
    [-9.0, 39.0, -70.0, 66.0, -33.0, 7.0],
    [13.0, -64.0, 126.0, -124.0, 61.0, -12.0],
    [-5.0, 25.0, -50.0, 50.0, -25.0, 5.0],
];
const SPRAGUE_SCALE: f64 = 1.0 / 24.0;

// ---------------------------------------------------------------------------
// Interpolator – values between grid points
// ---------------------------------------------------------------------------

/// Strategy for fractional sample indices inside `[0, n-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    /// Left neighbour below the midpoint, right neighbour from it on.
    Nearest,
    /// Straight line between the two neighbours.
    Linear,
    /// CIE six-point Sprague interpolation.
    Sprague,
}

impl Interpolator {
    /// Sprague for six or more samples, linear below that.
    pub fn default_for(count: usize) -> Self {
        if count >= Interpolator::Sprague.min_samples() {
            Interpolator::Sprague
        } else {
            Interpolator::Linear
        }
    }

    /// Number of consecutive samples [`evaluate`](Self::evaluate) consumes.
    pub const fn window_size(self) -> usize {
        match self {
            Interpolator::Nearest | Interpolator::Linear => 2,
            Interpolator::Sprague => 6,
        }
    }

    /// Fewest samples this strategy can work on.
    pub const fn min_samples(self) -> usize {
        match self {
            Interpolator::Nearest | Interpolator::Linear => 1,
            Interpolator::Sprague => SPRAGUE_BOUNDARY_SAMPLES,
        }
    }

    /// Check that `count` samples are enough for this strategy.
    pub fn validate(self, count: usize) -> Result<()> {
        if count < self.min_samples() {
            return Err(SpectralError::Validation(format!(
                "{self:?} interpolator requires at least {} samples, got {count}",
                self.min_samples()
            )));
        }
        Ok(())
    }

    /// Evaluate a window at offset `t` in `[0, 1)` from its left centre point.
    pub fn evaluate(self, window: &[f64], t: f64) -> f64 {
        match self {
            Interpolator::Nearest => {
                if t < 0.5 {
                    window[0]
                } else {
                    window[1]
                }
            }
            Interpolator::Linear => window[0] + t * (window[1] - window[0]),
            Interpolator::Sprague => {
                let a = SPRAGUE_COEFFICIENTS.map(|row| linear_combination(&row, window) * SPRAGUE_SCALE);
                let powers: [f64; 6] = std::array::from_fn(|k| t.powi(k as i32));
                linear_combination(&powers, &a)
            }
        }
    }

    /// Sample at array-domain coordinate `x`, without memoising boundary points.
    pub fn sample_at<C>(self, x: f64, samples: &C) -> Result<f64>
    where
        C: Channel + ?Sized,
    {
        self.sample_at_with(x, samples, None)
    }

    /// Sample at array-domain coordinate `x`, memoising boundary points in `cache`.
    pub fn sample_at_cached<C>(self, x: f64, samples: &C, cache: &BoundaryCache) -> Result<f64>
    where
        C: Channel + ?Sized,
    {
        self.sample_at_with(x, samples, Some(cache))
    }

    fn sample_at_with<C>(self, x: f64, samples: &C, cache: Option<&BoundaryCache>) -> Result<f64>
    where
        C: Channel + ?Sized,
    {
        let n = samples.len();
        self.validate(n)?;
        let last = (n - 1) as f64;
        if !(0.0..=last).contains(&x) {
            return Err(SpectralError::Domain(format!(
                "cannot interpolate outside [0, {last}]: x = {x}"
            )));
        }

        // Grid points come back exactly, without polynomial round-off.
        let nearest = x.round();
        if (x - nearest).abs() < GRID_TOLERANCE {
            return exact(samples, nearest as usize);
        }

        let x0 = x.floor();
        let t = x - x0;
        let center = x0 as isize;
        let w = match self {
            Interpolator::Nearest | Interpolator::Linear => {
                window(samples, center, self.window_size(), None)?
            }
            Interpolator::Sprague => {
                let column = samples.column();
                let mut boundary = |i: isize| match cache {
                    Some(cache) => {
                        cache.get_or_try_insert_with(column, i, || sprague_boundary(i, samples))
                    }
                    None => sprague_boundary(i, samples),
                };
                window(samples, center, self.window_size(), Some(&mut boundary))?
            }
        };
        Ok(self.evaluate(&w, t))
    }
}

fn exact<C: Channel + ?Sized>(samples: &C, index: usize) -> Result<f64> {
    samples.get(index).ok_or_else(|| {
        SpectralError::Domain(format!("index {index} outside {} samples", samples.len()))
    })
}
