use serde::{Deserialize, Serialize};

use super::{linear_combination, Channel, GRID_TOLERANCE};
use crate::error::{Result, SpectralError};

/// Coefficients for the virtual points two (row 0) and one (row 1) steps
/// beyond an edge, applied to the six nearest real samples.
const BOUNDARY_COEFFICIENTS: [[f64; 6]; 2] = [
    [884.0, -1960.0, 3033.0, -2648.0, 1080.0, -180.0],
    [508.0, -540.0, 488.0, -367.0, 144.0, -24.0],
];
const BOUNDARY_SCALE: f64 = 1.0 / 209.0;

/// Samples needed on each edge to extrapolate Sprague boundary points.
pub const SPRAGUE_BOUNDARY_SAMPLES: usize = 6;

// ---------------------------------------------------------------------------
// Extrapolator – values for indices outside [0, n-1]
// ---------------------------------------------------------------------------

/// Strategy for sample indices outside `[0, n-1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolator {
    /// Repeat the first or last sample.
    #[default]
    Nearest,
    /// The virtual points `-2, -1, n, n+1` of the Sprague formula, the edge
    /// samples everywhere else.
    SpragueBoundary,
}

impl Extrapolator {
    /// Fewest samples this strategy can work on.
    pub const fn min_samples(self) -> usize {
        match self {
            Extrapolator::Nearest => 1,
            Extrapolator::SpragueBoundary => SPRAGUE_BOUNDARY_SAMPLES,
        }
    }

    /// Check that `count` samples are enough for this strategy.
    pub fn validate(self, count: usize) -> Result<()> {
        if count < self.min_samples() {
            return Err(SpectralError::Validation(format!(
                "{self:?} extrapolator requires at least {} samples, got {count}",
                self.min_samples()
            )));
        }
        Ok(())
    }

    /// Value at `index`, which should lie outside `[0, n-1]`.
    ///
    /// Indices at or beyond the edges repeat the edge sample. For
    /// [`SpragueBoundary`](Self::SpragueBoundary) the four virtual points
    /// `-2, -1, n, n+1` (give or take float noise) are computed from the
    /// boundary formula instead. Strictly interior indices are an error.
    pub fn extrapolate<C>(self, index: f64, samples: &C) -> Result<f64>
    where
        C: Channel + ?Sized,
    {
        let n = samples.len();
        if n == 0 {
            return Err(SpectralError::Validation(
                "cannot extrapolate from an empty sample array".to_string(),
            ));
        }
        if let Extrapolator::SpragueBoundary = self {
            if let Some(virtual_index) = virtual_point(index, n) {
                return sprague_boundary(virtual_index, samples);
            }
        }
        let last = (n - 1) as f64;
        if index <= 0.0 {
            first(samples)
        } else if index >= last {
            edge(samples, n - 1)
        } else {
            Err(SpectralError::extrapolation(
                index,
                n,
                "cannot extrapolate inside the domain",
            ))
        }
    }
}

/// `index` as one of `-2, -1, n, n+1`, if it is one.
fn virtual_point(index: f64, n: usize) -> Option<isize> {
    let nearest = index.round();
    if !((index - nearest).abs() < GRID_TOLERANCE) {
        return None;
    }
    let len = n as isize;
    let nearest = nearest as isize;
    [-2, -1, len, len + 1].contains(&nearest).then_some(nearest)
}

fn first<C: Channel + ?Sized>(samples: &C) -> Result<f64> {
    edge(samples, 0)
}

fn edge<C: Channel + ?Sized>(samples: &C, index: usize) -> Result<f64> {
    samples.get(index).ok_or_else(|| {
        SpectralError::Validation(format!("sample {index} missing from channel"))
    })
}

/// Sprague virtual point at `index`, one of `-2, -1, n, n+1`.
///
/// Combines the six samples nearest to the edge (reversed on the right edge)
/// with the fixed boundary coefficients, scaled by `1/209`.
pub fn sprague_boundary<C>(index: isize, samples: &C) -> Result<f64>
where
    C: Channel + ?Sized,
{
    let n = samples.len();
    if n < SPRAGUE_BOUNDARY_SAMPLES {
        return Err(SpectralError::Validation(format!(
            "Sprague boundary extrapolation requires at least {SPRAGUE_BOUNDARY_SAMPLES} samples, got {n}"
        )));
    }
    let len = n as isize;
    if index < -2 || index > len + 1 {
        return Err(SpectralError::extrapolation(
            index as f64,
            n,
            "out of Sprague extrapolation range [-2, n+1]",
        ));
    }
    if (0..len).contains(&index) {
        return Err(SpectralError::extrapolation(
            index as f64,
            n,
            "cannot extrapolate inside the domain",
        ));
    }

    let edge_window: Vec<usize> = if index < 0 {
        (0..SPRAGUE_BOUNDARY_SAMPLES).collect()
    } else {
        (n - SPRAGUE_BOUNDARY_SAMPLES..n).rev().collect()
    };
    let window = edge_window
        .into_iter()
        .map(|i| edge(samples, i))
        .collect::<Result<Vec<f64>>>()?;

    let row = if index == -1 || index == len { 1 } else { 0 };
    Ok(linear_combination(&window, &BOUNDARY_COEFFICIENTS[row]) * BOUNDARY_SCALE)
}
