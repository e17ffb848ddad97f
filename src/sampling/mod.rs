/// Sampling layer: turning a fractional sample index into a value.
///
/// Architecture:
/// ```text
///   x (array-domain coordinate)
///        │
///        ▼
///   ┌──────────┐   0 <= x < n-1   ┌──────────────┐
///   │ Sampler  │ ───────────────▶ │ Interpolator │ ─▶ window ─▶ evaluate
///   └──────────┘                  └──────────────┘      │
///        │ otherwise                                     ▼ (edges)
///        ▼                                        ┌───────────────┐
///   ┌──────────────┐                              │ BoundaryCache │
///   │ Extrapolator │                              └───────────────┘
///   └──────────────┘
/// ```
///
/// Everything below the [`Sampler`] works on one [`Channel`] of `f64`s.
/// Vector samples are handled by driving the same code once per
/// [`ColumnView`].
pub mod cache;
pub mod extrapolate;
pub mod interpolate;
pub mod sampler;

pub use cache::BoundaryCache;
pub use extrapolate::{sprague_boundary, Extrapolator};
pub use interpolate::Interpolator;
pub use sampler::Sampler;

use crate::error::{Result, SpectralError};

/// Distance from an integer below which a coordinate counts as on-grid.
pub(crate) const GRID_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Channel – indexed read access to one column of samples
// ---------------------------------------------------------------------------

/// A read-only, indexable sequence of scalar samples.
pub trait Channel {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Sample at `index`, `None` past the end.
    fn get(&self, index: usize) -> Option<f64>;

    /// Column this channel reads; keys the boundary cache.
    fn column(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Channel for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn get(&self, index: usize) -> Option<f64> {
        <[f64]>::get(self, index).copied()
    }
}

/// Strided view of column `column` of a row-major 2-D sample array.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    rows: &'a [Vec<f64>],
    column: usize,
}

impl<'a> ColumnView<'a> {
    pub fn new(rows: &'a [Vec<f64>], column: usize) -> Self {
        ColumnView { rows, column }
    }
}

impl Channel for ColumnView<'_> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, index: usize) -> Option<f64> {
        self.rows.get(index).and_then(|row| row.get(self.column)).copied()
    }

    fn column(&self) -> usize {
        self.column
    }
}

// ---------------------------------------------------------------------------
// Window construction
// ---------------------------------------------------------------------------

/// Out-of-range index resolver used by [`window`].
pub type Extrapolate<'a> = &'a mut dyn FnMut(isize) -> Result<f64>;

/// Collect `size` consecutive samples around `center`.
///
/// The window covers `center - (size/2 - 1) ..= center + size/2`, so a size
/// of 2 straddles a fractional position and a size of 6 reaches three points
/// to each side. Indices outside `[0, n-1]` go to `extrapolate`; without one
/// they are an error.
pub fn window<C>(
    samples: &C,
    center: isize,
    size: usize,
    mut extrapolate: Option<Extrapolate<'_>>,
) -> Result<Vec<f64>>
where
    C: Channel + ?Sized,
{
    let first = center - (size as isize / 2 - 1);
    (first..first + size as isize)
        .map(|i| {
            let inside = usize::try_from(i).ok().and_then(|i| samples.get(i));
            match (inside, extrapolate.as_mut()) {
                (Some(value), _) => Ok(value),
                (None, Some(f)) => f(i),
                (None, None) => Err(SpectralError::extrapolation(
                    i as f64,
                    samples.len(),
                    "window reaches outside the samples and no extrapolation was given",
                )),
            }
        })
        .collect()
}

/// `Σ a[i] * b[i]`
pub(crate) fn linear_combination(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}
