use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = SpectralError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// SpectralError – everything the sampling core can reject
// ---------------------------------------------------------------------------

/// Errors raised by shapes, samplers and distributions.
///
/// All of them describe programming or configuration mistakes; nothing here
/// is transient, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    /// Malformed shape, or an interpolator queried outside `[0, n-1]`.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Sample data that does not fit its shape or strategy.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Extrapolation requested where the extrapolator is not defined.
    #[error("Cannot extrapolate at index {index} of {count} samples: {reason}")]
    Extrapolation {
        index: f64,
        count: usize,
        reason: &'static str,
    },

    /// A combination left no wavelengths to sample.
    #[error("Degenerate result: {0}")]
    DegenerateResult(String),
}

impl SpectralError {
    pub(crate) fn extrapolation(index: f64, count: usize, reason: &'static str) -> Self {
        Self::Extrapolation {
            index,
            count,
            reason,
        }
    }
}
