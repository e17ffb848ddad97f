use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampling::{Extrapolator, Interpolator, Sampler};

// ---------------------------------------------------------------------------
// SamplingConfig – which strategies a distribution samples with
// ---------------------------------------------------------------------------

/// Interpolation and extrapolation choice of a distribution.
///
/// An unset interpolator means "pick by sample count": Sprague from six
/// samples on, linear below. Extrapolation defaults to nearest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolator: Option<Interpolator>,
    pub extrapolator: Extrapolator,
}

impl SamplingConfig {
    pub fn with_interpolator(self, interpolator: Interpolator) -> Self {
        SamplingConfig {
            interpolator: Some(interpolator),
            ..self
        }
    }

    pub fn with_extrapolator(self, extrapolator: Extrapolator) -> Self {
        SamplingConfig {
            extrapolator,
            ..self
        }
    }

    /// Interpolator used for `count` samples.
    pub fn interpolator_for(&self, count: usize) -> Interpolator {
        self.interpolator
            .unwrap_or_else(|| Interpolator::default_for(count))
    }

    /// A fresh sampler for `count` samples, rejecting strategies that need more.
    pub fn sampler_for(&self, count: usize) -> Result<Sampler> {
        let interpolator = self.interpolator_for(count);
        interpolator.validate(count)?;
        self.extrapolator.validate(count)?;
        Ok(Sampler::new(interpolator, self.extrapolator))
    }

    /// This config adjusted for `count` samples.
    ///
    /// An explicit interpolator that cannot handle `count` samples is dropped
    /// in favour of the count-based default; such an extrapolator falls back
    /// to [`Extrapolator::Nearest`].
    pub(crate) fn carried_to(self, count: usize) -> Self {
        let mut carried = self;
        if let Some(interpolator) = self.interpolator {
            if interpolator.validate(count).is_err() {
                log::warn!(
                    "{interpolator:?} interpolation needs {} samples, {count} available; using {:?}",
                    interpolator.min_samples(),
                    Interpolator::default_for(count)
                );
                carried.interpolator = None;
            }
        }
        if self.extrapolator.validate(count).is_err() {
            log::warn!(
                "{:?} extrapolation needs {} samples, {count} available; using nearest",
                self.extrapolator,
                self.extrapolator.min_samples()
            );
            carried.extrapolator = Extrapolator::Nearest;
        }
        carried
    }
}
