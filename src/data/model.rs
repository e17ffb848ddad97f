use serde::{Deserialize, Serialize};

use crate::config::SamplingConfig;
use crate::distribution::SpectralDistribution;
use crate::error::{Result, SpectralError};
use crate::sample::Sample;
use crate::shape::Shape;

// ---------------------------------------------------------------------------
// SpectralData – a reference table as it comes from storage
// ---------------------------------------------------------------------------

/// Shape-plus-samples record for reference tables such as colour-matching
/// functions or standard illuminants.
///
/// ```json
/// {
///   "domain": [380, 780],
///   "interval": 5,
///   "samples": [49.98, 52.31, ...],
///   "sampling": { "interpolator": "sprague" }
/// }
/// ```
///
/// `span` is accepted as an alias for `domain`; `samples` may hold plain
/// numbers or equally long arrays of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralData<T> {
    #[serde(alias = "span")]
    pub domain: [f64; 2],
    pub interval: f64,
    pub samples: Vec<T>,
    /// Strategies to sample this table with; defaults when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling: Option<SamplingConfig>,
}

impl<T: Sample> TryFrom<SpectralData<T>> for SpectralDistribution<T> {
    type Error = SpectralError;

    fn try_from(data: SpectralData<T>) -> Result<Self> {
        let shape = Shape::from_domain(data.domain, data.interval)?;
        SpectralDistribution::with_config(shape, data.samples, data.sampling.unwrap_or_default())
    }
}

impl<T: Sample> From<&SpectralDistribution<T>> for SpectralData<T> {
    fn from(distribution: &SpectralDistribution<T>) -> Self {
        let config = distribution.config();
        SpectralData {
            domain: distribution.shape().domain(),
            interval: distribution.shape().interval(),
            samples: distribution.samples().to_vec(),
            sampling: (config != SamplingConfig::default()).then_some(config),
        }
    }
}
