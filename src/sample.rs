use std::fmt;

use crate::error::{Result, SpectralError};
use crate::sampling::{ColumnView, Sampler};

// ---------------------------------------------------------------------------
// Sample – what a distribution can hold per wavelength
// ---------------------------------------------------------------------------

/// A per-wavelength value: a scalar `f64` or a fixed-length vector of
/// channels (`Vec<f64>`), e.g. the X, Y and Z of a colour-matching function.
pub trait Sample: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// `None` for scalars, the channel count for vectors.
    fn width(&self) -> Option<usize>;

    /// Sample `samples` at array-domain coordinate `x`.
    fn sample(sampler: &Sampler, x: f64, samples: &[Self]) -> Result<Self>;

    /// Pointwise sum; vectors sum each channel independently.
    fn sum(samples: &[Self]) -> Self;

    /// Build a sample from raw channel values.
    fn from_channels(values: &[f64]) -> Result<Self>;

    /// Raw channel values of this sample.
    fn channels(&self) -> Vec<f64>;
}

impl Sample for f64 {
    fn width(&self) -> Option<usize> {
        None
    }

    fn sample(sampler: &Sampler, x: f64, samples: &[Self]) -> Result<Self> {
        sampler.sample_channel(x, samples)
    }

    fn sum(samples: &[Self]) -> Self {
        samples.iter().fold(0.0, |acc, v| acc + v)
    }

    fn from_channels(values: &[f64]) -> Result<Self> {
        match values {
            [value] => Ok(*value),
            _ => Err(SpectralError::Validation(format!(
                "a scalar sample needs exactly one value, got {}",
                values.len()
            ))),
        }
    }

    fn channels(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl Sample for Vec<f64> {
    fn width(&self) -> Option<usize> {
        Some(self.len())
    }

    fn sample(sampler: &Sampler, x: f64, samples: &[Self]) -> Result<Self> {
        let width = samples.first().map_or(0, Vec::len);
        (0..width)
            .map(|column| sampler.sample_channel(x, &ColumnView::new(samples, column)))
            .collect()
    }

    fn sum(samples: &[Self]) -> Self {
        let width = samples.first().map_or(0, Vec::len);
        samples.iter().fold(vec![0.0; width], |mut acc, v| {
            acc.iter_mut().zip(v).for_each(|(a, b)| *a += b);
            acc
        })
    }

    fn from_channels(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(SpectralError::Validation(
                "a vector sample needs at least one channel".to_string(),
            ));
        }
        Ok(values.to_vec())
    }

    fn channels(&self) -> Vec<f64> {
        self.clone()
    }
}
