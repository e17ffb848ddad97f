/// Spectral distributions: samples on a [`Shape`] plus the sampler that
/// reads between and beyond them.
///
/// ```text
///   wavelength ──(w - start) / interval──▶ array-domain x ──▶ Sampler ──▶ T
/// ```
///
/// Distributions are immutable; `resample`, `combine`, `map` and the
/// arithmetic operators all build new ones, carrying over the left
/// operand's sampling strategies.
pub mod ops;

use crate::config::SamplingConfig;
use crate::error::{Result, SpectralError};
use crate::sample::Sample;
use crate::sampling::{Extrapolator, Interpolator, Sampler};
use crate::shape::{Shape, Wavelengths};

// ---------------------------------------------------------------------------
// SpectralDistribution
// ---------------------------------------------------------------------------

/// A function of wavelength given by one sample per grid position of a
/// [`Shape`]; sample `i` belongs to `start + i * interval`.
///
/// `T` is `f64` for plain spectra or `Vec<f64>` for multi-channel data such
/// as colour-matching functions. Every vector sample has the same width.
#[derive(Debug, Clone)]
pub struct SpectralDistribution<T: Sample = f64> {
    shape: Shape,
    samples: Vec<T>,
    config: SamplingConfig,
    sampler: Sampler,
}

impl<T: Sample> SpectralDistribution<T> {
    /// Distribution with the default strategies for its sample count.
    pub fn new(shape: Shape, samples: Vec<T>) -> Result<Self> {
        Self::with_config(shape, samples, SamplingConfig::default())
    }

    /// Distribution sampled with the strategies in `config`.
    pub fn with_config(shape: Shape, samples: Vec<T>, config: SamplingConfig) -> Result<Self> {
        validate_samples(&shape, &samples)?;
        let sampler = config.sampler_for(samples.len())?;
        log::debug!(
            "distribution on {shape}: {} samples, {:?} interpolation, {:?} extrapolation",
            samples.len(),
            sampler.interpolator(),
            sampler.extrapolator()
        );
        Ok(SpectralDistribution {
            shape,
            samples,
            config,
            sampler,
        })
    }

    /// Distribution over `[start, end]` with the given interval.
    pub fn from_domain(domain: [f64; 2], interval: f64, samples: Vec<T>) -> Result<Self> {
        Self::new(Shape::from_domain(domain, interval)?, samples)
    }

    /// Distribution starting at `start`; the end follows from the sample count.
    pub fn from_start(start: f64, interval: f64, samples: Vec<T>) -> Result<Self> {
        if samples.is_empty() {
            return Err(SpectralError::Validation(
                "a distribution needs at least one sample".to_string(),
            ));
        }
        let end = start + (samples.len() - 1) as f64 * interval;
        Self::new(Shape::new(start, end, interval)?, samples)
    }

    /// Evaluate `f` at every grid wavelength of `shape`.
    pub fn from_function<F>(f: F, shape: Shape) -> Result<Self>
    where
        F: FnMut(f64) -> T,
    {
        Self::new(shape, shape.wavelengths().map(f).collect())
    }

    /// Same samples, sampled with `interpolator`.
    pub fn with_interpolator(self, interpolator: Interpolator) -> Result<Self> {
        let config = self.config.with_interpolator(interpolator);
        Self::with_config(self.shape, self.samples, config)
    }

    /// Same samples, extrapolated with `extrapolator`.
    pub fn with_extrapolator(self, extrapolator: Extrapolator) -> Result<Self> {
        let config = self.config.with_extrapolator(extrapolator);
        Self::with_config(self.shape, self.samples, config)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn config(&self) -> SamplingConfig {
        self.config
    }

    pub fn interpolator(&self) -> Interpolator {
        self.sampler.interpolator()
    }

    pub fn extrapolator(&self) -> Extrapolator {
        self.sampler.extrapolator()
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Grid wavelengths, ascending.
    pub fn wavelengths(&self) -> Wavelengths {
        self.shape.wavelengths()
    }

    /// `(wavelength, sample)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> + '_ {
        self.wavelengths().zip(self.samples.iter())
    }

    /// Value at `wavelength`, extrapolating outside the domain.
    pub fn sample_at(&self, wavelength: f64) -> Result<T> {
        let x = self.shape.to_array_domain(wavelength);
        self.sampler.sample_one(x, &self.samples)
    }

    /// Values at each of `wavelengths`, in order.
    pub fn sample_many(&self, wavelengths: &[f64]) -> Result<Vec<T>> {
        let xs: Vec<f64> = wavelengths
            .iter()
            .map(|&w| self.shape.to_array_domain(w))
            .collect();
        self.sampler.sample_many(&xs, &self.samples)
    }

    /// This distribution sampled on the grid of `shape`.
    pub fn resample(&self, shape: Shape) -> Result<Self> {
        log::debug!("resampling {} onto {shape}", self.shape);
        let wavelengths: Vec<f64> = shape.wavelengths().collect();
        let samples = self.sample_many(&wavelengths)?;
        self.derive(shape, samples)
    }

    /// Resample `other` onto this grid and merge pointwise with `f`.
    ///
    /// The result keeps this distribution's shape and strategies.
    pub fn combine<U, R, F>(&self, other: &SpectralDistribution<U>, mut f: F) -> Result<SpectralDistribution<R>>
    where
        U: Sample,
        R: Sample,
        F: FnMut(&T, &U) -> R,
    {
        let wavelengths: Vec<f64> = self.wavelengths().collect();
        let rhs = other.sample_many(&wavelengths)?;
        let samples = self.samples.iter().zip(&rhs).map(|(a, b)| f(a, b)).collect();
        self.derive(self.shape, samples)
    }

    /// Like [`combine`](Self::combine), restricted to the grid wavelengths
    /// that also lie inside `other`'s domain.
    pub fn zip_with<U, R, F>(&self, other: &SpectralDistribution<U>, mut f: F) -> Result<SpectralDistribution<R>>
    where
        U: Sample,
        R: Sample,
        F: FnMut(&T, &U) -> R,
    {
        let overlap: Vec<(f64, &T)> = self
            .iter()
            .filter(|(w, _)| other.shape.is_in_domain(*w))
            .collect();
        let (first, last) = match (overlap.first(), overlap.last()) {
            (Some(&(first, _)), Some(&(last, _))) => (first, last),
            _ => {
                return Err(SpectralError::DegenerateResult(format!(
                    "{} and {} share no wavelengths",
                    self.shape, other.shape
                )))
            }
        };
        let shape = Shape::new(first, last, self.shape.interval())?;
        let wavelengths: Vec<f64> = overlap.iter().map(|(w, _)| *w).collect();
        let rhs = other.sample_many(&wavelengths)?;
        let samples = overlap
            .iter()
            .zip(&rhs)
            .map(|(&(_, a), b)| f(a, b))
            .collect();
        self.derive(shape, samples)
    }

    /// Transform every sample; the sample kind may change.
    pub fn map<R, F>(&self, f: F) -> Result<SpectralDistribution<R>>
    where
        R: Sample,
        F: FnMut(&T) -> R,
    {
        self.derive(self.shape, self.samples.iter().map(f).collect())
    }

    /// Sum of all samples, per channel for vectors.
    pub fn sum(&self) -> T {
        T::sum(&self.samples)
    }

    /// New distribution on `shape` with this one's strategies.
    fn derive<R: Sample>(&self, shape: Shape, samples: Vec<R>) -> Result<SpectralDistribution<R>> {
        let config = self.config.carried_to(samples.len());
        SpectralDistribution::with_config(shape, samples, config)
    }
}

impl<T: Sample> PartialEq for SpectralDistribution<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.samples == other.samples
            && self.interpolator() == other.interpolator()
            && self.extrapolator() == other.extrapolator()
    }
}

/// Sample count must match the shape, and every sample must have the same kind.
fn validate_samples<T: Sample>(shape: &Shape, samples: &[T]) -> Result<()> {
    let first = samples.first().ok_or_else(|| {
        SpectralError::Validation("a distribution needs at least one sample".to_string())
    })?;
    if samples.len() != shape.count() {
        return Err(SpectralError::Validation(format!(
            "sample count {} does not match shape {shape} ({} samples)",
            samples.len(),
            shape.count()
        )));
    }
    let width = first.width();
    if width == Some(0) {
        return Err(SpectralError::Validation(
            "vector samples need at least one channel".to_string(),
        ));
    }
    if let Some(i) = samples.iter().position(|s| s.width() != width) {
        return Err(SpectralError::Validation(format!(
            "sample {i} has width {:?}, expected {width:?}",
            samples[i].width()
        )));
    }
    Ok(())
}
