use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectralError};

/// Tolerance for the span being an integer multiple of the interval.
const SPAN_TOLERANCE: f64 = 1e-8;

// ---------------------------------------------------------------------------
// Shape – closed, evenly sampled wavelength domain
// ---------------------------------------------------------------------------

/// The domain `[start, end]` of a distribution and its sampling interval.
///
/// A shape is validated once on construction and is immutable afterwards.
/// Sample `i` of a distribution on this shape sits at `start + i * interval`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShape", into = "RawShape")]
pub struct Shape {
    start: f64,
    end: f64,
    interval: f64,
}

/// Unvalidated mirror of [`Shape`] used for (de)serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawShape {
    start: f64,
    end: f64,
    interval: f64,
}

impl TryFrom<RawShape> for Shape {
    type Error = SpectralError;

    fn try_from(raw: RawShape) -> Result<Self> {
        Shape::new(raw.start, raw.end, raw.interval)
    }
}

impl From<Shape> for RawShape {
    fn from(shape: Shape) -> Self {
        RawShape {
            start: shape.start,
            end: shape.end,
            interval: shape.interval,
        }
    }
}

impl Shape {
    /// Build a shape from its first and last wavelength and the interval.
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self> {
        let shape = Shape {
            start,
            end,
            interval,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Build a shape from a `[start, end]` domain and the interval.
    pub fn from_domain([start, end]: [f64; 2], interval: f64) -> Result<Self> {
        Self::new(start, end, interval)
    }

    fn validate(&self) -> Result<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.interval.is_finite()) {
            return Err(SpectralError::Domain(format!(
                "start {}, end {} and interval {} must be finite",
                self.start, self.end, self.interval
            )));
        }
        if !(self.start <= self.end) {
            return Err(SpectralError::Domain(format!(
                "end wavelength {} must be equal or larger than start wavelength {}",
                self.end, self.start
            )));
        }
        if !(self.interval > 0.0) {
            return Err(SpectralError::Domain(format!(
                "interval {} must be larger than zero",
                self.interval
            )));
        }
        // Remainders just below one interval are float noise, not a mismatch.
        let remainder = (self.end - self.start) % self.interval;
        if remainder > SPAN_TOLERANCE && remainder < self.interval - SPAN_TOLERANCE {
            return Err(SpectralError::Domain(format!(
                "span [{}, {}] does not match sampling interval {}",
                self.start, self.end, self.interval
            )));
        }
        Ok(())
    }

    /// Wavelength of the first sample.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Wavelength of the last sample.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Distance between neighbouring samples.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// `[start, end]`.
    pub fn domain(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    /// Number of grid positions, rounded to absorb float error.
    pub fn count(&self) -> usize {
        ((self.end - self.start) / self.interval).round() as usize + 1
    }

    /// Inclusive domain membership.
    pub fn is_in_domain(&self, wavelength: f64) -> bool {
        wavelength >= self.start && wavelength <= self.end
    }

    /// Fractional sample index of `wavelength`; `0` is the first sample.
    pub fn to_array_domain(&self, wavelength: f64) -> f64 {
        (wavelength - self.start) / self.interval
    }

    /// Wavelength of grid position `index`.
    pub fn wavelength_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.interval
    }

    /// Lazy ascending sequence of the `count` grid wavelengths.
    pub fn wavelengths(&self) -> Wavelengths {
        Wavelengths {
            shape: *self,
            next: 0,
            count: self.count(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] @ {}", self.start, self.end, self.interval)
    }
}

/// Iterator over the grid wavelengths of a [`Shape`].
#[derive(Debug, Clone)]
pub struct Wavelengths {
    shape: Shape,
    next: usize,
    count: usize,
}

impl Iterator for Wavelengths {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let wavelength = self.shape.wavelength_at(self.next);
        self.next += 1;
        Some(wavelength)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Wavelengths {}
