use crate::error::{Result, SpectralError};
use crate::sample::Sample;
use crate::shape::Shape;

use super::SpectralDistribution;

// ---------------------------------------------------------------------------
// Binary operators with scalar/vector broadcasting
// ---------------------------------------------------------------------------

/// Element-wise arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
        }
    }
}

/// Combining two samples, replicating a scalar across the channels of a
/// vector when the kinds differ.
pub trait Broadcast<Rhs = Self> {
    type Output: Sample;

    fn broadcast(&self, rhs: &Rhs, op: BinaryOp) -> Result<Self::Output>;
}

impl Broadcast<f64> for f64 {
    type Output = f64;

    fn broadcast(&self, rhs: &f64, op: BinaryOp) -> Result<f64> {
        Ok(op.apply(*self, *rhs))
    }
}

impl Broadcast<Vec<f64>> for f64 {
    type Output = Vec<f64>;

    fn broadcast(&self, rhs: &Vec<f64>, op: BinaryOp) -> Result<Vec<f64>> {
        Ok(rhs.iter().map(|b| op.apply(*self, *b)).collect())
    }
}

impl Broadcast<f64> for Vec<f64> {
    type Output = Vec<f64>;

    fn broadcast(&self, rhs: &f64, op: BinaryOp) -> Result<Vec<f64>> {
        Ok(self.iter().map(|a| op.apply(*a, *rhs)).collect())
    }
}

impl Broadcast<Vec<f64>> for Vec<f64> {
    type Output = Vec<f64>;

    fn broadcast(&self, rhs: &Vec<f64>, op: BinaryOp) -> Result<Vec<f64>> {
        if self.len() != rhs.len() {
            return Err(SpectralError::Validation(format!(
                "channel counts differ: {} vs {}",
                self.len(),
                rhs.len()
            )));
        }
        Ok(self.iter().zip(rhs).map(|(a, b)| op.apply(*a, *b)).collect())
    }
}

// ---------------------------------------------------------------------------
// Operand – right-hand side of distribution arithmetic
// ---------------------------------------------------------------------------

/// Anything that can supply one value per grid position of a shape.
///
/// Distributions are resampled onto the shape; bare numbers and vectors
/// are repeated as they are.
pub trait Operand {
    type Value: Sample;

    fn values_on(&self, shape: &Shape) -> Result<Vec<Self::Value>>;
}

impl<U: Sample> Operand for SpectralDistribution<U> {
    type Value = U;

    fn values_on(&self, shape: &Shape) -> Result<Vec<U>> {
        let wavelengths: Vec<f64> = shape.wavelengths().collect();
        self.sample_many(&wavelengths)
    }
}

impl Operand for f64 {
    type Value = f64;

    fn values_on(&self, shape: &Shape) -> Result<Vec<f64>> {
        Ok(vec![*self; shape.count()])
    }
}

impl Operand for Vec<f64> {
    type Value = Vec<f64>;

    fn values_on(&self, shape: &Shape) -> Result<Vec<Vec<f64>>> {
        let value = Vec::<f64>::from_channels(self)?;
        Ok(vec![value; shape.count()])
    }
}

impl<const N: usize> Operand for [f64; N] {
    type Value = Vec<f64>;

    fn values_on(&self, shape: &Shape) -> Result<Vec<Vec<f64>>> {
        self.to_vec().values_on(shape)
    }
}

/// Output distribution of `SpectralDistribution<T> ⊕ O`.
pub type Broadcasted<T, O> = SpectralDistribution<<T as Broadcast<<O as Operand>::Value>>::Output>;

impl<T: Sample> SpectralDistribution<T> {
    /// Apply `op` between every sample and `rhs`, on this distribution's shape.
    pub fn apply<O>(&self, rhs: &O, op: BinaryOp) -> Result<Broadcasted<T, O>>
    where
        O: Operand,
        T: Broadcast<O::Value>,
    {
        let rhs = rhs.values_on(self.shape())?;
        let samples = self
            .samples()
            .iter()
            .zip(&rhs)
            .map(|(a, b)| a.broadcast(b, op))
            .collect::<Result<Vec<_>>>()?;
        self.derive(*self.shape(), samples)
    }

    pub fn add<O>(&self, rhs: &O) -> Result<Broadcasted<T, O>>
    where
        O: Operand,
        T: Broadcast<O::Value>,
    {
        self.apply(rhs, BinaryOp::Add)
    }

    pub fn subtract<O>(&self, rhs: &O) -> Result<Broadcasted<T, O>>
    where
        O: Operand,
        T: Broadcast<O::Value>,
    {
        self.apply(rhs, BinaryOp::Subtract)
    }

    pub fn multiply<O>(&self, rhs: &O) -> Result<Broadcasted<T, O>>
    where
        O: Operand,
        T: Broadcast<O::Value>,
    {
        self.apply(rhs, BinaryOp::Multiply)
    }

    pub fn divide<O>(&self, rhs: &O) -> Result<Broadcasted<T, O>>
    where
        O: Operand,
        T: Broadcast<O::Value>,
    {
        self.apply(rhs, BinaryOp::Divide)
    }
}
