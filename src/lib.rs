//! Spectral distributions sampled on regular wavelength grids.
//!
//! ```text
//!   Shape ──┐
//!           ├──▶ SpectralDistribution<T> ──▶ sample_at / resample / combine / ops
//!   samples ┘            │
//!                        ▼
//!                    Sampler ── Interpolator (nearest, linear, sprague)
//!                            └─ Extrapolator (nearest, sprague_boundary)
//! ```
//!
//! Reference tables are read with [`data::loader`] from JSON or CSV.

pub mod config;
pub mod data;
pub mod distribution;
pub mod error;
pub mod sample;
pub mod sampling;
pub mod shape;

pub use config::SamplingConfig;
pub use data::model::SpectralData;
pub use distribution::ops::{BinaryOp, Broadcast, Broadcasted, Operand};
pub use distribution::SpectralDistribution;
pub use error::{Result, SpectralError};
pub use sample::Sample;
pub use sampling::{
    sprague_boundary, window, BoundaryCache, Channel, ColumnView, Extrapolator, Interpolator,
    Sampler,
};
pub use shape::{Shape, Wavelengths};
