/// Data layer: reference tables in, distributions out.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SpectralData / rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SpectralData  │  domain, interval, samples, sampling
///   └──────────────┘
///        │ TryFrom
///        ▼
///   SpectralDistribution<T>
/// ```

pub mod loader;
pub mod model;
