use super::cache::BoundaryCache;
use super::extrapolate::Extrapolator;
use super::interpolate::Interpolator;
use super::Channel;
use crate::error::Result;
use crate::sample::Sample;

// ---------------------------------------------------------------------------
// Sampler – interpolator + extrapolator, valid over all reals
// ---------------------------------------------------------------------------

/// One interpolator and one extrapolator composed into a sampler defined for
/// every array-domain coordinate.
///
/// `0 <= x < n-1` is interpolated, everything else is extrapolated. The same
/// scalar path serves scalar samples, each column of vector samples
/// ([`Sample::sample`]) and bulk queries ([`sample_many`](Self::sample_many)).
///
/// The boundary cache assumes the sampler keeps being asked about the same
/// sample array. Call [`clear_cache`](Self::clear_cache) before pointing it
/// at different data.
#[derive(Debug, Clone)]
pub struct Sampler {
    interpolator: Interpolator,
    extrapolator: Extrapolator,
    cache: BoundaryCache,
}

impl Sampler {
    pub fn new(interpolator: Interpolator, extrapolator: Extrapolator) -> Self {
        Sampler {
            interpolator,
            extrapolator,
            cache: BoundaryCache::new(),
        }
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    pub fn extrapolator(&self) -> Extrapolator {
        self.extrapolator
    }

    /// Boundary points memoised so far.
    pub fn cache(&self) -> &BoundaryCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Sample one channel at array-domain coordinate `x`.
    pub fn sample_channel<C>(&self, x: f64, samples: &C) -> Result<f64>
    where
        C: Channel + ?Sized,
    {
        let last = samples.len() as f64 - 1.0;
        if x >= 0.0 && x < last {
            self.interpolator.sample_at_cached(x, samples, &self.cache)
        } else {
            self.extrapolator.extrapolate(x, samples)
        }
    }

    /// Sample scalar or vector samples at `x`.
    pub fn sample_one<T: Sample>(&self, x: f64, samples: &[T]) -> Result<T> {
        T::sample(self, x, samples)
    }

    /// Sample at every coordinate of `xs`, preserving order.
    pub fn sample_many<T: Sample>(&self, xs: &[f64], samples: &[T]) -> Result<Vec<T>> {
        xs.iter().map(|&x| self.sample_one(x, samples)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES_1D: [f64; 6] = [0.0, 4.0, 3.5, 1.7, 4.0, 5.0];

    fn samples_2d() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 3.0],
            vec![4.0, 2.0],
            vec![3.5, 2.6],
            vec![1.7, 1.5],
            vec![4.0, -2.5],
            vec![5.0, -2.1],
        ]
    }

    fn linear() -> Sampler {
        Sampler::new(Interpolator::Linear, Extrapolator::Nearest)
    }

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn scalar_interpolation_and_extrapolation() {
        let sampler = linear();
        let x = [0.4, 1.2, 2.25, 4.6, 5.0, -1.0, -3.4, 0.0, 5.34];
        let y = [1.6, 3.9, 3.05, 4.6, 5.0, 0.0, 0.0, 0.0, 5.0];
        for (&x, &y) in x.iter().zip(&y) {
            let single = sampler.sample_one(x, &SAMPLES_1D).unwrap();
            assert!((single - y).abs() < 1e-10);
        }
        assert_all_close(&sampler.sample_many(&x, &SAMPLES_1D).unwrap(), &y);
    }

    #[test]
    fn scalar_integers_return_samples() {
        let sampler = linear();
        let x: Vec<f64> = (0..6).map(f64::from).collect();
        assert_all_close(&sampler.sample_many(&x, &SAMPLES_1D).unwrap(), &SAMPLES_1D);
    }

    #[test]
    fn vector_interpolation_and_extrapolation() {
        let sampler = linear();
        let samples = samples_2d();
        let x = [0.4, 1.2, 2.25, 4.6, 5.0, -1.0, -3.4, 0.0, 5.34];
        let y = [
            [1.6, 2.6],
            [3.9, 2.12],
            [3.05, 2.325],
            [4.6, -2.26],
            [5.0, -2.1],
            [0.0, 3.0],
            [0.0, 3.0],
            [0.0, 3.0],
            [5.0, -2.1],
        ];
        let many = sampler.sample_many(&x, &samples).unwrap();
        for ((&x, expected), bulk) in x.iter().zip(&y).zip(&many) {
            assert_all_close(&sampler.sample_one(x, &samples).unwrap(), expected);
            assert_all_close(bulk, expected);
        }
    }

    #[test]
    fn vector_matches_per_channel_scalar() {
        let rows: Vec<Vec<f64>> = (0..9)
            .map(|i| {
                let i = i as f64;
                vec![i.sin() * 3.0, i * i - 4.0, (i * 0.7).cos()]
            })
            .collect();
        let xs = [-0.5, 0.0, 0.3, 1.5, 3.75, 6.2, 7.9, 8.0, 9.4];
        for interp in [
            Interpolator::Nearest,
            Interpolator::Linear,
            Interpolator::Sprague,
        ] {
            let vector = Sampler::new(interp, Extrapolator::Nearest);
            let got = vector.sample_many(&xs, &rows).unwrap();
            for c in 0..3 {
                let column: Vec<f64> = rows.iter().map(|r| r[c]).collect();
                let scalar = Sampler::new(interp, Extrapolator::Nearest);
                let expected = scalar.sample_many(&xs, &column).unwrap();
                for (row, e) in got.iter().zip(&expected) {
                    assert_eq!(row[c].to_bits(), e.to_bits(), "{interp:?} channel {c}");
                }
            }
        }
    }

    #[test]
    fn sprague_fills_cache_per_column() {
        let rows: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64, -(i as f64)]).collect();
        let sampler = Sampler::new(Interpolator::Sprague, Extrapolator::Nearest);
        sampler.sample_one(0.5, &rows).unwrap();
        assert!(sampler.cache().contains(0, -1));
        assert!(sampler.cache().contains(1, -1));
        sampler.clear_cache();
        assert!(sampler.cache().is_empty());
    }

    #[test]
    fn single_sample_always_extrapolates() {
        let sampler = Sampler::new(Interpolator::Linear, Extrapolator::Nearest);
        assert_eq!(sampler.sample_one(0.0, &[7.0]).unwrap(), 7.0);
        assert_eq!(sampler.sample_one(3.5, &[7.0]).unwrap(), 7.0);
    }
}
