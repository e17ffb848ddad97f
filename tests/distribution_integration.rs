//! Integration tests: distributions built, sampled and combined through the
//! public API only.

use rusty_spectrum::{
    Extrapolator, Interpolator, Shape, SpectralDistribution, SpectralError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < tol, "{actual:?} vs {expected:?}");
    }
}

// ---------------------------------------------------------------------------
// Planck's law as a generated spectrum
// ---------------------------------------------------------------------------

const SPEED_OF_LIGHT: f64 = 299_792_458.0;
const PLANCK: f64 = 6.626_070_15e-34;
const BOLTZMANN: f64 = 1.380_649e-23;

/// Black-body spectral radiance in W·sr⁻¹·m⁻³ at `wavelength_nm`.
fn planck(wavelength_nm: f64, temperature: f64) -> f64 {
    let l = wavelength_nm * 1e-9;
    let c1 = 2.0 * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    let c2 = PLANCK * SPEED_OF_LIGHT / (BOLTZMANN * temperature);
    c1 / (l.powi(5) * ((c2 / l).exp() - 1.0))
}

#[test]
fn test_planck_spectrum_from_function() {
    init_logging();
    let shape = Shape::new(300.0, 600.0, 1.0).unwrap();
    let cases = [
        (2000.0, 300.0, 1.888e6),
        (5000.0, 400.0, 8.744e12),
        (10505.5, 505.1, 2.5783e14),
        (20000.0, 600.0, 6.611e14),
    ];
    for (temperature, wavelength, expected) in cases {
        let sd = SpectralDistribution::from_function(|w| planck(w, temperature), shape).unwrap();
        assert_eq!(sd.interpolator(), Interpolator::Sprague);
        let value = sd.sample_at(wavelength).unwrap();
        let relative = ((value - expected) / expected).abs();
        assert!(relative < 1e-3, "T={temperature}: {value} vs {expected}");
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn test_add_number_to_scalar_distribution() {
    let sd = SpectralDistribution::from_start(400.0, 10.0, vec![1.0, 2.0, 3.0]).unwrap();
    let out = sd.add(&2.0).unwrap();
    assert_eq!(out.shape(), sd.shape());
    assert_close(out.samples(), &[3.0, 4.0, 5.0], 1e-12);
}

#[test]
fn test_multiply_vector_distribution_by_array() {
    let sd = SpectralDistribution::from_start(0.0, 1.0, vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .unwrap();
    let out = sd.multiply(&[2.0, 10.0]).unwrap();
    assert_eq!(out.samples(), &[vec![2.0, 20.0], vec![6.0, 40.0]]);
}

#[test]
fn test_scalar_distribution_broadcasts_over_vector_distribution() {
    let scalar = SpectralDistribution::from_start(0.0, 1.0, vec![1.0, 2.0]).unwrap();
    let vector =
        SpectralDistribution::from_start(0.0, 1.0, vec![vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
    let out = scalar.add(&vector).unwrap();
    assert_eq!(out.samples(), &[vec![2.0, 2.0], vec![4.0, 4.0]]);
}

#[test]
fn test_rhs_distribution_is_resampled_onto_lhs_grid() {
    let a = SpectralDistribution::from_domain([0.0, 4.0], 1.0, vec![0.0, 1.0, 2.0, 3.0, 4.0])
        .unwrap();
    let b = SpectralDistribution::from_domain([0.0, 4.0], 2.0, vec![0.0, 2.0, 4.0]).unwrap();
    let out = a.add(&b).unwrap();
    assert_eq!(out.shape(), a.shape());
    assert_close(out.samples(), &[0.0, 2.0, 4.0, 6.0, 8.0], 1e-12);
}

#[test]
fn test_vector_distribution_broadcasts_scalar_distribution() {
    let vector =
        SpectralDistribution::from_start(0.0, 1.0, vec![vec![1.0, 3.0], vec![2.0, 4.0]]).unwrap();
    let scalar = SpectralDistribution::from_start(0.0, 1.0, vec![2.0, 4.0]).unwrap();
    let out = vector.divide(&scalar).unwrap();
    assert_eq!(out.shape(), vector.shape());
    assert_close(&out.samples()[0], &[0.5, 1.5], 1e-12);
    assert_close(&out.samples()[1], &[0.5, 1.0], 1e-12);
}

#[test]
fn test_vector_distributions_combine_channel_by_channel() {
    let a = SpectralDistribution::from_domain(
        [0.0, 4.0],
        1.0,
        (0..5).map(|i| vec![i as f64, 10.0]).collect(),
    )
    .unwrap();
    let b = SpectralDistribution::from_domain(
        [0.0, 4.0],
        2.0,
        vec![vec![0.0, 1.0], vec![2.0, 1.0], vec![4.0, 1.0]],
    )
    .unwrap();
    let out = a.subtract(&b).unwrap();
    assert_eq!(out.shape(), a.shape());
    // `b` is resampled linearly onto the finer grid of `a`.
    for row in out.samples() {
        assert_close(row, &[0.0, 9.0], 1e-12);
    }
}

#[test]
fn test_channel_mismatch_is_a_validation_error() {
    let sd = SpectralDistribution::from_start(0.0, 1.0, vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .unwrap();
    assert!(matches!(
        sd.subtract(&vec![1.0, 2.0, 3.0]),
        Err(SpectralError::Validation(_))
    ));
}

#[test]
fn test_result_keeps_left_operand_strategies() {
    let samples: Vec<f64> = (0..8).map(f64::from).collect();
    let sd = SpectralDistribution::from_start(0.0, 1.0, samples)
        .unwrap()
        .with_interpolator(Interpolator::Nearest)
        .unwrap()
        .with_extrapolator(Extrapolator::SpragueBoundary)
        .unwrap();
    let out = sd.divide(&2.0).unwrap();
    assert_eq!(out.interpolator(), Interpolator::Nearest);
    assert_eq!(out.extrapolator(), Extrapolator::SpragueBoundary);
}

// ---------------------------------------------------------------------------
// combine / zip_with / resample
// ---------------------------------------------------------------------------

#[test]
fn test_combine_over_disjoint_domains_extrapolates() {
    init_logging();
    let a = SpectralDistribution::from_domain([0.0, 2.0], 1.0, vec![1.0, 2.0, 3.0]).unwrap();
    let b = SpectralDistribution::from_domain([10.0, 12.0], 1.0, vec![7.0, 8.0, 9.0]).unwrap();
    let out = a.combine(&b, |x, y| x * y).unwrap();
    // Every wavelength of `a` lies below `b`, so `b` repeats its first sample.
    assert_close(out.samples(), &[7.0, 14.0, 21.0], 1e-12);
}

#[test]
fn test_zip_with_without_overlap_is_degenerate() {
    let a = SpectralDistribution::from_domain([0.0, 2.0], 1.0, vec![1.0, 2.0, 3.0]).unwrap();
    let b = SpectralDistribution::from_domain([10.0, 12.0], 1.0, vec![7.0, 8.0, 9.0]).unwrap();
    assert!(matches!(
        a.zip_with(&b, |x, y| x + y),
        Err(SpectralError::DegenerateResult(_))
    ));
}

#[test]
fn test_resample_round_trip_on_sprague_grid() {
    let samples: Vec<f64> = (0..21).map(|i| (i as f64 * 0.3).sin()).collect();
    let sd = SpectralDistribution::from_start(380.0, 5.0, samples.clone()).unwrap();
    let fine = sd.resample(Shape::new(380.0, 480.0, 1.0).unwrap()).unwrap();
    assert_eq!(fine.len(), 101);
    let back = fine.resample(*sd.shape()).unwrap();
    assert_close(back.samples(), &samples, 1e-9);
}

#[test]
fn test_vector_samples_follow_each_channel() {
    let rows: Vec<Vec<f64>> = (0..7).map(|i| vec![i as f64, 2.0 * i as f64]).collect();
    let sd = SpectralDistribution::from_start(0.0, 10.0, rows).unwrap();
    let value = sd.sample_at(25.0).unwrap();
    assert_close(&value, &[2.5, 5.0], 1e-9);
    let beyond = sd.sample_at(100.0).unwrap();
    assert_close(&beyond, &[6.0, 12.0], 1e-12);
}
