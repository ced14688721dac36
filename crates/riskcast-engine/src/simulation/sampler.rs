//! Scalar draws from configured probability distributions.
//!
//! Every draw consumes uniform(0,1) variates from the caller's generator
//! and nothing else; the sampler keeps no state of its own. The caller
//! decides seeding and stream assignment, which is what makes the trial
//! loop parallel-safe.

use rand::Rng;

use riskcast_core::types::DistributionSpec;

/// Guard for Box–Muller: ln(0) is undefined, so u1 is clamped away from
/// exactly 0.
const MIN_UNIFORM: f64 = 1e-10;

/// Draw one value from `spec`.
pub fn sample<R: Rng + ?Sized>(spec: &DistributionSpec, rng: &mut R) -> f64 {
    match *spec {
        DistributionSpec::Normal { mean, std } => sample_normal(mean, std, rng),
        DistributionSpec::Uniform { min, max } => min + rng.gen::<f64>() * (max - min),
        DistributionSpec::Triangular { min, mode, max } => sample_triangular(min, mode, max, rng),
    }
}

/// Box–Muller transform: `z0 = sqrt(-2·ln(u1)) · cos(2π·u2)`.
fn sample_normal<R: Rng + ?Sized>(mean: f64, std: f64, rng: &mut R) -> f64 {
    let u1 = rng.gen::<f64>().max(MIN_UNIFORM);
    let u2 = rng.gen::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std * z0
}

/// Inverse-CDF draw for the triangular distribution. `f` is the CDF mass
/// left of the mode; draws below it land on the rising flank.
fn sample_triangular<R: Rng + ?Sized>(min: f64, mode: f64, max: f64, rng: &mut R) -> f64 {
    let u = rng.gen::<f64>();
    let f = (mode - min) / (max - min);

    if u < f {
        min + (u * (max - min) * (mode - min)).sqrt()
    } else {
        max - ((1.0 - u) * (max - min) * (max - mode)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const DRAWS: usize = 100_000;

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let spec = DistributionSpec::Uniform { min: 0.0, max: 10.0 };
        for _ in 0..DRAWS {
            let v = sample(&spec, &mut rng);
            assert!((0.0..=10.0).contains(&v), "uniform draw out of range: {v}");
        }
    }

    #[test]
    fn test_degenerate_uniform_is_constant() {
        let mut rng = SmallRng::seed_from_u64(2);
        let spec = DistributionSpec::Uniform { min: 5.0, max: 5.0 };
        for _ in 0..100 {
            assert_eq!(sample(&spec, &mut rng), 5.0);
        }
    }

    #[test]
    fn test_triangular_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let spec = DistributionSpec::Triangular { min: 0.0, mode: 5.0, max: 10.0 };
        for _ in 0..DRAWS {
            let v = sample(&spec, &mut rng);
            assert!((0.0..=10.0).contains(&v), "triangular draw out of range: {v}");
        }
    }

    #[test]
    fn test_triangular_mass_splits_at_mode() {
        let mut rng = SmallRng::seed_from_u64(4);
        // Mode at 2 of [0, 10]: 20% of the mass lies left of the mode.
        let spec = DistributionSpec::Triangular { min: 0.0, mode: 2.0, max: 10.0 };
        let below = (0..DRAWS)
            .filter(|_| sample(&spec, &mut rng) < 2.0)
            .count();
        let fraction = below as f64 / DRAWS as f64;
        assert!((fraction - 0.2).abs() < 0.01, "left-of-mode mass {fraction}");
    }

    #[test]
    fn test_normal_sample_moments() {
        let mut rng = SmallRng::seed_from_u64(5);
        let spec = DistributionSpec::Normal { mean: 0.0, std: 1.0 };
        let draws: Vec<f64> = (0..DRAWS).map(|_| sample(&spec, &mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / DRAWS as f64;
        let var = draws.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / DRAWS as f64;

        assert!(mean.abs() < 0.05, "sample mean {mean}");
        assert!((var.sqrt() - 1.0).abs() < 0.05, "sample std {}", var.sqrt());
    }

    #[test]
    fn test_normal_quantiles_match_closed_form() {
        use statrs::distribution::{ContinuousCDF, Normal};

        let mut rng = SmallRng::seed_from_u64(6);
        let spec = DistributionSpec::Normal { mean: 0.0, std: 1.0 };
        let mut draws: Vec<f64> = (0..DRAWS).map(|_| sample(&spec, &mut rng)).collect();
        draws.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let reference = Normal::new(0.0, 1.0).unwrap();
        for p in [0.05, 0.25, 0.50, 0.75, 0.95] {
            let empirical = draws[(DRAWS as f64 * p) as usize];
            let theoretical = reference.inverse_cdf(p);
            assert!(
                (empirical - theoretical).abs() < 0.05,
                "quantile {p}: empirical {empirical} vs theoretical {theoretical}"
            );
        }
    }

    #[test]
    fn test_zero_std_normal_is_constant() {
        let mut rng = SmallRng::seed_from_u64(7);
        let spec = DistributionSpec::Normal { mean: 3.0, std: 0.0 };
        for _ in 0..100 {
            assert_eq!(sample(&spec, &mut rng), 3.0);
        }
    }
}
