//! Fault profile and latency band definitions

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A target delay with symmetric jitter around it.
///
/// The effective delay is never negative: a negative mean collapses to
/// zero, and a sampled offset can never push the result below zero.
/// Jitter is a uniform offset in `[-jitter_ms, +jitter_ms]`; with
/// `jitter_ms <= 0` the sampled delay equals the fixed delay exactly,
/// which keeps zero-jitter test scenarios reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyBand {
    /// Target delay in milliseconds; negative values mean no delay
    #[serde(default)]
    pub mean_ms: i64,
    /// Symmetric jitter bound in milliseconds
    #[serde(default)]
    pub jitter_ms: i64,
}

impl LatencyBand {
    /// A band with no delay at all
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            mean_ms: 0,
            jitter_ms: 0,
        }
    }

    /// A constant delay with no jitter
    #[must_use]
    pub const fn flat(mean_ms: i64) -> Self {
        Self {
            mean_ms,
            jitter_ms: 0,
        }
    }

    /// A delay with uniform jitter around the mean
    #[must_use]
    pub const fn around(mean_ms: i64, jitter_ms: i64) -> Self {
        Self { mean_ms, jitter_ms }
    }

    /// The deterministic delay: `max(0, mean)`, jitter ignored
    #[must_use]
    pub fn fixed(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.mean_ms).unwrap_or(0))
    }

    /// Sample a randomized delay from the band.
    ///
    /// Entropy comes only from the supplied source so callers can seed
    /// it for reproducible runs.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.jitter_ms <= 0 {
            return self.fixed();
        }
        let offset = rng.random_range(-self.jitter_ms..=self.jitter_ms);
        Duration::from_millis(u64::try_from(self.mean_ms.saturating_add(offset)).unwrap_or(0))
    }
}

impl Default for LatencyBand {
    fn default() -> Self {
        Self::zero()
    }
}

/// Tuning for one injected endpoint.
///
/// Thresholds outside `[0, 1]` are accepted and behave degenerately
/// (`<= 0` never fires, `>= 1` always fires); an interval of zero
/// disables forced-cadence errors. Bad configuration degrades, it
/// never crashes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultProfile {
    /// Probability that a request is treated as an error
    #[serde(default)]
    pub error_percentage: f64,

    /// Force an error on every Nth request; 0 disables
    #[serde(default)]
    pub error_interval: u64,

    /// Probability that a request is artificially slowed down
    #[serde(default)]
    pub slow_percentage: f64,

    /// Delay applied to slowed requests
    #[serde(default)]
    pub latency: LatencyBand,
}

impl FaultProfile {
    /// A profile that never injects anything
    #[must_use]
    pub const fn never() -> Self {
        Self {
            error_percentage: 0.0,
            error_interval: 0,
            slow_percentage: 0.0,
            latency: LatencyBand::zero(),
        }
    }

    /// Set the probabilistic error threshold
    #[must_use]
    pub const fn with_error_percentage(mut self, percentage: f64) -> Self {
        self.error_percentage = percentage;
        self
    }

    /// Set the forced error cadence
    #[must_use]
    pub const fn with_error_interval(mut self, interval: u64) -> Self {
        self.error_interval = interval;
        self
    }

    /// Slow every request down by the given band
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyBand) -> Self {
        Self {
            slow_percentage: 1.0,
            latency,
            ..self
        }
    }

    /// Set the slow-request probability
    #[must_use]
    pub const fn with_slow_percentage(mut self, percentage: f64) -> Self {
        self.slow_percentage = percentage;
        self
    }
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self::never()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn fixed_delay_is_mean() {
        assert_eq!(LatencyBand::flat(100).fixed(), Duration::from_millis(100));
    }

    #[test]
    fn negative_mean_collapses_to_zero() {
        assert_eq!(LatencyBand::flat(-100).fixed(), Duration::ZERO);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(LatencyBand::flat(-100).sample(&mut rng), Duration::ZERO);
    }

    #[test]
    fn zero_jitter_sample_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        let band = LatencyBand::flat(100);
        for _ in 0..50 {
            assert_eq!(band.sample(&mut rng), Duration::from_millis(100));
        }
    }

    #[test]
    fn sample_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let band = LatencyBand::around(100, 50);
        for _ in 0..500 {
            let sampled = band.sample(&mut rng);
            assert!(sampled >= Duration::from_millis(50));
            assert!(sampled <= Duration::from_millis(150));
        }
    }

    #[test]
    fn sample_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let band = LatencyBand::around(10, 200);
        for _ in 0..500 {
            // Offsets below -10ms would be negative; they clamp to zero
            let _ = band.sample(&mut rng);
        }
    }

    #[test]
    fn negative_jitter_behaves_like_zero_jitter() {
        let mut rng = StdRng::seed_from_u64(9);
        let band = LatencyBand::around(80, -5);
        assert_eq!(band.sample(&mut rng), Duration::from_millis(80));
    }

    #[test]
    fn never_profile_is_inert() {
        let profile = FaultProfile::never();
        assert!((profile.error_percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(profile.error_interval, 0);
        assert_eq!(profile.latency, LatencyBand::zero());
    }

    #[test]
    fn builder_chain() {
        let profile = FaultProfile::never()
            .with_error_percentage(0.25)
            .with_error_interval(10)
            .with_latency(LatencyBand::around(100, 20));
        assert!((profile.error_percentage - 0.25).abs() < f64::EPSILON);
        assert_eq!(profile.error_interval, 10);
        assert!((profile.slow_percentage - 1.0).abs() < f64::EPSILON);
        assert_eq!(profile.latency.mean_ms, 100);
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: FaultProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, FaultProfile::never());

        let profile: FaultProfile =
            serde_json::from_str(r#"{"error_percentage":0.5,"error_interval":4}"#).unwrap();
        assert!((profile.error_percentage - 0.5).abs() < f64::EPSILON);
        assert_eq!(profile.error_interval, 4);
    }

    #[test]
    fn latency_band_deserializes_with_defaults() {
        let band: LatencyBand = serde_json::from_str(r#"{"mean_ms":250}"#).unwrap();
        assert_eq!(band.mean_ms, 250);
        assert_eq!(band.jitter_ms, 0);
    }
}
