//! The condition injector
//!
//! Decides, per request, whether to treat it as an error and whether
//! to slow it down. Entropy comes from an owned random source rather
//! than a process global so tests can seed it; the source sits behind
//! a mutex that is only ever held for a single draw, never across a
//! sleep.

use std::{fmt, time::Duration};

use domain::RequestSequence;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::FaultProfile;

/// Injects synthetic errors and latency according to a [`FaultProfile`]
pub struct FaultInjector {
    profile: FaultProfile,
    rng: Mutex<StdRng>,
}

impl fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultInjector")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl FaultInjector {
    /// Create an injector seeded from OS entropy
    #[must_use]
    pub fn new(profile: FaultProfile) -> Self {
        Self::with_rng(profile, StdRng::from_os_rng())
    }

    /// Create an injector with an explicit random source.
    ///
    /// Seeding the source makes every probabilistic decision and every
    /// latency sample reproducible.
    #[must_use]
    pub const fn with_rng(profile: FaultProfile, rng: StdRng) -> Self {
        Self {
            profile,
            rng: Mutex::new(rng),
        }
    }

    /// An injector that never fires
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(FaultProfile::never())
    }

    /// The profile this injector runs with
    #[must_use]
    pub const fn profile(&self) -> &FaultProfile {
        &self.profile
    }

    /// Roll a uniform value against a threshold.
    ///
    /// The boundaries consume no entropy: a threshold at or below zero
    /// is always false, at or above one always true.
    fn roll(&self, threshold: f64) -> bool {
        if threshold <= 0.0 {
            return false;
        }
        if threshold >= 1.0 {
            return true;
        }
        self.rng.lock().random::<f64>() < threshold
    }

    /// Should this request be treated as an error, by probability alone?
    pub fn probabilistic_error(&self) -> bool {
        self.roll(self.profile.error_percentage)
    }

    /// Should this request be treated as an error, counting it against
    /// the endpoint's sequence?
    ///
    /// Bumps the counter exactly once. With a positive interval N, the
    /// request whose post-increment count is an exact multiple of N is
    /// forced into error unconditionally; the atomic counter guarantees
    /// that exactly one of N concurrent requests lands on each
    /// multiple. All other requests fall back to the probabilistic
    /// roll.
    pub fn interval_error(&self, seq: &RequestSequence) -> bool {
        let n = seq.next();
        if self.profile.error_interval > 0 && n % self.profile.error_interval == 0 {
            return true;
        }
        self.probabilistic_error()
    }

    /// Sample a randomized delay from the profile's latency band
    pub fn latency(&self) -> Duration {
        let mut rng = self.rng.lock();
        self.profile.latency.sample(&mut *rng)
    }

    /// Apply the profile's synthetic delay to the current request.
    ///
    /// Rolls the slow-request threshold; on a hit, sleeps the sampled
    /// delay. The sleep is local to the calling task and holds no
    /// lock, so concurrent requests proceed independently.
    pub async fn pace(&self) {
        if !self.roll(self.profile.slow_percentage) {
            return;
        }
        let delay = self.latency();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
