//! Synthetic fault and latency injection
//!
//! The reason this repository exists: every stage service consults an
//! injector before doing its (fabricated) work, so that traces show
//! realistic slow paths and error paths end-to-end. Two triggers are
//! supported per endpoint: a probabilistic roll against a threshold,
//! and a deterministic forced error on every Nth request of a shared
//! counter.

mod injector;
mod profile;

pub use injector::FaultInjector;
pub use profile::{FaultProfile, LatencyBand};
