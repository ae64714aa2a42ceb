//! Placeholder status for days without any fire record.
//!
//! The policy is a demo distribution, not a forecast: a uniform draw in
//! `[0, 1)` maps to `safe` below 0.7, `risk` below 0.9 and `fire` otherwise.
//! Replacing it with a real model means implementing [`FallbackPolicy`].

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use coalcal_common::model::DayStatus;
use coalcal_common::month::MonthKey;

/// Upper bound (exclusive) of draws classified as `safe`.
pub const SAFE_BELOW: f64 = 0.7;
/// Upper bound (exclusive) of draws classified as `risk`.
pub const RISK_BELOW: f64 = 0.9;

/// Status for a day of `month` that has no fire records.
pub trait FallbackPolicy: Send + Sync {
    fn fallback(&self, day: u32, month: MonthKey) -> DayStatus;
}

/// Map a uniform draw in `[0, 1)` to a status.
pub fn classify_draw(x: f64) -> DayStatus {
    if x < SAFE_BELOW {
        DayStatus::Safe
    } else if x < RISK_BELOW {
        DayStatus::Risk
    } else {
        DayStatus::Fire
    }
}

// ─── Seeded ──────────────────────────────────────────────────────────────────

/// Draws from a ChaCha stream keyed by `(seed, year, month, day)`, so a day
/// keeps its status across reloads and re-renders.
#[derive(Debug, Clone, Copy)]
pub struct SeededFallback {
    seed: u64,
}

impl SeededFallback {
    pub fn new(seed: u64) -> Self {
        SeededFallback { seed }
    }

    fn day_seed(&self, day: u32, month: MonthKey) -> u64 {
        let ymd = ((month.year() as i64 as u64) << 9) | (u64::from(month.month()) << 5) | u64::from(day);
        self.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ ymd
    }
}

impl FallbackPolicy for SeededFallback {
    fn fallback(&self, day: u32, month: MonthKey) -> DayStatus {
        let mut rng = ChaCha8Rng::seed_from_u64(self.day_seed(day, month));
        classify_draw(rng.random::<f64>())
    }
}

// ─── Injected RNG ────────────────────────────────────────────────────────────

/// Draws from an injected random source on every call.
pub struct RandomFallback<R> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> RandomFallback<R> {
    pub fn new(rng: R) -> Self {
        RandomFallback {
            rng: Mutex::new(rng),
        }
    }
}

impl RandomFallback<StdRng> {
    /// Seeded from the operating system; statuses differ between runs.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> FallbackPolicy for RandomFallback<R> {
    fn fallback(&self, _day: u32, _month: MonthKey) -> DayStatus {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        classify_draw(rng.random::<f64>())
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
