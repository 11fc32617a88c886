// standard library
use std::cmp::min;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base_secs: i64,
    pub growth_factor: i64,
    pub max_secs: i64,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            base_secs: 1,
            growth_factor: 2,
            max_secs: 30,
        }
    }
}

pub fn calc(backoff: &Backoff, exp: u32) -> i64 {
    let calculated = backoff
        .base_secs
        .saturating_mul(backoff.growth_factor.saturating_pow(exp));
    min(calculated, backoff.max_secs)
}

/// Wait before the retry following `attempt` failed attempts (zero-based).
/// Negative results clamp to no wait at all.
pub fn delay(backoff: &Backoff, attempt: u32) -> Duration {
    Duration::from_secs(calc(backoff, attempt).max(0) as u64)
}
