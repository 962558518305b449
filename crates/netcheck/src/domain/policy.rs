//! # Auto-Blacklist Policy
//!
//! An endpoint that has never answered across several attempts is more
//! likely blocked on this network than briefly unlucky. Once it crosses the
//! threshold it is moved to the runtime blacklist. Endpoints with at least
//! one success are never auto-blacklisted.

use super::status::Status;

/// Failures (with zero successes) tolerated before auto-blacklisting.
pub const DEFAULT_BLACKLIST_AFTER_FAILURES: u32 = 3;

/// Decides when a failing endpoint stops competing for probe slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlacklistPolicy {
    /// Blacklist once `failed` exceeds this while `success == 0`.
    pub max_failures_without_success: u32,
}

impl Default for BlacklistPolicy {
    fn default() -> Self {
        Self {
            max_failures_without_success: DEFAULT_BLACKLIST_AFTER_FAILURES,
        }
    }
}

impl BlacklistPolicy {
    /// Policy with a custom threshold.
    pub fn new(max_failures_without_success: u32) -> Self {
        Self {
            max_failures_without_success,
        }
    }

    /// True if `status` should be moved to the blacklist.
    pub fn should_blacklist(&self, status: &Status) -> bool {
        status.success == 0 && status.failed > self.max_failures_without_success
    }
}
