//! # Probe Status
//!
//! One record per endpoint reference ever probed. Records are created lazily
//! on the first probe, never removed, and only mutated by that endpoint's own
//! probe outcome.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Latency sentinel for "no successful probe as of the last attempt".
pub const NO_LATENCY: i64 = -1;

/// Status map keyed by endpoint reference.
pub type StatusMap = HashMap<String, Status>;

/// Accumulated probe outcomes for one endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Endpoint reference this record belongs to.
    pub source: String,
    /// Result of the most recent probe.
    pub alive: bool,
    /// Latency (ms) of the most recent probe if it succeeded, else [`NO_LATENCY`].
    pub time: i64,
    /// Error text of the most recent probe if it failed, else empty.
    pub msg: String,
    /// Cumulative failures.
    pub failed: u32,
    /// Cumulative successes.
    pub success: u32,
}

impl Status {
    /// Fresh record for an endpoint that has not completed a probe yet.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alive: false,
            time: NO_LATENCY,
            msg: String::new(),
            failed: 0,
            success: 0,
        }
    }

    /// Total completed probes.
    pub fn count(&self) -> u32 {
        self.failed + self.success
    }

    /// Record a failed probe.
    pub fn record_failure(&mut self, msg: impl Into<String>) {
        self.alive = false;
        self.time = NO_LATENCY;
        self.msg = msg.into();
        self.failed += 1;
    }

    /// Record a successful probe that took `latency_ms`.
    pub fn record_success(&mut self, latency_ms: i64) {
        self.alive = true;
        self.time = latency_ms;
        self.msg.clear();
        self.success += 1;
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_status_is_unprobed() {
        let status = Status::new("8.8.8.8:53");
        assert!(!status.alive);
        assert_eq!(status.time, NO_LATENCY);
        assert!(status.msg.is_empty());
        assert_eq!(status.count(), 0);
    }

    #[test]
    fn test_failures_accumulate() {
        let mut status = Status::new("google.com");
        status.record_failure("connect timeout");
        status.record_failure("connection refused");
        assert_eq!(status.failed, 2);
        assert_eq!(status.msg, "connection refused");
        assert_eq!(status.time, NO_LATENCY);
    }

    #[test]
    fn test_success_clears_message() {
        let mut status = Status::new("google.com");
        status.record_failure("connect timeout");
        status.record_success(42);
        assert!(status.alive);
        assert_eq!(status.time, 42);
        assert!(status.msg.is_empty());
        assert_eq!(status.count(), 2);
    }

    #[test]
    fn test_failure_after_success_resets_latency() {
        let mut status = Status::new("google.com");
        status.record_success(10);
        status.record_failure("connect timeout");
        assert!(!status.alive);
        assert_eq!(status.time, NO_LATENCY);
        assert_eq!(status.success, 1);
    }

    #[test]
    fn test_display_is_json() {
        let mut status = Status::new("yandex.ru");
        status.record_success(7);
        let value: serde_json::Value = serde_json::from_str(&status.to_string()).unwrap();
        assert_eq!(value["source"], "yandex.ru");
        assert_eq!(value["alive"], true);
        assert_eq!(value["time"], 7);
        assert_eq!(value["success"], 1);
    }
}
