//! # Configuration
//!
//! Options recognised when constructing a tool. All fields are optional in
//! a config document; missing ones take the defaults below.

use super::policy::{BlacklistPolicy, DEFAULT_BLACKLIST_AFTER_FAILURES};
use serde::Deserialize;
use std::time::Duration;

/// Default probe timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_blacklist_after_failures() -> u32 {
    DEFAULT_BLACKLIST_AFTER_FAILURES
}

/// Connectivity tool configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NetCheckConfig {
    /// Locale tag selecting a locale profile (e.g. `zh-CN`).
    #[serde(default)]
    pub language: Option<String>,
    /// Endpoints to always include.
    #[serde(default)]
    pub special: Vec<String>,
    /// Endpoints to always exclude.
    #[serde(default)]
    pub black: Vec<String>,
    /// Probe timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Auto-blacklist threshold, see [`BlacklistPolicy`].
    #[serde(default = "default_blacklist_after_failures")]
    pub blacklist_after_failures: u32,
}

impl Default for NetCheckConfig {
    fn default() -> Self {
        Self {
            language: None,
            special: Vec::new(),
            black: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            blacklist_after_failures: DEFAULT_BLACKLIST_AFTER_FAILURES,
        }
    }
}

impl NetCheckConfig {
    /// Set the locale tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Add always-included endpoints.
    #[must_use]
    pub fn with_special<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special.extend(endpoints.into_iter().map(Into::into));
        self
    }

    /// Add always-excluded endpoints.
    #[must_use]
    pub fn with_black<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.black.extend(endpoints.into_iter().map(Into::into));
        self
    }

    /// Set the probe timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the auto-blacklist threshold.
    #[must_use]
    pub fn with_blacklist_after_failures(mut self, failures: u32) -> Self {
        self.blacklist_after_failures = failures;
        self
    }

    /// Probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Auto-blacklist policy.
    pub fn blacklist_policy(&self) -> BlacklistPolicy {
        BlacklistPolicy::new(self.blacklist_after_failures)
    }
}
