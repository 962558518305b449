//! # Inbound Ports
//!
//! Caller-facing API of the connectivity tool.

use crate::domain::{CustomKind, ProbeFailure, Status, StatusMap};
use async_trait::async_trait;

/// Connectivity check API.
///
/// Callers decide when to poll; nothing here runs in the background.
#[async_trait]
pub trait ConnectivityApi: Send + Sync {
    /// Select a locale profile.
    fn set_language(&self, tag: &str);

    /// Append one endpoint to the special or black customization list.
    fn add_custom(&self, kind: CustomKind, endpoint: &str);

    /// Append a batch of endpoints to the special or black customization list.
    fn add_custom_many(&self, kind: CustomKind, endpoints: &[String]);

    /// Probe a single endpoint reference.
    async fn check(&self, endpoint: &str) -> Result<Status, ProbeFailure>;

    /// Race a small sample of candidates; true if any connects.
    async fn is_online(&self) -> bool;

    /// Status of every candidate, probing all of them if any is unknown.
    async fn get_status(&self) -> StatusMap;
}
