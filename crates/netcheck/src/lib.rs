//! # NetCheck - Internet Reachability
//!
//! Answers "is this machine online right now?" by racing TCP connects
//! against a small, locale-adapted set of well-known endpoints, and learns
//! which endpoints never answer on the current network so they stop
//! competing for probe slots.
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Module Structure
//!
//! ```text
//! netcheck/
//! ├── domain/      # Endpoint, LocaleTable, HostCatalog, Status, policy, config, errors
//! ├── ports/       # ConnectivityApi (inbound), TcpConnector (outbound)
//! ├── adapters/    # TokioTcpConnector, TOML config, mock connectors
//! └── service/     # ProbeEngine, ConnectivityTool
//! ```
//!
//! ## Probe Flow
//!
//! | Step | Component | Result |
//! |------|-----------|--------|
//! | Derive candidates | `HostCatalog` | defaults + locale + custom, minus blacklists |
//! | Sample | `ConnectivityTool` | two random candidates + sticky endpoint |
//! | Race | `ProbeEngine` | first successful connect wins |
//! | Learn | `BlacklistPolicy` | never-successful endpoints get excluded |
//!
//! ## Example
//!
//! ```rust,no_run
//! use netcheck::{ConnectivityTool, NetCheckConfig};
//!
//! # async fn run() {
//! let tool = ConnectivityTool::new(NetCheckConfig::default().with_language("zh-CN"));
//! if tool.is_online().await {
//!     println!("online via {:?}", tool.last_connected());
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{MockBehavior, MockConnector, TokioTcpConnector};
pub use domain::{
    BlacklistPolicy, ConfigError, CustomKind, Customization, Endpoint, HostCatalog, LocaleProfile,
    LocaleTable, NetCheckConfig, ProbeError, ProbeFailure, Status, StatusMap,
    DEFAULT_BLACKLIST_AFTER_FAILURES, DEFAULT_ENDPOINTS, DEFAULT_PORT, DEFAULT_TIMEOUT_MS,
    NO_LATENCY,
};
pub use ports::{ConnectivityApi, TcpConnector};
pub use service::{ConnectivityTool, ProbeEngine};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
