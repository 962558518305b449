//! # Adapters
//!
//! Concrete implementations of the outbound ports plus config loading.
//!
//! - `tcp` - `TokioTcpConnector` (production)
//! - `mocks` - scripted connector for tests
//! - `config` - TOML loading for `NetCheckConfig` (feature `config-file`)

#[cfg(feature = "config-file")]
pub mod config;
pub mod mocks;
pub mod tcp;

pub use mocks::{MockBehavior, MockConnector};
pub use tcp::TokioTcpConnector;
