//! # Ports
//!
//! - `inbound` - what callers drive (`ConnectivityApi`)
//! - `outbound` - what the tool requires (`TcpConnector`)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
