//! # Outbound Ports
//!
//! The only I/O the tool needs is "open a TCP connection to host:port".

use async_trait::async_trait;
use std::io;

/// Driven port for TCP connect attempts.
///
/// Implementations must not keep the connection: once `connect` returns,
/// the socket is closed. The caller bounds the call with its own timeout
/// and may drop the future mid-flight, which must release the socket too.
#[async_trait]
pub trait TcpConnector: Send + Sync {
    /// Open and immediately close a connection to `host:port`.
    async fn connect(&self, host: &str, port: u16) -> io::Result<()>;
}
