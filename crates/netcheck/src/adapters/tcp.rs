//! Tokio TCP connector.

use crate::ports::TcpConnector;
use async_trait::async_trait;
use std::io;
use tokio::net::TcpStream;
use tracing::trace;

/// Production connector over `tokio::net::TcpStream`.
///
/// Name resolution happens inside the connect, so DNS failures surface as
/// connect errors. The stream is dropped as soon as the handshake completes;
/// no payload is sent or read.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTcpConnector;

impl TokioTcpConnector {
    /// Create a connector.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TcpConnector for TokioTcpConnector {
    async fn connect(&self, host: &str, port: u16) -> io::Result<()> {
        let stream = TcpStream::connect((host, port)).await?;
        trace!("[netcheck] Connected to {:?}, closing", stream.peer_addr().ok());
        drop(stream);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connects_to_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let result = TokioTcpConnector::new().connect("127.0.0.1", port).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_closed_port_is_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = TokioTcpConnector::new().connect("127.0.0.1", port).await;
        assert!(result.is_err());
    }
}
