//! # Probe Engine
//!
//! One logical attempt per call: connect to `host[:port]` and race the
//! connect against a timer. Whichever finishes first decides the outcome;
//! the loser is dropped on the spot, which closes a half-open socket on the
//! timeout path.

use crate::domain::{Endpoint, ProbeError};
use crate::ports::TcpConnector;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::trace;

/// Timed TCP reachability probe.
#[derive(Clone)]
pub struct ProbeEngine {
    connector: Arc<dyn TcpConnector>,
    timeout: Duration,
}

impl std::fmt::Debug for ProbeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeEngine")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ProbeEngine {
    /// Create an engine over `connector` bounded by `timeout`.
    pub fn new(connector: Arc<dyn TcpConnector>, timeout: Duration) -> Self {
        Self { connector, timeout }
    }

    /// Configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `source` and return the connect latency.
    ///
    /// # Errors
    ///
    /// - `ProbeError::InvalidEndpoint` if `source` has a malformed port
    /// - `ProbeError::Timeout` if the connect outlived the timeout
    /// - `ProbeError::Connect` for any connect error
    pub async fn probe(&self, source: &str) -> Result<Duration, ProbeError> {
        let endpoint = Endpoint::parse(source)?;
        let start = Instant::now();

        match timeout(
            self.timeout,
            self.connector.connect(&endpoint.host, endpoint.port),
        )
        .await
        {
            Ok(Ok(())) => Ok(start.elapsed()),
            Ok(Err(e)) => {
                trace!("[netcheck] Connect to {} failed: {}", endpoint, e);
                Err(e.into())
            }
            Err(_) => Err(ProbeError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockBehavior, MockConnector};

    fn engine(mock: MockConnector, timeout_ms: u64) -> ProbeEngine {
        ProbeEngine::new(Arc::new(mock), Duration::from_millis(timeout_ms))
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_reports_latency() {
        let mock = MockConnector::new().with(
            "slow.example",
            MockBehavior::AcceptAfter(Duration::from_millis(300)),
        );
        let latency = engine(mock, 1000).probe("slow.example").await.unwrap();
        assert!(latency >= Duration::from_millis(300));
        assert!(latency < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_wins_over_hanging_connect() {
        let mock = MockConnector::new().with_fallback(MockBehavior::Hang);
        let result = engine(mock, 1000).probe("blackhole.example:443").await;
        assert_eq!(result, Err(ProbeError::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_after_timeout_is_a_timeout() {
        let mock = MockConnector::new().with(
            "late.example",
            MockBehavior::AcceptAfter(Duration::from_millis(1500)),
        );
        let result = engine(mock, 1000).probe("late.example").await;
        assert_eq!(result, Err(ProbeError::Timeout));
    }

    #[tokio::test]
    async fn test_connect_error_carries_text() {
        let result = engine(MockConnector::new(), 1000).probe("down.example").await;
        assert_eq!(
            result,
            Err(ProbeError::Connect("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_default_port_is_80() {
        let mock = Arc::new(MockConnector::new().with("up.example", MockBehavior::Accept));
        let engine = ProbeEngine::new(mock.clone(), Duration::from_secs(1));
        engine.probe("up.example").await.unwrap();
        engine.probe("up.example:8080").await.unwrap();
        assert_eq!(mock.attempts(), vec!["up.example:80", "up.example:8080"]);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_never_connects() {
        let mock = Arc::new(MockConnector::new());
        let engine = ProbeEngine::new(mock.clone(), Duration::from_secs(1));
        let result = engine.probe("bad.example:port").await;
        assert!(matches!(result, Err(ProbeError::InvalidEndpoint(_))));
        assert!(mock.attempts().is_empty());
    }
}
