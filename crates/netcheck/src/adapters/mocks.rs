//! Scripted connector for deterministic tests.

use crate::ports::TcpConnector;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

// =============================================================================
// MOCK CONNECTOR (for testing)
// =============================================================================

/// Scripted outcome for one host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockBehavior {
    /// Connect succeeds immediately.
    Accept,
    /// Connect succeeds after the given delay.
    AcceptAfter(Duration),
    /// Connect fails with "connection refused".
    Refuse,
    /// Connect never completes.
    Hang,
}

/// Mock connector with per-host scripted behavior.
///
/// Hosts without a script use the fallback behavior (`Refuse` by default).
/// Every attempt is recorded as `host:port`.
#[derive(Debug)]
pub struct MockConnector {
    behaviors: HashMap<String, MockBehavior>,
    fallback: MockBehavior,
    attempts: Mutex<Vec<String>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create a mock that refuses every host.
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            fallback: MockBehavior::Refuse,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Script the behavior for `host`.
    #[must_use]
    pub fn with(mut self, host: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(host.to_string(), behavior);
        self
    }

    /// Behavior for hosts without a script.
    #[must_use]
    pub fn with_fallback(mut self, behavior: MockBehavior) -> Self {
        self.fallback = behavior;
        self
    }

    /// All attempts so far, in start order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().clone()
    }

    /// Number of attempts against `host:port`.
    pub fn attempts_to(&self, endpoint: &str) -> usize {
        self.attempts.lock().iter().filter(|a| *a == endpoint).count()
    }
}

#[async_trait]
impl TcpConnector for MockConnector {
    async fn connect(&self, host: &str, port: u16) -> io::Result<()> {
        self.attempts.lock().push(format!("{}:{}", host, port));

        let behavior = self.behaviors.get(host).copied().unwrap_or(self.fallback);
        match behavior {
            MockBehavior::Accept => Ok(()),
            MockBehavior::AcceptAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            MockBehavior::Refuse => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
            MockBehavior::Hang => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_scripts_per_host() {
        let mock = MockConnector::new().with("up.example", MockBehavior::Accept);

        assert!(mock.connect("up.example", 80).await.is_ok());
        let err = mock.connect("down.example", 53).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);
        assert_eq!(mock.attempts(), vec!["up.example:80", "down.example:53"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_hang_never_completes() {
        let mock = MockConnector::new().with_fallback(MockBehavior::Hang);
        let result =
            tokio::time::timeout(Duration::from_secs(5), mock.connect("slow.example", 80)).await;
        assert!(result.is_err());
        assert_eq!(mock.attempts_to("slow.example:80"), 1);
    }
}
