//! # Endpoint References
//!
//! Probe targets are plain `host` or `host:port` strings. They stay strings
//! everywhere they are stored (candidate lists, status keys) and are only
//! split into host and port right before connecting.

use super::errors::ProbeError;
use std::fmt;

/// Port used when an endpoint reference carries none.
pub const DEFAULT_PORT: u16 = 80;

/// A parsed `host[:port]` probe target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Host name or IPv4 literal.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Endpoint {
    /// Parse an endpoint reference.
    ///
    /// Everything before the first `:` is the host; the remainder must be a
    /// valid port. An empty port (`"host:"`) falls back to [`DEFAULT_PORT`].
    pub fn parse(source: &str) -> Result<Self, ProbeError> {
        let (host, port) = match source.split_once(':') {
            Some((host, "")) => (host, DEFAULT_PORT),
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| ProbeError::InvalidEndpoint(source.to_string()))?;
                (host, port)
            }
            None => (source, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(ProbeError::InvalidEndpoint(source.to_string()));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
