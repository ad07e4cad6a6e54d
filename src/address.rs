//! Address/port text parsing and normalization

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Normalized host for "listening on every interface" (`*` or `0.0.0.0`).
pub const ANY_HOST: &str = "all";

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("unrecognized address format: {0:?}")]
    Unrecognized(String),
}

/// A normalized (host, port) pair.
///
/// The port is kept as text so service-name ports survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
}

impl Endpoint {
    fn new(host: &str, port: &str) -> Self {
        let host = if host == "0.0.0.0" || host == "*" {
            ANY_HOST
        } else {
            host
        };
        Endpoint {
            host: host.to_string(),
            port: port.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Parse one address token from netstat output into an [`Endpoint`].
///
/// Netstat is not consistent about address notation, so three shapes are
/// recognized, checked in this order with the first match winning:
///
/// 1. `*.17500`          wildcard listener, port after the last `.`
/// 2. `10.0.2.15:58378`  host and port split on the last `:`
/// 3. `192.168.0.6.58303` dotted quad with the port as a fifth dot-group
pub fn parse(raw: &str) -> Result<Endpoint, AddressError> {
    if raw.starts_with('*') && raw.contains('.') {
        let port = raw.rsplit('.').next().unwrap_or_default();
        return Ok(Endpoint::new("*", port));
    }
    if let Some(idx) = raw.rfind(':') {
        return Ok(Endpoint::new(&raw[..idx], &raw[idx + 1..]));
    }
    if raw.matches('.').count() == 4 {
        let idx = raw.rfind('.').unwrap_or_default();
        return Ok(Endpoint::new(&raw[..idx], &raw[idx + 1..]));
    }
    Err(AddressError::Unrecognized(raw.to_string()))
}
