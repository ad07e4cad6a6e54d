//! One-shot sample collection from netstat-style status lines

use crate::address::{self, Endpoint};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;
use tracing::warn;

/// Transport protocol tags whose lines are worth inspecting.
pub const PROTO_TAGS: [&str; 4] = ["tcp", "udp", "tcp4", "udp4"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPair {
    pub local: Endpoint,
    pub remote: Endpoint,
}

impl fmt::Display for ConnectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.local, self.remote)
    }
}

/// Everything observed in one collection pass. Order follows input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    pub ports: Vec<Endpoint>,
    pub connections: Vec<ConnectionPair>,
}

/// Supplier of raw connection-table text, one line per entry.
pub trait StatusSource {
    fn status_lines(&self) -> anyhow::Result<Vec<String>>;
}

/// Shells out to `netstat -an` and captures its output.
pub struct NetstatSource;

impl StatusSource for NetstatSource {
    fn status_lines(&self) -> anyhow::Result<Vec<String>> {
        let output = Command::new("netstat")
            .arg("-an")
            .output()
            .context("failed to run netstat")?;
        if !output.status.success() {
            bail!("netstat exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// Build one [`Sample`] from raw status lines.
///
/// Lines whose first field is not a recognized protocol tag are skipped.
/// Lines that claim `LISTEN` or `ESTABLISHED` but are missing the address
/// fields, or whose addresses match no known shape, are logged and skipped;
/// garbled netstat output must never abort the run.
pub fn collect_once<I, S>(lines: I) -> Sample
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sample = Sample::default();
    for line in lines {
        let line = line.as_ref();
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || !PROTO_TAGS.contains(&fields[0]) {
            continue;
        }
        match *fields.last().unwrap_or(&"") {
            "LISTEN" => {
                if fields.len() < 5 {
                    warn!("Skipping short LISTEN line: {:?}", line);
                    continue;
                }
                match address::parse(fields[3]) {
                    Ok(endpoint) => sample.ports.push(endpoint),
                    Err(e) => warn!("Skipping listener {:?}: {}", line, e),
                }
            }
            "ESTABLISHED" => {
                if fields.len() < 6 {
                    warn!("Skipping short ESTABLISHED line: {:?}", line);
                    continue;
                }
                match (address::parse(fields[3]), address::parse(fields[4])) {
                    (Ok(local), Ok(remote)) => {
                        sample.connections.push(ConnectionPair { local, remote })
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        warn!("Skipping connection {:?}: {}", line, e)
                    }
                }
            }
            _ => {}
        }
    }
    sample
}
