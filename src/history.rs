//! Bounded rolling-window history, persisted as a versioned JSON state file

use crate::address::Endpoint;
use crate::collector::{ConnectionPair, Sample};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Bumped whenever the state layout changes; older files are discarded.
pub const STATE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to write state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    version: u32,
    port_history: VecDeque<Vec<Endpoint>>,
    conn_history: VecDeque<Vec<ConnectionPair>>,
}

/// The last `sample_range` samples' port lists and connection lists,
/// oldest first.
///
/// The state file is shared by consecutive scheduled runs. Runs must not
/// overlap; that is the scheduler's job, nothing here locks the file.
#[derive(Debug)]
pub struct History {
    sample_range: usize,
    port_history: VecDeque<Vec<Endpoint>>,
    conn_history: VecDeque<Vec<ConnectionPair>>,
}

impl History {
    pub fn new(sample_range: usize) -> Self {
        History {
            sample_range,
            port_history: VecDeque::with_capacity(sample_range),
            conn_history: VecDeque::with_capacity(sample_range),
        }
    }

    /// Load persisted history, falling back to an empty window when the file
    /// is missing, unreadable, corrupt, or from a different version. A stale
    /// or broken state file costs one window of warm-up, never the run.
    pub fn load(path: &Path, sample_range: usize) -> Self {
        match Self::try_load(path, sample_range) {
            Ok(history) => history,
            Err(e) => {
                warn!("Couldn't load {}: {}, starting fresh", path.display(), e);
                Self::new(sample_range)
            }
        }
    }

    fn try_load(path: &Path, sample_range: usize) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: StateFile = serde_json::from_str(&content)?;
        if state.version != STATE_VERSION {
            bail!("unsupported state version {}", state.version);
        }
        // Replay through the bounded push so a shrunk sample_range still
        // keeps only the most recent entries.
        let mut history = Self::new(sample_range);
        for ports in state.port_history {
            push_bounded(&mut history.port_history, ports, sample_range);
        }
        for conns in state.conn_history {
            push_bounded(&mut history.conn_history, conns, sample_range);
        }
        Ok(history)
    }

    /// Push one sample's lists, evicting the oldest entry past the bound.
    pub fn append(&mut self, sample: Sample) {
        push_bounded(&mut self.port_history, sample.ports, self.sample_range);
        push_bounded(&mut self.conn_history, sample.connections, self.sample_range);
    }

    /// Write state to a temp file next to the destination, then rename into
    /// place, so a failed write never leaves half a state file behind.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let state = StateFile {
            version: STATE_VERSION,
            port_history: self.port_history.clone(),
            conn_history: self.conn_history.clone(),
        };
        let json = serde_json::to_string(&state)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn sample_range(&self) -> usize {
        self.sample_range
    }

    pub fn port_samples(&self) -> impl Iterator<Item = &Vec<Endpoint>> {
        self.port_history.iter()
    }

    pub fn conn_samples(&self) -> impl Iterator<Item = &Vec<ConnectionPair>> {
        self.conn_history.iter()
    }

    /// Number of retained samples, at most `sample_range`.
    pub fn len(&self) -> usize {
        self.port_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.port_history.is_empty() && self.conn_history.is_empty()
    }
}

fn push_bounded<T>(queue: &mut VecDeque<T>, item: T, cap: usize) {
    queue.push_back(item);
    while queue.len() > cap {
        queue.pop_front();
    }
}
