//! Hit-rate classification over the retained window

use crate::history::History;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Endpoints and connections seen often enough to call permanent, in their
/// canonical string forms (`host:port` and `local->remote`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub ports: BTreeSet<String>,
    pub connections: BTreeSet<String>,
}

/// Report every entry whose occurrence count across the retained window is
/// at least `hitrate`. Occurrences are counted per appearance, not per
/// sample, so an endpoint listed twice in one sample counts twice.
///
/// A `hitrate` above the window length can never be met; choosing a sane
/// pair is the caller's job.
pub fn analyze(history: &History, hitrate: usize) -> Classification {
    Classification {
        ports: frequent(history.port_samples(), hitrate),
        connections: frequent(history.conn_samples(), hitrate),
    }
}

fn frequent<'a, T, I>(samples: I, hitrate: usize) -> BTreeSet<String>
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a Vec<T>>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for sample in samples {
        for item in sample {
            *counts.entry(item.to_string()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= hitrate)
        .map(|(key, _)| key)
        .collect()
}
