//! Chatterstats: which network endpoints are chronically active on this host?
//!
//! Meant to run from a scheduler. Each run loads the persisted rolling
//! history, takes one netstat sample, appends it, reports every port and
//! connection present in at least `hitrate` of the last `sample_range`
//! samples, and persists the history again.

pub mod address;
pub mod analyzer;
pub mod collector;
pub mod config;
pub mod history;

pub use address::Endpoint;
pub use analyzer::Classification;
pub use collector::{ConnectionPair, Sample};
pub use config::Config;
pub use history::History;
