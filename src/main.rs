use anyhow::{Context, Result};
use chatterstats::{
    analyzer,
    collector::{self, NetstatSource, StatusSource},
    config::Config,
    history::History,
};
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_path);
    let config = if config_path.exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            warn!(
                "Failed to load config {}: {}, using defaults",
                config_path.display(),
                e
            );
            Config::default()
        })
    } else {
        Config::default()
    };

    let mut history = History::load(&config.statefile, config.sample_range);

    let lines = NetstatSource
        .status_lines()
        .context("could not read the connection table")?;
    let sample = collector::collect_once(&lines);
    info!(
        "Sampled {} listeners and {} connections",
        sample.ports.len(),
        sample.connections.len()
    );

    history.append(sample);
    let result = analyzer::analyze(&history, config.hitrate);

    // Report before persisting so a save failure never loses this run's result.
    println!("{}", serde_json::to_string_pretty(&result)?);

    history
        .save(&config.statefile)
        .with_context(|| format!("could not save state to {}", config.statefile.display()))?;
    Ok(())
}
