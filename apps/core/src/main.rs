// Sentimental CLI Entry Point
// Scores each stdin line and prints one JSON report per line.

use anyhow::Context;
use sentimental_core::SentimentConfig;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Set to `1` to emit logs as JSON
const LOG_JSON_VAR: &str = "SENTIMENTAL_LOG_JSON";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if std::env::var(LOG_JSON_VAR).is_ok_and(|v| v == "1") {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> anyhow::Result<()> {
    let config = SentimentConfig::from_env().context("Failed to read configuration")?;
    let scorer = config.build_scorer().context("Failed to build scorer")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut scored = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let report = scorer.analyze(&line);
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        scored += 1;
    }

    out.flush()?;
    info!("Scored {} lines", scored);
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
