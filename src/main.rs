mod config;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{CliArgs, USAGE};
use crate::engine::{Dashboard, ViewModel};
use crate::storage::{CsvLoader, DatasetLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(cli.log_level);

    let dataset = match CsvLoader::new(&cli.input).load() {
        Ok(dataset) => Arc::new(dataset),
        Err(error) => {
            error!("{error}");
            return Err(error).context("Dataset could not be loaded");
        }
    };

    let dashboard = Dashboard::new(dataset, cli.config);

    if dashboard.dataset().is_empty() {
        warn!("Dataset at {} contains no transactions", cli.input.display());
    }

    let timer = Instant::now();
    let view = dashboard.view(cli.filter).await;
    let duration = timer.elapsed();

    info!("Computed view over {} transactions in: {duration:?}", view.transaction_count);

    write_view_to_stdout(&view)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON view, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_view_to_stdout(view: &ViewModel) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, view)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
