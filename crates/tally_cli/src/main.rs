//! Tally command line entry point

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::TallyConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tally_app::headless_runner::{run_loaded_scenario, CounterFixture};
use tally_app::headless_scenario::HeadlessScenario;
use tally_app::Surface;
use tally_core::counter::Count;
use tally_store::{FileStore, SlotStore};

/// Persistent click-counter diagnostics and store tooling
#[derive(Parser)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "tally.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a headless scenario file against a fresh in-memory fixture
    Run {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Write the machine-readable report here (relative path)
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the persisted count
    Show,
    /// Drive the widget headlessly against the durable store
    Click {
        /// Number of clicks
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Reset the persisted count to zero
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = TallyConfig::load(&cli.config)?;
    match cli.command {
        Command::Run { scenario, report } => cmd_run(&scenario, report.as_deref()),
        Command::Show => cmd_show(&config),
        Command::Click { count } => cmd_click(&config, count),
        Command::Reset => cmd_reset(&config),
    }
}

fn open_store(config: &TallyConfig) -> Result<Arc<FileStore>> {
    let store = FileStore::open(&config.storage.path)
        .with_context(|| format!("Failed to open store {}", config.storage.path))?;
    Ok(Arc::new(store))
}

fn cmd_run(path: &Path, report_path: Option<&Path>) -> Result<()> {
    let scenario = HeadlessScenario::from_path(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;
    let mut fixture = CounterFixture::new()?;
    let outcome = run_loaded_scenario(&scenario, &mut fixture)?;

    let report = outcome.report();
    match report_path {
        Some(report_path) => report.write_to_path(report_path)?,
        None => report.write_to_writer(&mut std::io::stdout())?,
    }
    if outcome.is_failed() {
        bail!(
            "scenario failed at step {}: {}",
            report.failed_step_index.unwrap_or_default(),
            report.message.clone().unwrap_or_default()
        );
    }
    Ok(())
}

fn cmd_show(config: &TallyConfig) -> Result<()> {
    let store = open_store(config)?;
    match store.get(&config.counter.slot)? {
        Some(value) => println!("{value}"),
        None => println!("(unset)"),
    }
    Ok(())
}

fn cmd_click(config: &TallyConfig, count: u32) -> Result<()> {
    let store = open_store(config)?;
    let fixture = CounterFixture::with_store(store, config.widget_config())?;
    fixture.load();
    for _ in 0..count {
        fixture.click(&config.counter.trigger)?;
    }

    let display = fixture.surface().resolve(&config.counter.display)?;
    let text = fixture.surface().text(display).unwrap_or_default();
    println!("{text}");
    Ok(())
}

fn cmd_reset(config: &TallyConfig) -> Result<()> {
    let store = open_store(config)?;
    store.set(&config.counter.slot, &Count::ZERO.render())?;
    tracing::info!("counter reset");
    println!("0");
    Ok(())
}
