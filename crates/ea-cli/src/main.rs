use std::io::{BufWriter, Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ea_cli::commands::{classify, dashboard, slots, suggest, util};
use ea_cli::{Cli, Commands, Config, Snapshot};
use ea_core::SlotQuery;

/// Load config and resolve the evaluation instant in the configured zone.
fn load_context(config_path: Option<&Path>, now: Option<&str>) -> Result<(Config, DateTime<Tz>)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let tz = config.time_zone().context("failed to resolve time zone")?;
    let wall_clock = Utc::now();
    let now = match now {
        Some(raw) => util::parse_datetime(raw, wall_clock).context("failed to parse --now")?,
        None => wall_clock,
    };
    Ok((config, now.with_timezone(&tz)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let stdout = stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match &cli.command {
        Some(Commands::Slots {
            snapshot,
            duration,
            days,
            json,
        }) => {
            let (config, now) = load_context(cli.config.as_deref(), cli.now.as_deref())?;
            let policy = config
                .window_policy()
                .context("invalid business hours in configuration")?;
            let snapshot = Snapshot::load(snapshot)?;
            let query = SlotQuery {
                duration_minutes: *duration,
                days_ahead: *days,
            };
            slots::run(&mut writer, &snapshot, &now, &query, &policy, *json)?;
        }
        Some(Commands::Classify {
            title,
            attendees,
            json,
        }) => {
            // Classification needs no clock, only the keyword config.
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            classify::run(&mut writer, &config.classifier(), title, *attendees, *json)?;
        }
        Some(Commands::Dashboard { snapshot, json }) => {
            let (config, now) = load_context(cli.config.as_deref(), cli.now.as_deref())?;
            let snapshot = Snapshot::load(snapshot)?;
            dashboard::run(&mut writer, &config.classifier(), &snapshot, &now, *json)?;
        }
        Some(Commands::Suggest { snapshot, json }) => {
            let (_config, now) = load_context(cli.config.as_deref(), cli.now.as_deref())?;
            let snapshot = Snapshot::load(snapshot)?;
            suggest::run(&mut writer, &snapshot, &now, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    writer.flush().context("failed to write output")?;
    Ok(())
}
