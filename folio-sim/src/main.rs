//! `folio-sim` command line: replay scenarios and classify widths.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::domains::animation::{AnimationProfile, DecorativeMotion};
use folio_core::domains::viewport::classify;
use folio_core::{ConfigLoader, DeviceClass, NavConfig};
use folio_sim::{Scenario, simulate};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "folio-sim",
    version,
    about = "Replay navigation scenarios against a headless portfolio page"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a scenario file (.json or .toml) and print one JSON snapshot per step
    Run {
        scenario: PathBuf,
        /// Pretty-print each snapshot
        #[arg(long)]
        pretty: bool,
        /// TOML file with navigation overrides
        #[arg(long)]
        config: Option<PathBuf>,
        /// Dotenv file providing FOLIO_* overrides
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Print the device class and animation profile for a viewport width
    Classify {
        width: u32,
        /// TOML file with navigation overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Classification {
    width: u32,
    device_class: DeviceClass,
    profile: AnimationProfile,
    decor: DecorativeMotion,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            scenario,
            pretty,
            config,
            env_file,
        } => {
            let config = load_config(config.as_deref(), env_file.as_deref())?;
            let scenario = Scenario::from_path(&scenario).with_context(|| {
                format!("loading scenario {}", scenario.display())
            })?;

            let frames = simulate(&scenario, config);
            tracing::info!(frames = frames.len(), "scenario replayed");

            let mut out = io::stdout().lock();
            for frame in &frames {
                let line = if pretty {
                    serde_json::to_string_pretty(frame)?
                } else {
                    serde_json::to_string(frame)?
                };
                writeln!(out, "{line}")?;
            }
        }
        Command::Classify { width, config } => {
            let config = load_config(config.as_deref(), None)?;
            let device_class = classify(width, config.compact_max_width_px());
            let classification = Classification {
                width,
                device_class,
                profile: AnimationProfile::for_device(device_class),
                decor: DecorativeMotion::select(device_class, false),
            };
            println!("{}", serde_json::to_string(&classification)?);
        }
    }

    Ok(())
}

fn load_config(config: Option<&Path>, env_file: Option<&Path>) -> Result<NavConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = env_file {
        loader = loader.with_env_file(path);
    }
    loader.load().context("loading navigation config")
}
