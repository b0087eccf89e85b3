//! Liquid device snapshot inspector
//!
//! Builds the device profile the SDK would build on this machine and prints
//! the snapshot attached to telemetry events.
//!
//! Usage:
//!   liquid-inspect --pretty --latitude 38.7 --longitude -9.1

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use liquid_inspect::{build_profile, render, InspectOptions};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "liquid-inspect")]
#[command(about = "Print the Liquid device snapshot for this host")]
struct Args {
    /// Directory holding the persisted device identifier
    #[arg(short, long)]
    storage_dir: Option<PathBuf>,

    /// Path to liquid.toml ([profile] and [app] tables)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Latitude to place in the overlay (requires --longitude)
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude to place in the overlay (requires --latitude)
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Push token to place in the overlay
    #[arg(long)]
    push_token: Option<String>,

    /// Pretty-print the snapshot
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let options = InspectOptions {
        storage_dir: args.storage_dir,
        config: args.config,
        latitude: args.latitude,
        longitude: args.longitude,
        push_token: args.push_token,
        net_root: None,
    };

    let profile = build_profile(&options)?;
    let snapshot = profile.snapshot().context("Failed to build device snapshot")?;
    println!("{}", render(snapshot, args.pretty)?);
    Ok(())
}
