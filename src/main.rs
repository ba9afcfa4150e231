//! CoolSim Runner — process entry point.
//!
//! Owns everything the control core deliberately does not: argument
//! parsing, logger initialisation, adapter wiring, and the fixed-period
//! sleep-then-tick cadence. The core performs no timing or blocking I/O
//! of its own.

#![deny(unused_must_use)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use coolsim::adapters::log_sink::LogEventSink;
use coolsim::adapters::sim_bus::SimBus;
use coolsim::adapters::sim_rig::SimRig;
use coolsim::app::service::ControlLoop;
use coolsim::config::SystemConfig;

const TEMP_MIN_C: f32 = 20.0;
const TEMP_MAX_C: f32 = 100.0;
const PERIOD_MIN_SECS: f32 = 0.05;
const PERIOD_MAX_SECS: f32 = 5.0;

/// Closed-loop thermal controller for a simulated vehicle cooling subsystem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Initial coolant temperature in degrees Celsius (clamped to [20, 100])
    initial_temp: Option<f32>,

    /// Control loop period in seconds (clamped to [0.05, 5.0])
    period_secs: Option<f32>,

    /// Stop after this many ticks instead of running indefinitely
    #[arg(long)]
    ticks: Option<u64>,

    /// Load configuration overrides from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            serde_json::from_str::<SystemConfig>(&raw)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => SystemConfig::default(),
    };

    if let Some(temp) = cli.initial_temp {
        config.initial_temperature_c = temp.clamp(TEMP_MIN_C, TEMP_MAX_C);
    }
    if let Some(period) = cli.period_secs {
        config.loop_period_secs = period.clamp(PERIOD_MIN_SECS, PERIOD_MAX_SECS);
    }

    // Fatal configuration faults surface here, before the first tick.
    let mut control = ControlLoop::new(&config).context("controller configuration")?;

    let mut rig = SimRig::new(&config);
    let mut bus = SimBus::new();
    let mut sink = LogEventSink::new();

    info!(
        "coolsim v{}: starting control loop ({:.2}s period, initial temp {:.2}\u{00b0}C)",
        env!("CARGO_PKG_VERSION"),
        config.loop_period_secs,
        config.initial_temperature_c,
    );

    control.start(&mut sink);

    let period = Duration::from_secs_f32(config.loop_period_secs);
    loop {
        control.tick(&mut rig, &mut bus, &mut sink);
        if cli.ticks.is_some_and(|limit| control.tick_count() >= limit) {
            info!("tick limit reached, exiting");
            return Ok(());
        }
        thread::sleep(period);
    }
}
