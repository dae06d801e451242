// Bridge Twin - Simulation loop
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Bridge Simulation
//!
//! Runs the real-time sensor data simulation, printing each tick and
//! optionally appending readings to a CSV file.
//!
//! ## Usage
//!
//! ```bash
//! # 60 seconds of clean data, one tick per second
//! simulate --duration 60
//!
//! # Degraded data saved to CSV
//! simulate --duration 60 --missing-prob 0.05 --outlier-prob 0.02 \
//!     --output-file readings.csv
//!
//! # Earthquake scenario, reproducible
//! simulate --event earthquake --seed 42
//! ```

use bridge_twin::bridge::bridge_sensors;
use bridge_twin::event::BridgeEvent;
use bridge_twin::export::ReadingLog;
use bridge_twin::generator::{ReadingGenerator, TickOptions};
use chrono::Utc;
use clap::Parser;
use std::time::{Duration, Instant};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Bridge sensor simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Duration of the simulation in seconds
    #[arg(long, default_value = "10")]
    duration: u64,

    /// Interval between ticks in seconds
    #[arg(long, default_value = "1.0")]
    interval: f64,

    /// CSV file to save the generated readings
    #[arg(short, long)]
    output_file: Option<String>,

    /// Probability of missing values (0-1)
    #[arg(long, default_value = "0.01")]
    missing_prob: f64,

    /// Probability of outlier values (0-1)
    #[arg(long, default_value = "0.01")]
    outlier_prob: f64,

    /// Simulate a specific event for the entire duration (overload, earthquake)
    #[arg(short, long)]
    event: Option<BridgeEvent>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    init_tracing(&args.log_level);

    info!("Bridge Twin simulation v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Running for {} seconds with a {} second interval",
        args.duration, args.interval
    );

    let mut generator = match args.seed {
        Some(seed) => ReadingGenerator::with_seed(bridge_sensors(), seed),
        None => ReadingGenerator::new(bridge_sensors()),
    };

    let mut options = TickOptions::new()
        .with_missing_value_prob(args.missing_prob)
        .with_outlier_prob(args.outlier_prob);
    if let Some(event) = args.event {
        options = options.with_event(event);
        info!("Simulating event: {}", event);
    }

    // Open the destination before generating anything so a bad path
    // aborts the run up front.
    let mut log = match &args.output_file {
        Some(path) => match ReadingLog::create(path) {
            Ok(log) => Some(log),
            Err(e) => {
                error!("Could not write to output file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let start = Instant::now();
    let end = Duration::from_secs(args.duration);
    let interval = Duration::from_secs_f64(args.interval);

    while start.elapsed() < end {
        let now = Utc::now();
        let readings = generator.generate(now, &options);

        info!("--- {} ---", now.to_rfc3339());
        for reading in &readings {
            match reading.value {
                Some(v) => info!(
                    "{} [{}] {} = {} ({})",
                    reading.sensor_id,
                    reading.location,
                    reading.measurement_type,
                    v,
                    reading.quality_flag
                ),
                None => info!(
                    "{} [{}] {} = <missing> ({})",
                    reading.sensor_id, reading.location, reading.measurement_type, reading.quality_flag
                ),
            }
        }

        if let Some(log) = log.as_mut() {
            if let Err(e) = log.write_readings(&readings) {
                error!("Failed to write readings: {}", e);
                std::process::exit(1);
            }
        }

        std::thread::sleep(interval);
    }

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            error!("Failed to flush output file: {}", e);
            std::process::exit(1);
        }
        info!("Data saved to {}", args.output_file.as_deref().unwrap_or(""));
    }
    info!("Simulation finished");
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
