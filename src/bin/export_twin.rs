// Bridge Twin - Twin state export
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Twin State Export
//!
//! Generates one fresh tick of sensor readings, assembles the digital-twin
//! snapshot, and writes it as pretty-printed JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Print to stdout
//! export-twin
//!
//! # Save to file, reproducible
//! export-twin --output-file twin_state.json --seed 42
//! ```

use bridge_twin::bridge::{bridge_components, bridge_sensors, sensor_component_map};
use bridge_twin::event::BridgeEvent;
use bridge_twin::generator::{ReadingGenerator, TickOptions};
use bridge_twin::twin::TwinSnapshot;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Bridge digital twin state export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file to save the snapshot; prints to stdout when absent
    #[arg(short, long)]
    output_file: Option<String>,

    /// Simulate a specific event for this snapshot (overload, earthquake)
    #[arg(short, long)]
    event: Option<BridgeEvent>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut generator = match args.seed {
        Some(seed) => ReadingGenerator::with_seed(bridge_sensors(), seed),
        None => ReadingGenerator::new(bridge_sensors()),
    };

    let mut options = TickOptions::new();
    if let Some(event) = args.event {
        options = options.with_event(event);
    }

    let timestamp = Utc::now();
    let readings = generator.generate(timestamp, &options);
    let snapshot = TwinSnapshot::assemble(
        &bridge_components(),
        &readings,
        &sensor_component_map(),
        timestamp,
    );

    match &args.output_file {
        Some(path) => {
            if let Err(e) = snapshot.to_json_file(path) {
                error!("Could not export twin state to {}: {}", path, e);
                std::process::exit(1);
            }
            info!("Digital twin state exported to {}", path);
        }
        None => match snapshot.to_json_string() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Could not serialize twin state: {}", e);
                std::process::exit(1);
            }
        },
    }
}
