// Bridge Twin - Synthetic SHM data generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # Bridge Twin
//!
//! Synthetic structural-health-monitoring data for a suspension bridge
//! digital twin.
//!
//! This crate generates fake sensor telemetry for a simulated suspension
//! bridge, with support for:
//!
//! - **Quality degradation**: random outlier and missing-value injection
//! - **Event simulation**: OVERLOAD and EARTHQUAKE scenarios that perturb
//!   the affected measurement types
//! - **Twin snapshots**: readings grouped onto the structural components
//!   they are wired to
//! - **Export**: per-reading CSV rows and hierarchical JSON snapshots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bridge_twin::bridge::{bridge_components, bridge_sensors, sensor_component_map};
//! use bridge_twin::generator::{ReadingGenerator, TickOptions};
//! use bridge_twin::twin::TwinSnapshot;
//! use chrono::Utc;
//!
//! // Generate one tick of readings with mild degradation
//! let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
//! let options = TickOptions::new()
//!     .with_missing_value_prob(0.01)
//!     .with_outlier_prob(0.01);
//!
//! let timestamp = Utc::now();
//! let readings = generator.generate(timestamp, &options);
//!
//! // Assemble the twin state and export it
//! let snapshot = TwinSnapshot::assemble(
//!     &bridge_components(),
//!     &readings,
//!     &sensor_component_map(),
//!     timestamp,
//! );
//! snapshot.to_json_file("twin_state.json").unwrap();
//! ```
//!
//! ## Event Simulation
//!
//! An active event replaces outlier injection for the tick; perturbed
//! readings keep their GOOD flag because events model real physical
//! effects, not data defects:
//!
//! ```rust
//! use bridge_twin::event::BridgeEvent;
//! use bridge_twin::generator::TickOptions;
//!
//! let options = TickOptions::new().with_event(BridgeEvent::Earthquake);
//! ```

pub mod bridge;
pub mod event;
pub mod export;
pub mod generator;
pub mod reading;
pub mod twin;

// Re-exports for convenience
pub use bridge::{bridge_components, bridge_sensors, sensor_component_map, StructuralComponent};
pub use event::BridgeEvent;
pub use export::{ExportError, ReadingLog};
pub use generator::{ReadingGenerator, TickOptions};
pub use reading::{MeasurementType, QualityFlag, SensorDefinition, SensorReading};
pub use twin::{ComponentState, ReadingSummary, TwinSnapshot};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
