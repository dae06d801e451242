// Bridge Twin - Twin snapshot assembly
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Digital-twin snapshot assembly.
//!
//! A snapshot pairs every structural component with the readings of the
//! sensors wired to it at one instant. Components appear exactly once, in
//! model order, whether or not they have sensors; readings whose sensor
//! has no mapping entry are dropped.

use crate::bridge::{ComponentType, StructuralComponent};
use crate::export::ExportError;
use crate::reading::{MeasurementType, QualityFlag, SensorReading};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// The reading fields a component carries in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSummary {
    /// Originating sensor identifier.
    pub sensor_id: String,
    /// Measured quantity.
    pub measurement_type: MeasurementType,
    /// Value, absent when the reading was missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Quality classification.
    pub quality_flag: QualityFlag,
}

impl From<&SensorReading> for ReadingSummary {
    fn from(reading: &SensorReading) -> Self {
        Self {
            sensor_id: reading.sensor_id.clone(),
            measurement_type: reading.measurement_type,
            value: reading.value,
            quality_flag: reading.quality_flag,
        }
    }
}

/// One structural component plus its attached readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentState {
    /// Unique component identifier.
    pub component_id: String,
    /// Component category.
    pub component_type: ComponentType,
    /// Positional and dimensional attributes.
    pub geometry: serde_json::Value,
    /// Construction material.
    pub material: String,
    /// Readings from sensors wired to this component; may be empty.
    pub sensors: Vec<ReadingSummary>,
}

/// Full-model state export at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwinSnapshot {
    /// Snapshot timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Every component of the structural model, in model order.
    pub components: Vec<ComponentState>,
}

impl TwinSnapshot {
    /// Assemble a snapshot from a reading set.
    ///
    /// Readings are bucketed by the sensor-to-component map in one pass;
    /// an unmapped sensor is normal and its reading is silently dropped.
    pub fn assemble(
        components: &[StructuralComponent],
        readings: &[SensorReading],
        sensor_map: &HashMap<String, String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut by_component: HashMap<&str, Vec<ReadingSummary>> = HashMap::new();
        for reading in readings {
            if let Some(component_id) = sensor_map.get(&reading.sensor_id) {
                by_component
                    .entry(component_id.as_str())
                    .or_default()
                    .push(ReadingSummary::from(reading));
            }
        }

        let components = components
            .iter()
            .map(|component| ComponentState {
                component_id: component.component_id.clone(),
                component_type: component.component_type,
                geometry: component.geometry.clone(),
                material: component.material.clone(),
                sensors: by_component
                    .remove(component.component_id.as_str())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            timestamp,
            components,
        }
    }

    /// Find a component's state by identifier.
    pub fn component(&self, component_id: &str) -> Option<&ComponentState> {
        self.components
            .iter()
            .find(|c| c.component_id == component_id)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export to a JSON file.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
