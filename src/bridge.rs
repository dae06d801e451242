// Bridge Twin - Bridge model preset
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Static suspension-bridge model.
//!
//! A simplified structural model of a suspension bridge: two towers, one
//! continuous deck segment, two main cables, and two representative
//! suspender cables. Also ships the installed sensor set and the
//! sensor-to-component wiring. All three tables are loaded once and passed
//! around read-only; nothing in the crate mutates them.

use crate::reading::{MeasurementType, SensorDefinition};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Structural component category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    Tower,
    DeckSegment,
    MainCable,
    SuspenderCable,
}

/// One structural component of the bridge model.
///
/// Geometry is free-form JSON because its keys are component-type-specific
/// (a tower has a base position and dimensions, a main cable has anchors,
/// saddles, and sag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralComponent {
    /// Unique component identifier.
    pub component_id: String,
    /// Component category.
    pub component_type: ComponentType,
    /// Positional and dimensional attributes.
    pub geometry: serde_json::Value,
    /// Construction material.
    pub material: String,
}

impl StructuralComponent {
    /// Create a structural component.
    pub fn new(
        component_id: &str,
        component_type: ComponentType,
        geometry: serde_json::Value,
        material: &str,
    ) -> Self {
        Self {
            component_id: component_id.to_string(),
            component_type,
            geometry,
            material: material.to_string(),
        }
    }
}

/// The structural model of the bridge, in fixed output order.
///
/// This order also defines the component order of every assembled snapshot.
pub fn bridge_components() -> Vec<StructuralComponent> {
    vec![
        // Main towers
        StructuralComponent::new(
            "TWR-N",
            ComponentType::Tower,
            json!({"position_base": [50, 0, 0], "dimensions": [10, 15, 80]}),
            "Concrete",
        ),
        StructuralComponent::new(
            "TWR-S",
            ComponentType::Tower,
            json!({"position_base": [450, 0, 0], "dimensions": [10, 15, 80]}),
            "Concrete",
        ),
        // Deck, modeled as one continuous segment
        StructuralComponent::new(
            "DECK-MAIN",
            ComponentType::DeckSegment,
            json!({"start_point": [0, 0, 20], "dimensions": [500, 20, 2]}),
            "Steel",
        ),
        // Main suspension cables
        StructuralComponent::new(
            "CBL-M-E",
            ComponentType::MainCable,
            json!({
                "start_anchor": [0, 5, 22],
                "end_anchor": [500, 5, 22],
                "tower_saddles": [[50, 5, 80], [450, 5, 80]],
                "sag_midpoint": 40
            }),
            "Steel",
        ),
        StructuralComponent::new(
            "CBL-M-W",
            ComponentType::MainCable,
            json!({
                "start_anchor": [0, -5, 22],
                "end_anchor": [500, -5, 22],
                "tower_saddles": [[50, -5, 80], [450, -5, 80]],
                "sag_midpoint": 40
            }),
            "Steel",
        ),
        // Representative vertical suspender cables
        StructuralComponent::new(
            "CBL-V-N1",
            ComponentType::SuspenderCable,
            json!({"main_cable_connection": [150, 5, 55], "deck_connection": [150, 5, 21]}),
            "Steel",
        ),
        StructuralComponent::new(
            "CBL-V-S1",
            ComponentType::SuspenderCable,
            json!({"main_cable_connection": [350, 5, 55], "deck_connection": [350, 5, 21]}),
            "Steel",
        ),
    ]
}

/// Find a component by its identifier.
pub fn component_by_id<'a>(
    components: &'a [StructuralComponent],
    component_id: &str,
) -> Option<&'a StructuralComponent> {
    components.iter().find(|c| c.component_id == component_id)
}

/// The installed sensor set, with normal-operation parameters.
pub fn bridge_sensors() -> Vec<SensorDefinition> {
    vec![
        SensorDefinition::new("ST001", "Deck_Midspan", MeasurementType::Strain, 150.0, 5.0),
        SensorDefinition::new("ST002", "Tower1_Base", MeasurementType::Strain, 50.0, 2.0),
        SensorDefinition::new("AC001", "Deck_Midspan", MeasurementType::Accelerometer, 0.0, 0.05),
        SensorDefinition::new("AC002", "Tower1_Top", MeasurementType::Accelerometer, 0.0, 0.1),
        SensorDefinition::new("TM001", "Asphalt_Surface", MeasurementType::Temperature, 25.0, 1.5),
        SensorDefinition::new("DS001", "SuspensionCable_A1", MeasurementType::Displacement, 10.0, 0.5),
    ]
}

/// Sensor-to-component wiring.
///
/// Partial by design: a sensor absent from the map still generates readings,
/// they just never attach to a component in a snapshot.
pub fn sensor_component_map() -> HashMap<String, String> {
    [
        ("ST001", "DECK-MAIN"),
        ("ST002", "TWR-N"),
        ("AC001", "DECK-MAIN"),
        ("AC002", "TWR-N"),
        ("TM001", "DECK-MAIN"),
        ("DS001", "CBL-M-E"),
    ]
    .into_iter()
    .map(|(s, c)| (s.to_string(), c.to_string()))
    .collect()
}
