// Bridge Twin - Sensor data model
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Sensor data model: definitions and generated readings.
//!
//! A `SensorDefinition` describes one instrument installed on the bridge;
//! a `SensorReading` is one immutable value produced for it per tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical quantity measured by a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    /// Strain gauge (µε).
    Strain,
    /// Accelerometer (g).
    Accelerometer,
    /// Temperature probe (°C).
    Temperature,
    /// Displacement meter (mm).
    Displacement,
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeasurementType::Strain => "Strain",
            MeasurementType::Accelerometer => "Accelerometer",
            MeasurementType::Temperature => "Temperature",
            MeasurementType::Displacement => "Displacement",
        };
        f.write_str(s)
    }
}

/// Trustworthiness classification of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityFlag {
    /// Value is within normal operating behavior.
    Good,
    /// Value was replaced by a wide-distribution draw.
    Outlier,
    /// Value was dropped entirely; `value` is `None`.
    Missing,
}

impl fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityFlag::Good => "GOOD",
            QualityFlag::Outlier => "OUTLIER",
            QualityFlag::Missing => "MISSING",
        };
        f.write_str(s)
    }
}

/// Normal-operation distribution parameters for a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorParams {
    /// Mean value under normal conditions.
    pub mean: f64,
    /// Standard deviation under normal conditions.
    pub std_dev: f64,
}

impl SensorParams {
    /// Create distribution parameters.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Static description of one installed sensor.
///
/// Immutable for the process lifetime; the generator only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorDefinition {
    /// Unique sensor identifier.
    pub sensor_id: String,
    /// Installation location label.
    pub location: String,
    /// Measured quantity.
    pub measurement_type: MeasurementType,
    /// Normal-operation distribution.
    pub params: SensorParams,
}

impl SensorDefinition {
    /// Create a sensor definition.
    pub fn new(
        sensor_id: &str,
        location: &str,
        measurement_type: MeasurementType,
        mean: f64,
        std_dev: f64,
    ) -> Self {
        Self {
            sensor_id: sensor_id.to_string(),
            location: location.to_string(),
            measurement_type,
            params: SensorParams::new(mean, std_dev),
        }
    }
}

/// One generated reading, immutable after creation.
///
/// `value` is `None` exactly when `quality_flag` is [`QualityFlag::Missing`];
/// a dropped value is never encoded as a sentinel number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    /// Generation timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Identifier of the originating sensor.
    pub sensor_id: String,
    /// Location label copied from the definition.
    pub location: String,
    /// Measured quantity copied from the definition.
    pub measurement_type: MeasurementType,
    /// Measured value, rounded to 4 decimals; absent when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Quality classification.
    pub quality_flag: QualityFlag,
}

impl SensorReading {
    /// Check the missing-value invariant.
    pub fn is_missing(&self) -> bool {
        self.quality_flag == QualityFlag::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_flag_serialization() {
        assert_eq!(serde_json::to_string(&QualityFlag::Good).unwrap(), "\"GOOD\"");
        assert_eq!(
            serde_json::to_string(&QualityFlag::Outlier).unwrap(),
            "\"OUTLIER\""
        );
        assert_eq!(
            serde_json::to_string(&QualityFlag::Missing).unwrap(),
            "\"MISSING\""
        );
    }

    #[test]
    fn test_measurement_type_serialization() {
        assert_eq!(
            serde_json::to_string(&MeasurementType::Strain).unwrap(),
            "\"Strain\""
        );
        assert_eq!(MeasurementType::Accelerometer.to_string(), "Accelerometer");
    }

    #[test]
    fn test_sensor_definition_creation() {
        let def = SensorDefinition::new("ST001", "Deck_Midspan", MeasurementType::Strain, 150.0, 5.0);
        assert_eq!(def.sensor_id, "ST001");
        assert_eq!(def.params.mean, 150.0);
        assert_eq!(def.params.std_dev, 5.0);
    }

    #[test]
    fn test_missing_reading_omits_value() {
        let reading = SensorReading {
            timestamp: Utc::now(),
            sensor_id: "TM001".to_string(),
            location: "Asphalt_Surface".to_string(),
            measurement_type: MeasurementType::Temperature,
            value: None,
            quality_flag: QualityFlag::Missing,
        };

        let json = serde_json::to_string(&reading).unwrap();
        assert!(!json.contains("\"value\""));
        assert!(json.contains("\"MISSING\""));
        assert!(reading.is_missing());
    }
}
