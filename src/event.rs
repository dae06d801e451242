// Bridge Twin - Event simulation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Simulated structural events.
//!
//! An event stands in for a real structural occurrence and deterministically
//! perturbs specific measurement types for as long as it is active. Event
//! perturbation is modeled as a physical effect, not a data-quality defect,
//! so perturbed readings keep their GOOD flag.

use crate::reading::MeasurementType;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A simulated structural event affecting the whole bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BridgeEvent {
    /// Excessive traffic load. Strain gauges read 80% higher.
    Overload,
    /// Seismic shaking. Accelerometers and displacement meters pick up
    /// large random offsets.
    Earthquake,
}

impl BridgeEvent {
    /// Apply the event's effect to a base value.
    ///
    /// Combinations without a matching rule leave the value unchanged and
    /// consume no randomness.
    pub fn perturb(
        &self,
        value: f64,
        measurement_type: MeasurementType,
        rng: &mut (impl Rng + ?Sized),
    ) -> f64 {
        match (self, measurement_type) {
            (BridgeEvent::Overload, MeasurementType::Strain) => value * 1.8,
            (BridgeEvent::Earthquake, MeasurementType::Accelerometer) => {
                value + rng.gen_range(-2.0..=2.0)
            }
            (BridgeEvent::Earthquake, MeasurementType::Displacement) => {
                value + rng.gen_range(-15.0..=15.0)
            }
            _ => value,
        }
    }
}

impl fmt::Display for BridgeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BridgeEvent::Overload => "OVERLOAD",
            BridgeEvent::Earthquake => "EARTHQUAKE",
        };
        f.write_str(s)
    }
}

impl FromStr for BridgeEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OVERLOAD" => Ok(BridgeEvent::Overload),
            "EARTHQUAKE" => Ok(BridgeEvent::Earthquake),
            other => Err(format!("unknown event: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_overload_multiplies_strain() {
        let mut rng = test_rng();
        let v = BridgeEvent::Overload.perturb(150.0, MeasurementType::Strain, &mut rng);
        assert_eq!(v, 270.0);
    }

    #[test]
    fn test_overload_ignores_other_types() {
        let mut rng = test_rng();
        let v = BridgeEvent::Overload.perturb(25.0, MeasurementType::Temperature, &mut rng);
        assert_eq!(v, 25.0);
    }

    #[test]
    fn test_earthquake_offsets_accelerometer() {
        let mut rng = test_rng();
        let v = BridgeEvent::Earthquake.perturb(0.0, MeasurementType::Accelerometer, &mut rng);
        assert!(v >= -2.0 && v <= 2.0);
    }

    #[test]
    fn test_earthquake_offsets_displacement() {
        let mut rng = test_rng();
        let v = BridgeEvent::Earthquake.perturb(10.0, MeasurementType::Displacement, &mut rng);
        assert!(v >= -5.0 && v <= 25.0);
    }

    #[test]
    fn test_earthquake_ignores_temperature() {
        let mut rng = test_rng();
        let v = BridgeEvent::Earthquake.perturb(25.0, MeasurementType::Temperature, &mut rng);
        assert_eq!(v, 25.0);
    }

    #[test]
    fn test_event_parsing() {
        assert_eq!("OVERLOAD".parse::<BridgeEvent>().unwrap(), BridgeEvent::Overload);
        assert_eq!(
            "earthquake".parse::<BridgeEvent>().unwrap(),
            BridgeEvent::Earthquake
        );
        assert!("TSUNAMI".parse::<BridgeEvent>().is_err());
    }

    #[test]
    fn test_event_display_roundtrip() {
        for event in [BridgeEvent::Overload, BridgeEvent::Earthquake] {
            assert_eq!(event.to_string().parse::<BridgeEvent>().unwrap(), event);
        }
    }
}
