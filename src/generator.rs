// Bridge Twin - Reading generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Stochastic reading generation.
//!
//! Produces one synthetic reading per sensor per tick, applying quality
//! degradation (outliers, missing values) and event perturbation with a
//! fixed precedence:
//!
//! 1. Base value from the sensor's normal-operation Gaussian.
//! 2. Event perturbation, when an event is active. An active event fully
//!    replaces outlier injection for the tick.
//! 3. Outlier injection (no event only): same mean, 5x standard deviation.
//! 4. Missing-value injection, always evaluated last; it overrides any
//!    earlier outcome.
//! 5. Present values are rounded to 4 decimal places.
//!
//! The generator owns its RNG, so the draw order above is also the exact
//! consumption order of the random stream; a fixed seed reproduces a run
//! tick for tick.

use crate::event::BridgeEvent;
use crate::reading::{QualityFlag, SensorDefinition, SensorReading};
use chrono::{DateTime, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

/// Factor applied to a sensor's standard deviation when injecting outliers.
const OUTLIER_STD_FACTOR: f64 = 5.0;

/// Per-tick generation options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickOptions {
    /// Probability (0-1) that a reading's value is dropped.
    pub missing_value_prob: f64,
    /// Probability (0-1) that a reading is replaced by an outlier.
    pub outlier_prob: f64,
    /// Active structural event, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<BridgeEvent>,
}

impl TickOptions {
    /// Create options with no degradation and no event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-value probability.
    pub fn with_missing_value_prob(mut self, prob: f64) -> Self {
        self.missing_value_prob = prob;
        self
    }

    /// Set the outlier probability.
    pub fn with_outlier_prob(mut self, prob: f64) -> Self {
        self.outlier_prob = prob;
        self
    }

    /// Set the active event.
    pub fn with_event(mut self, event: BridgeEvent) -> Self {
        self.event = Some(event);
        self
    }
}

/// Synthetic reading generator for a fixed sensor set.
#[derive(Debug)]
pub struct ReadingGenerator {
    sensors: Vec<SensorDefinition>,
    rng: StdRng,
}

impl ReadingGenerator {
    /// Create a generator with an entropy-seeded RNG.
    pub fn new(sensors: Vec<SensorDefinition>) -> Self {
        Self {
            sensors,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible runs.
    pub fn with_seed(sensors: Vec<SensorDefinition>, seed: u64) -> Self {
        Self {
            sensors,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the sensor definitions.
    pub fn sensors(&self) -> &[SensorDefinition] {
        &self.sensors
    }

    /// Generate one reading per sensor for the given timestamp.
    ///
    /// Output order matches the sensor definition order.
    pub fn generate(&mut self, timestamp: DateTime<Utc>, options: &TickOptions) -> Vec<SensorReading> {
        let mut readings = Vec::with_capacity(self.sensors.len());

        for sensor in &self.sensors {
            let normal = Normal::new(sensor.params.mean, sensor.params.std_dev).unwrap();
            let base = normal.sample(&mut self.rng);

            let mut value = Some(base);
            let mut quality_flag = QualityFlag::Good;

            if let Some(event) = options.event {
                // Events model real physical effects; the flag stays GOOD.
                value = Some(event.perturb(base, sensor.measurement_type, &mut self.rng));
            } else if self.rng.gen::<f64>() < options.outlier_prob {
                let wide = Normal::new(
                    sensor.params.mean,
                    sensor.params.std_dev * OUTLIER_STD_FACTOR,
                )
                .unwrap();
                value = Some(wide.sample(&mut self.rng));
                quality_flag = QualityFlag::Outlier;
            }

            // Missing check always runs last and overrides any earlier flag.
            if self.rng.gen::<f64>() < options.missing_value_prob {
                value = None;
                quality_flag = QualityFlag::Missing;
            }

            readings.push(SensorReading {
                timestamp,
                sensor_id: sensor.sensor_id.clone(),
                location: sensor.location.clone(),
                measurement_type: sensor.measurement_type,
                value: value.map(round4),
                quality_flag,
            });
        }

        readings
    }
}

/// Round to 4 decimal places.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
