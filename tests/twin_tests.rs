// Bridge Twin - Integration tests
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! End-to-end tests: generation through snapshot assembly and export.

use bridge_twin::bridge::{bridge_components, bridge_sensors, sensor_component_map};
use bridge_twin::event::BridgeEvent;
use bridge_twin::export::{ReadingLog, CSV_HEADER};
use bridge_twin::generator::{ReadingGenerator, TickOptions};
use bridge_twin::reading::QualityFlag;
use bridge_twin::twin::TwinSnapshot;
use chrono::Utc;
use tempfile::NamedTempFile;

#[test]
fn one_reading_per_sensor_preserving_order() {
    let sensors = bridge_sensors();
    let mut generator = ReadingGenerator::with_seed(sensors.clone(), 42);

    for _ in 0..10 {
        let readings = generator.generate(Utc::now(), &TickOptions::new());
        assert_eq!(readings.len(), sensors.len());
        for (reading, sensor) in readings.iter().zip(sensors.iter()) {
            assert_eq!(reading.sensor_id, sensor.sensor_id);
            assert_eq!(reading.location, sensor.location);
            assert_eq!(reading.measurement_type, sensor.measurement_type);
        }
    }
}

#[test]
fn missing_flag_iff_value_absent() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let options = TickOptions::new()
        .with_missing_value_prob(0.5)
        .with_outlier_prob(0.5);

    for _ in 0..100 {
        for reading in generator.generate(Utc::now(), &options) {
            assert_eq!(
                reading.value.is_none(),
                reading.quality_flag == QualityFlag::Missing
            );
        }
    }
}

#[test]
fn active_event_never_yields_outlier_flags() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let options = TickOptions::new()
        .with_outlier_prob(1.0)
        .with_missing_value_prob(0.3)
        .with_event(BridgeEvent::Overload);

    for _ in 0..100 {
        for reading in generator.generate(Utc::now(), &options) {
            // MISSING may still occur; OUTLIER must not.
            assert_ne!(reading.quality_flag, QualityFlag::Outlier);
        }
    }
}

#[test]
fn missing_prob_one_overrides_event_and_outliers() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let options = TickOptions::new()
        .with_missing_value_prob(1.0)
        .with_outlier_prob(1.0)
        .with_event(BridgeEvent::Earthquake);

    for _ in 0..20 {
        for reading in generator.generate(Utc::now(), &options) {
            assert_eq!(reading.quality_flag, QualityFlag::Missing);
            assert!(reading.value.is_none());
        }
    }
}

#[test]
fn present_values_rounded_to_four_decimals() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let options = TickOptions::new().with_outlier_prob(0.3);

    for _ in 0..50 {
        for reading in generator.generate(Utc::now(), &options) {
            if let Some(v) = reading.value {
                let rescaled = v * 10_000.0;
                assert_eq!(rescaled, rescaled.round(), "value {} not rounded", v);
            }
        }
    }
}

#[test]
fn snapshot_contains_every_component_exactly_once() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let timestamp = Utc::now();
    let readings = generator.generate(timestamp, &TickOptions::new());
    let model = bridge_components();

    let snapshot = TwinSnapshot::assemble(&model, &readings, &sensor_component_map(), timestamp);

    assert_eq!(snapshot.components.len(), model.len());
    for (state, component) in snapshot.components.iter().zip(model.iter()) {
        assert_eq!(state.component_id, component.component_id);
        assert_eq!(state.material, component.material);
        assert_eq!(state.geometry, component.geometry);
    }
    assert_eq!(snapshot.timestamp, timestamp);
}

#[test]
fn every_mapped_reading_lands_on_exactly_one_component() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let timestamp = Utc::now();
    let readings = generator.generate(timestamp, &TickOptions::new());
    let sensor_map = sensor_component_map();

    let snapshot =
        TwinSnapshot::assemble(&bridge_components(), &readings, &sensor_map, timestamp);

    let attached: usize = snapshot.components.iter().map(|c| c.sensors.len()).sum();
    assert_eq!(attached, sensor_map.len());
}

#[test]
fn unmapped_sensor_reading_is_dropped_without_error() {
    let mut sensors = bridge_sensors();
    sensors.push(bridge_twin::SensorDefinition::new(
        "WX001",
        "Weather_Mast",
        bridge_twin::MeasurementType::Temperature,
        15.0,
        3.0,
    ));

    let mut generator = ReadingGenerator::with_seed(sensors, 42);
    let timestamp = Utc::now();
    let readings = generator.generate(timestamp, &TickOptions::new());
    assert_eq!(readings.len(), 7);

    let snapshot = TwinSnapshot::assemble(
        &bridge_components(),
        &readings,
        &sensor_component_map(),
        timestamp,
    );

    for state in &snapshot.components {
        assert!(state.sensors.iter().all(|s| s.sensor_id != "WX001"));
    }
}

#[test]
fn seeded_run_reproduces_csv_output() {
    let options = TickOptions::new()
        .with_missing_value_prob(0.1)
        .with_outlier_prob(0.1);
    let timestamp = Utc::now();

    let export = |seed: u64| {
        let mut generator = ReadingGenerator::with_seed(bridge_sensors(), seed);
        let temp = NamedTempFile::new().unwrap();
        let mut log = ReadingLog::create(temp.path()).unwrap();
        for _ in 0..20 {
            log.write_readings(&generator.generate(timestamp, &options))
                .unwrap();
        }
        log.flush().unwrap();
        std::fs::read_to_string(temp.path()).unwrap()
    };

    let first = export(9001);
    let second = export(9001);
    assert_eq!(first, second);
    assert!(first.starts_with(CSV_HEADER));
}

#[test]
fn snapshot_reflects_quality_degradation() {
    let mut generator = ReadingGenerator::with_seed(bridge_sensors(), 42);
    let options = TickOptions::new().with_missing_value_prob(1.0);
    let timestamp = Utc::now();
    let readings = generator.generate(timestamp, &options);

    let snapshot = TwinSnapshot::assemble(
        &bridge_components(),
        &readings,
        &sensor_component_map(),
        timestamp,
    );

    for state in &snapshot.components {
        for summary in &state.sensors {
            assert_eq!(summary.quality_flag, QualityFlag::Missing);
            assert!(summary.value.is_none());
        }
    }
}
