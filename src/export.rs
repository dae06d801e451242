// Bridge Twin - Reading export
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Line-oriented CSV export of sensor readings.
//!
//! One row per reading, fixed column order matching the reading fields.
//! Export failures are loud: an unwritable destination surfaces as an
//! [`ExportError`] instead of silently dropping data.

use crate::reading::SensorReading;
use chrono::SecondsFormat;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Export error types.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CSV column header, matching `SensorReading` field order.
pub const CSV_HEADER: &str = "timestamp,sensor_id,location,measurement_type,value,quality_flag";

/// Append-style CSV writer for sensor readings.
///
/// The destination is created and the header written up front, so a bad
/// path fails before any data is generated.
pub struct ReadingLog {
    writer: BufWriter<File>,
}

impl ReadingLog {
    /// Create the output file and write the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self { writer })
    }

    /// Append one reading as a CSV row.
    ///
    /// Missing values produce an empty cell, never a sentinel number.
    pub fn write_reading(&mut self, reading: &SensorReading) -> Result<(), ExportError> {
        write!(
            self.writer,
            "{},{},{},{},",
            reading.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            reading.sensor_id,
            reading.location,
            reading.measurement_type,
        )?;
        match reading.value {
            Some(v) => write!(self.writer, "{}", v)?,
            None => {}
        }
        writeln!(self.writer, ",{}", reading.quality_flag)?;
        Ok(())
    }

    /// Append a whole tick of readings.
    pub fn write_readings(&mut self, readings: &[SensorReading]) -> Result<(), ExportError> {
        for reading in readings {
            self.write_reading(reading)?;
        }
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
