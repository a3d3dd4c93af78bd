//! Stability monitor implementation
//!
//! Buffers the first samples of a session into a baseline, then
//! classifies every later sample against it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{classify, Classification, Thresholds};
use crate::calibration::{Baseline, CalibrationBuffer};
use crate::config::{ConfigError, MonitorConfig};
use crate::sample::{Axis, Deviation, Sample};

/// Monitor mode
///
/// `Calibrating -> Calibrated` happens exactly once, when the calibration
/// buffer fills. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonitorState {
    #[default]
    Calibrating,
    Calibrated,
}

/// Observables produced by a single ingest
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Classification of this sample
    pub classification: Classification,
    /// Raw sample as received
    pub sample: Sample,
    /// Baseline, once calibration has completed
    pub baseline: Option<Baseline>,
    /// Deviation from baseline (only computed once calibrated)
    pub deviation: Option<Deviation>,
    /// Monitor state after this sample
    pub state: MonitorState,
}

/// A sample component was NaN or infinite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidSample {
    /// First offending axis, in X, Y, Z order
    pub axis: Axis,
}

/// Calibration state machine and threshold classifier
///
/// One monitor lives for one monitoring session. Calls must be serialized
/// by the owner; nothing here blocks or locks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StabilityMonitor {
    state: MonitorState,
    buffer: CalibrationBuffer,
    baseline: Option<Baseline>,
    thresholds: Thresholds,
    last: Option<Reading>,
}

impl Default for StabilityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityMonitor {
    /// Create a monitor with the default window (20 samples) and tolerances
    pub fn new() -> Self {
        Self::from_parts(CalibrationBuffer::default(), Thresholds::default())
    }

    /// Create a monitor from a configuration
    pub fn with_config(config: &MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let buffer = CalibrationBuffer::with_capacity(config.calibration_samples as usize)
            .ok_or(ConfigError::InvalidCalibrationSamples)?;

        Ok(Self::from_parts(buffer, config.thresholds()))
    }

    fn from_parts(buffer: CalibrationBuffer, thresholds: Thresholds) -> Self {
        Self {
            state: MonitorState::Calibrating,
            buffer,
            baseline: None,
            thresholds,
            last: None,
        }
    }

    /// Feed one sample and classify it
    ///
    /// Every sample up to and including the one that completes calibration
    /// is reported as [`Classification::Calibrating`]. No validation is
    /// done; use [`try_ingest`](Self::try_ingest) to reject non-finite input.
    pub fn ingest(&mut self, sample: Sample) -> Classification {
        self.record(sample).classification
    }

    /// Feed one sample, rejecting NaN or infinite components
    ///
    /// A rejected sample leaves the monitor untouched.
    pub fn try_ingest(&mut self, sample: Sample) -> Result<Reading, InvalidSample> {
        if let Some(axis) = sample.first_non_finite() {
            return Err(InvalidSample { axis });
        }

        Ok(self.record(sample))
    }

    fn record(&mut self, sample: Sample) -> Reading {
        let reading = match (self.state, self.baseline) {
            (MonitorState::Calibrated, Some(baseline)) => {
                let deviation = baseline.deviation(&sample);
                Reading {
                    classification: classify(&deviation, &self.thresholds),
                    sample,
                    baseline: Some(baseline),
                    deviation: Some(deviation),
                    state: self.state,
                }
            }
            _ => {
                self.calibrate(sample);
                Reading {
                    classification: Classification::Calibrating,
                    sample,
                    baseline: self.baseline,
                    deviation: None,
                    state: self.state,
                }
            }
        };

        self.last = Some(reading);
        reading
    }

    fn calibrate(&mut self, sample: Sample) {
        if self.buffer.push(sample).is_err() {
            return;
        }

        if let Some(baseline) = self.buffer.baseline() {
            self.baseline = Some(baseline);
            self.state = MonitorState::Calibrated;

            #[cfg(feature = "defmt")]
            defmt::info!(
                "Calibrated over {} samples: mean x={} y={} z={}",
                self.buffer.len(),
                baseline.mean_x(),
                baseline.mean_y(),
                baseline.mean_z()
            );
        }
    }

    /// Current mode
    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn is_calibrated(&self) -> bool {
        self.state == MonitorState::Calibrated
    }

    /// Baseline, or `None` while calibrating
    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Samples buffered towards calibration so far
    pub fn samples_collected(&self) -> usize {
        self.buffer.len()
    }

    /// Size of the calibration window
    pub fn calibration_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Observables from the most recent ingest
    pub fn last_reading(&self) -> Option<&Reading> {
        self.last.as_ref()
    }

    pub fn classification(&self) -> Option<Classification> {
        self.last.map(|r| r.classification)
    }

    pub fn last_sample(&self) -> Option<Sample> {
        self.last.map(|r| r.sample)
    }

    pub fn deviation(&self) -> Option<Deviation> {
        self.last.and_then(|r| r.deviation)
    }
}
