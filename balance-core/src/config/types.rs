//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calibration::{DEFAULT_CALIBRATION_SAMPLES, MAX_CALIBRATION_SAMPLES};
use crate::sample::Axis;
use crate::stability::Thresholds;

/// Default sensor polling interval (~1 Hz gives smoother readings)
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 1000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Calibration window is zero or exceeds storage
    InvalidCalibrationSamples,
    /// Tolerance is negative or not a finite number
    InvalidTolerance(Axis),
    /// Sample interval is zero
    InvalidInterval,
    /// Configuration text could not be parsed
    Parse,
}

/// Monitor configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Samples averaged into the baseline
    pub calibration_samples: u8,
    /// Allowed deviation on X (m/s²)
    pub tolerance_x: f32,
    /// Allowed deviation on Y (m/s²)
    pub tolerance_y: f32,
    /// Allowed deviation on Z (m/s²); the classifier checks Z against X
    pub tolerance_z: f32,
    /// Sensor polling interval in milliseconds
    pub sample_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES as u8,
            tolerance_x: thresholds.tolerance_x,
            tolerance_y: thresholds.tolerance_y,
            tolerance_z: thresholds.tolerance_z,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    /// Check all values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let samples = self.calibration_samples as usize;
        if samples == 0 || samples > MAX_CALIBRATION_SAMPLES {
            return Err(ConfigError::InvalidCalibrationSamples);
        }

        for axis in Axis::ALL {
            let tolerance = self.tolerance(axis);
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::InvalidTolerance(axis));
            }
        }

        if self.sample_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        Ok(())
    }

    /// Configured tolerance for an axis
    pub fn tolerance(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.tolerance_x,
            Axis::Y => self.tolerance_y,
            Axis::Z => self.tolerance_z,
        }
    }

    /// Build classifier thresholds
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.tolerance_x, self.tolerance_y, self.tolerance_z)
    }
}
