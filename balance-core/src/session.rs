//! Monitoring session
//!
//! Wires a sensor, a stability monitor and an indicator together for the
//! lifetime of one session. The caller's timer drives [`BalanceSession::poll`]
//! at [`BalanceSession::sample_interval_ms`]; tearing the session down is
//! just dropping it (or taking the parts back with `into_parts`).

use crate::config::{ConfigError, MonitorConfig};
use crate::stability::{InvalidSample, Reading, StabilityMonitor};
use crate::traits::{Accelerometer, IndicatorError, SensorError, StatusIndicator};

/// Errors from a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Sensor read failed; the monitor was not touched
    Sensor(SensorError),
    /// Sample had a non-finite component; the monitor was not touched
    InvalidSample(InvalidSample),
    /// Indicator rejected the update; the sample was already ingested
    Indicator(IndicatorError),
}

impl From<SensorError> for SessionError {
    fn from(e: SensorError) -> Self {
        SessionError::Sensor(e)
    }
}

impl From<InvalidSample> for SessionError {
    fn from(e: InvalidSample) -> Self {
        SessionError::InvalidSample(e)
    }
}

impl From<IndicatorError> for SessionError {
    fn from(e: IndicatorError) -> Self {
        SessionError::Indicator(e)
    }
}

/// One monitoring session
pub struct BalanceSession<A, I> {
    sensor: A,
    indicator: I,
    monitor: StabilityMonitor,
    sample_interval_ms: u32,
}

impl<A: Accelerometer, I: StatusIndicator> BalanceSession<A, I> {
    /// Start a session with a fresh monitor
    pub fn new(sensor: A, indicator: I, config: &MonitorConfig) -> Result<Self, ConfigError> {
        let monitor = StabilityMonitor::with_config(config)?;

        Ok(Self {
            sensor,
            indicator,
            monitor,
            sample_interval_ms: config.sample_interval_ms,
        })
    }

    /// Read one sample, classify it and push the result to the indicator
    pub fn poll(&mut self) -> Result<Reading, SessionError> {
        let sample = self.sensor.read_sample().map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Accelerometer read failed: {:?}", e);
            SessionError::from(e)
        })?;

        let reading = self.monitor.try_ingest(sample)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{:?} ({}/{} calibration samples)",
            reading.classification,
            self.monitor.samples_collected(),
            self.monitor.calibration_capacity()
        );

        self.indicator.show(&reading).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Indicator update failed: {:?}", e);
            SessionError::from(e)
        })?;

        Ok(reading)
    }

    /// Configured polling interval
    pub fn sample_interval_ms(&self) -> u32 {
        self.sample_interval_ms
    }

    pub fn monitor(&self) -> &StabilityMonitor {
        &self.monitor
    }

    /// End the session and hand back the collaborators
    pub fn into_parts(self) -> (A, I) {
        (self.sensor, self.indicator)
    }
}
