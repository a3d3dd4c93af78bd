//! Collaborator traits
//!
//! These traits define the interface between the monitor and the
//! hardware-specific code that feeds it samples and shows its results.

pub mod accelerometer;
pub mod indicator;

pub use accelerometer::{Accelerometer, SensorError};
pub use indicator::{IndicatorError, StatusIndicator};
