//! Calibration
//!
//! Collects the initial window of still samples and averages them into
//! the baseline the classifier compares against.

pub mod baseline;
pub mod buffer;

pub use baseline::Baseline;
pub use buffer::{CalibrationBuffer, DEFAULT_CALIBRATION_SAMPLES, MAX_CALIBRATION_SAMPLES};
