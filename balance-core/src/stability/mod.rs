//! Stability monitoring
//!
//! Turns a stream of samples into one classification per sample: still
//! calibrating, balanced, or unbalanced on a specific axis.

pub mod classification;
pub mod monitor;
pub mod thresholds;

pub use classification::{classify, Classification};
pub use monitor::{InvalidSample, MonitorState, Reading, StabilityMonitor};
pub use thresholds::{Thresholds, DEFAULT_MOVE_ALLOWED};
