//! Board-agnostic core logic for the balance monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sample and deviation types
//! - Calibration buffer and baseline averaging
//! - Stability monitor (calibration state machine + threshold classifier)
//! - Configuration type definitions
//! - Sensor and indicator traits, and the session that wires them together

#![no_std]
#![deny(unsafe_code)]

pub mod calibration;
pub mod config;
pub mod sample;
pub mod session;
pub mod stability;
pub mod traits;

pub use sample::{Axis, Deviation, Sample};
pub use stability::{
    Classification, InvalidSample, MonitorState, Reading, StabilityMonitor, Thresholds,
};
