//! Accelerometer drivers

pub mod adxl345;

pub use adxl345::{Adxl345, DataRate, Range, ADXL345_ADDRESS};
