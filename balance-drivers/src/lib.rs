//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in balance-core:
//!
//! - Accelerometers (ADXL345 over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
