//! Balance Hardware Abstraction Layer
//!
//! This crate defines the bus traits sensor drivers are written against,
//! so the same driver runs on any board that implements them.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  balance-core (monitor, session)        │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │ Accelerometer
//! ┌─────────────────────────────────────────┐
//! │  balance-drivers (ADXL345, ...)         │
//! └─────────────────────────────────────────┘
//!                     │ I2cBus
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  balance-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::I2cBus;
#[cfg(feature = "embedded-hal")]
pub use i2c::EmbeddedHalBus;
