//! Accelerometer trait

use crate::sample::Sample;

/// Errors that can occur while reading an accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed
    Bus,
    /// Device did not identify as the expected part
    NotDetected,
    /// Device has not been initialized
    NotReady,
    /// Raw data could not be converted
    ConversionError,
}

/// Trait for 3-axis accelerometers
///
/// Implementations handle the specific part (ADXL345, LIS3DH, a phone
/// sensor bridge, etc.) and return readings in m/s².
pub trait Accelerometer {
    /// Read one sample
    ///
    /// Takes `&mut self` because bus reads require mutable access.
    /// Every call consumes a reading; there is no side-effect-free check.
    fn read_sample(&mut self) -> Result<Sample, SensorError>;
}
