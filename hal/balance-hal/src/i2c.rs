//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by chip-specific HALs.

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given 7-bit address
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given 7-bit address
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// Used to select a register and then read from it.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Wraps an `embedded-hal` 1.0 I2C peripheral as an [`I2cBus`]
#[cfg(feature = "embedded-hal")]
pub struct EmbeddedHalBus<T>(pub T);

#[cfg(feature = "embedded-hal")]
impl<T> EmbeddedHalBus<T> {
    /// Get the wrapped peripheral back
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "embedded-hal")]
impl<T: embedded_hal::i2c::I2c> I2cBus for EmbeddedHalBus<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}
