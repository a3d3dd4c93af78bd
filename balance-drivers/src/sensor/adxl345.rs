//! ADXL345 3-axis accelerometer
//!
//! Analog Devices digital accelerometer, used here over I2C in
//! full-resolution mode (constant 3.9 mg/LSB at every range).

use balance_core::traits::{Accelerometer, SensorError};
use balance_core::Sample;
use balance_hal::I2cBus;

/// Default 7-bit address (ALT ADDRESS pin low)
pub const ADXL345_ADDRESS: u8 = 0x53;

/// Expected contents of the DEVID register
pub const DEVICE_ID: u8 = 0xE5;

const REG_DEVID: u8 = 0x00;
const REG_BW_RATE: u8 = 0x2C;
const REG_POWER_CTL: u8 = 0x2D;
const REG_DATA_FORMAT: u8 = 0x31;
const REG_DATAX0: u8 = 0x32;

/// POWER_CTL: measurement mode
const POWER_CTL_MEASURE: u8 = 0x08;
/// DATA_FORMAT: full resolution
const DATA_FORMAT_FULL_RES: u8 = 0x08;

/// Full-resolution scale factor (g per LSB)
const SCALE_G_PER_LSB: f32 = 0.0039;
/// Standard gravity (m/s² per g)
const STANDARD_GRAVITY: f32 = 9.80665;

/// Measurement range (DATA_FORMAT range bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Range {
    G2 = 0b00,
    #[default]
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

/// Output data rate (BW_RATE rate code)
///
/// Low rates narrow the bandwidth, which smooths readings polled at ~1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    Hz1_56 = 0x04,
    Hz3_13 = 0x05,
    #[default]
    Hz6_25 = 0x06,
    Hz12_5 = 0x07,
    Hz25 = 0x08,
    Hz50 = 0x09,
    Hz100 = 0x0A,
}

/// ADXL345 driver on an I2C bus
pub struct Adxl345<I2C> {
    bus: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C: I2cBus> Adxl345<I2C> {
    /// Create a driver; call [`init`](Self::init) before reading
    pub fn new(bus: I2C, address: u8) -> Self {
        Self {
            bus,
            address,
            initialized: false,
        }
    }

    /// Verify the device id and start measuring
    pub fn init(&mut self, range: Range, rate: DataRate) -> Result<(), SensorError> {
        let id = self.read_register(REG_DEVID)?;
        if id != DEVICE_ID {
            #[cfg(feature = "defmt")]
            defmt::error!("ADXL345 not found: DEVID={=u8:#x}", id);
            return Err(SensorError::NotDetected);
        }

        self.write_register(REG_BW_RATE, rate as u8)?;
        self.write_register(REG_DATA_FORMAT, DATA_FORMAT_FULL_RES | range as u8)?;
        self.write_register(REG_POWER_CTL, POWER_CTL_MEASURE)?;

        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("ADXL345 ready: range={}, rate={}", range, rate);

        Ok(())
    }

    /// Read raw counts for X, Y, Z
    pub fn read_raw(&mut self) -> Result<[i16; 3], SensorError> {
        if !self.initialized {
            return Err(SensorError::NotReady);
        }

        let mut buf = [0u8; 6];
        self.bus
            .write_read(self.address, &[REG_DATAX0], &mut buf)
            .map_err(|_| SensorError::Bus)?;

        Ok([
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ])
    }

    /// Convert full-resolution counts to m/s²
    pub fn counts_to_ms2(counts: i16) -> f32 {
        counts as f32 * SCALE_G_PER_LSB * STANDARD_GRAVITY
    }

    /// Check if [`init`](Self::init) has succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.bus
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.bus
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::Bus)
    }
}

impl<I2C: I2cBus> Accelerometer for Adxl345<I2C> {
    fn read_sample(&mut self) -> Result<Sample, SensorError> {
        let [x, y, z] = self.read_raw()?;

        Ok(Sample::new(
            Self::counts_to_ms2(x),
            Self::counts_to_ms2(y),
            Self::counts_to_ms2(z),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory register file standing in for the device
    struct MockBus {
        registers: [u8; 0x40],
        writes: heapless::Vec<(u8, u8), 8>,
        fail: bool,
    }

    impl MockBus {
        fn new() -> Self {
            let mut registers = [0u8; 0x40];
            registers[REG_DEVID as usize] = DEVICE_ID;
            Self {
                registers,
                writes: heapless::Vec::new(),
                fail: false,
            }
        }

        fn set_counts(&mut self, x: i16, y: i16, z: i16) {
            let start = REG_DATAX0 as usize;
            for (i, value) in [x, y, z].into_iter().enumerate() {
                let bytes = value.to_le_bytes();
                self.registers[start + i * 2] = bytes[0];
                self.registers[start + i * 2 + 1] = bytes[1];
            }
        }
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail || address != ADXL345_ADDRESS || data.len() != 2 {
                return Err(());
            }
            self.registers[data[0] as usize] = data[1];
            self.writes.push((data[0], data[1])).map_err(|_| ())
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), ()> {
            Err(())
        }

        fn write_read(&mut self, address: u8, write_data: &[u8], read_buf: &mut [u8]) -> Result<(), ()> {
            if self.fail || address != ADXL345_ADDRESS {
                return Err(());
            }
            let start = write_data[0] as usize;
            read_buf.copy_from_slice(&self.registers[start..start + read_buf.len()]);
            Ok(())
        }
    }

    fn ready_sensor(bus: MockBus) -> Adxl345<MockBus> {
        let mut sensor = Adxl345::new(bus, ADXL345_ADDRESS);
        sensor.init(Range::G4, DataRate::Hz6_25).unwrap();
        sensor
    }

    #[test]
    fn test_init_configures_device() {
        let sensor = ready_sensor(MockBus::new());
        assert!(sensor.is_initialized());

        let bus = sensor.release();
        assert_eq!(
            bus.writes.as_slice(),
            &[
                (REG_BW_RATE, 0x06),
                (REG_DATA_FORMAT, 0x09),
                (REG_POWER_CTL, POWER_CTL_MEASURE),
            ]
        );
    }

    #[test]
    fn test_wrong_device_id() {
        let mut bus = MockBus::new();
        bus.registers[REG_DEVID as usize] = 0x33;

        let mut sensor = Adxl345::new(bus, ADXL345_ADDRESS);
        assert_eq!(
            sensor.init(Range::G2, DataRate::Hz100),
            Err(SensorError::NotDetected)
        );
        assert!(!sensor.is_initialized());
        assert!(sensor.release().writes.is_empty());
    }

    #[test]
    fn test_read_before_init() {
        let mut sensor = Adxl345::new(MockBus::new(), ADXL345_ADDRESS);
        assert_eq!(sensor.read_sample(), Err(SensorError::NotReady));
    }

    #[test]
    fn test_bus_failure() {
        let mut bus = MockBus::new();
        bus.fail = true;
        let mut sensor = Adxl345::new(bus, ADXL345_ADDRESS);
        assert_eq!(
            sensor.init(Range::G4, DataRate::Hz6_25),
            Err(SensorError::Bus)
        );
    }

    #[test]
    fn test_raw_decoding() {
        let mut bus = MockBus::new();
        bus.set_counts(-1, 256, i16::MIN);
        let mut sensor = ready_sensor(bus);

        assert_eq!(sensor.read_raw().unwrap(), [-1, 256, i16::MIN]);
    }

    #[test]
    fn test_sample_in_ms2() {
        let mut bus = MockBus::new();
        // Flat on a table: ~1 g on Z
        bus.set_counts(0, -10, 256);
        let mut sensor = ready_sensor(bus);

        let sample = sensor.read_sample().unwrap();
        assert_eq!(sample.x, 0.0);
        assert!(sample.y < 0.0);

        let expected_z = 256.0 * 0.0039 * 9.80665;
        let dz = sample.z - expected_z;
        assert!(dz < 1e-4 && dz > -1e-4);
        assert!(sample.z > 9.7 && sample.z < 9.9);
    }
}
