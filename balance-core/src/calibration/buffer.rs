//! Fixed-capacity calibration buffer

use heapless::Vec;

use super::Baseline;
use crate::sample::Sample;

/// Upper bound on the calibration window (storage is statically sized)
pub const MAX_CALIBRATION_SAMPLES: usize = 64;

/// Default number of samples averaged into the baseline
pub const DEFAULT_CALIBRATION_SAMPLES: usize = 20;

/// Ordered store of samples collected while calibrating
///
/// Samples are kept in arrival order. Once `len() == capacity()` the
/// buffer is frozen: further pushes are refused and nothing is written.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationBuffer {
    samples: Vec<Sample, MAX_CALIBRATION_SAMPLES>,
    capacity: usize,
}

impl Default for CalibrationBuffer {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            capacity: DEFAULT_CALIBRATION_SAMPLES,
        }
    }
}

impl CalibrationBuffer {
    /// Create a buffer holding `capacity` samples
    ///
    /// Returns `None` if `capacity` is zero or above [`MAX_CALIBRATION_SAMPLES`].
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        if capacity == 0 || capacity > MAX_CALIBRATION_SAMPLES {
            return None;
        }

        Some(Self {
            samples: Vec::new(),
            capacity,
        })
    }

    /// Append a sample
    ///
    /// Returns the sample back as `Err` if the buffer is already full.
    pub fn push(&mut self, sample: Sample) -> Result<(), Sample> {
        if self.is_full() {
            return Err(sample);
        }
        self.samples.push(sample)
    }

    /// Number of samples collected so far
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples have been collected
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Configured window size
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the window is complete
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Collected samples in arrival order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Baseline over the full window
    ///
    /// Returns `None` until the buffer is full.
    pub fn baseline(&self) -> Option<Baseline> {
        if !self.is_full() {
            return None;
        }
        Baseline::from_samples(&self.samples)
    }
}
