//! Calibration baseline

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sample::{Axis, Deviation, Sample};

/// Per-axis mean of the calibration window
///
/// Computed once when calibration completes and never changed after.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Baseline {
    mean_x: f32,
    mean_y: f32,
    mean_z: f32,
}

impl Baseline {
    /// Create a baseline from known means
    pub const fn new(mean_x: f32, mean_y: f32, mean_z: f32) -> Self {
        Self {
            mean_x,
            mean_y,
            mean_z,
        }
    }

    /// Arithmetic mean of each axis
    ///
    /// Sums in slice order, then divides by the sample count.
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let (mut sum_x, mut sum_y, mut sum_z) = (0.0f32, 0.0f32, 0.0f32);
        for sample in samples {
            sum_x += sample.x;
            sum_y += sample.y;
            sum_z += sample.z;
        }

        let count = samples.len() as f32;
        Some(Self::new(sum_x / count, sum_y / count, sum_z / count))
    }

    pub fn mean_x(&self) -> f32 {
        self.mean_x
    }

    pub fn mean_y(&self) -> f32 {
        self.mean_y
    }

    pub fn mean_z(&self) -> f32 {
        self.mean_z
    }

    /// Mean for one axis
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.mean_x,
            Axis::Y => self.mean_y,
            Axis::Z => self.mean_z,
        }
    }

    /// The baseline as a sample (the "still" position)
    pub fn as_sample(&self) -> Sample {
        Sample::new(self.mean_x, self.mean_y, self.mean_z)
    }

    /// Absolute distance of a sample from this baseline
    pub fn deviation(&self, sample: &Sample) -> Deviation {
        sample.abs_diff(&self.as_sample())
    }
}
