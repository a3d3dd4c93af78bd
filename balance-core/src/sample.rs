//! Accelerometer samples
//!
//! A [`Sample`] is one instantaneous 3-axis reading in m/s². A
//! [`Deviation`] has the same shape but holds absolute distances from
//! the calibrated baseline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spatial axis of the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in the order the classifier checks them
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// One 3-axis accelerometer reading (m/s²)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Sample {
    /// Create a new sample
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All-zero sample
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Get the reading for one axis
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// First axis (in X, Y, Z order) holding NaN or infinity
    pub fn first_non_finite(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|&axis| !self.get(axis).is_finite())
    }

    /// Per-axis absolute difference to another sample
    pub fn abs_diff(&self, other: &Sample) -> Deviation {
        Deviation {
            x: abs(self.x - other.x),
            y: abs(self.y - other.y),
            z: abs(self.z - other.z),
        }
    }
}

/// Per-axis absolute distance between a sample and the baseline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deviation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Deviation {
    /// Get the deviation for one axis
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

// Inherent `f32::abs` is only reachable from `core` on Rust 1.85+; keeps
// older no_std toolchains building.
fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}
