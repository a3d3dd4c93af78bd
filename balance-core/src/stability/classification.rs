//! Per-sample classification

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Thresholds;
use crate::sample::{Axis, Deviation};

/// Outcome of ingesting one sample
///
/// Exactly one value per sample; there is no combined
/// "several axes unbalanced" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    /// Baseline not established yet
    Calibrating,
    /// Every axis within tolerance
    Balanced,
    UnbalancedX,
    UnbalancedY,
    UnbalancedZ,
}

impl Classification {
    /// Unbalanced classification for an axis
    pub const fn unbalanced(axis: Axis) -> Self {
        match axis {
            Axis::X => Classification::UnbalancedX,
            Axis::Y => Classification::UnbalancedY,
            Axis::Z => Classification::UnbalancedZ,
        }
    }

    /// Axis that failed its check, if any
    pub fn unbalanced_axis(&self) -> Option<Axis> {
        match self {
            Classification::UnbalancedX => Some(Axis::X),
            Classification::UnbalancedY => Some(Axis::Y),
            Classification::UnbalancedZ => Some(Axis::Z),
            Classification::Calibrating | Classification::Balanced => None,
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, Classification::Balanced)
    }

    pub fn is_calibrating(&self) -> bool {
        matches!(self, Classification::Calibrating)
    }
}

/// Classify a deviation against the thresholds
///
/// Axes are checked in X, Y, Z order and the first one strictly above its
/// tolerance wins. A deviation equal to the tolerance is still balanced.
pub fn classify(deviation: &Deviation, thresholds: &Thresholds) -> Classification {
    for axis in Axis::ALL {
        if deviation.get(axis) > thresholds.applied(axis) {
            return Classification::unbalanced(axis);
        }
    }

    Classification::Balanced
}
