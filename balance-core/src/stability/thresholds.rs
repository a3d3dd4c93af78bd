//! Per-axis tolerances

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sample::Axis;

/// Default allowed movement on the X and Z axes (m/s²)
pub const DEFAULT_MOVE_ALLOWED: f32 = 2.0;

/// Maximum permitted deviation per axis before it counts as unbalanced
///
/// The Y axis is held to half the X tolerance by default. The Z check
/// uses `tolerance_x`; `tolerance_z` is carried so callers can read and
/// configure it, but the classifier does not consult it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thresholds {
    pub tolerance_x: f32,
    pub tolerance_y: f32,
    pub tolerance_z: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from_move_allowed(DEFAULT_MOVE_ALLOWED)
    }
}

impl Thresholds {
    /// Create thresholds with explicit per-axis values
    pub const fn new(tolerance_x: f32, tolerance_y: f32, tolerance_z: f32) -> Self {
        Self {
            tolerance_x,
            tolerance_y,
            tolerance_z,
        }
    }

    /// Derive thresholds from a single allowed movement: `(m, m / 2, m)`
    pub fn from_move_allowed(move_allowed: f32) -> Self {
        Self::new(move_allowed, move_allowed / 2.0, move_allowed)
    }

    /// Tolerance the classifier compares against for `axis`
    pub fn applied(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.tolerance_x,
            Axis::Y => self.tolerance_y,
            Axis::Z => self.tolerance_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.tolerance_x, 2.0);
        assert_eq!(t.tolerance_y, 1.0);
        assert_eq!(t.tolerance_z, 2.0);
    }

    #[test]
    fn test_z_uses_x_tolerance() {
        let t = Thresholds::new(3.0, 1.0, 0.5);
        assert_eq!(t.applied(Axis::Z), 3.0);
        assert_eq!(t.tolerance_z, 0.5);
    }

    #[test]
    fn test_from_move_allowed() {
        let t = Thresholds::from_move_allowed(4.0);
        assert_eq!(t, Thresholds::new(4.0, 2.0, 4.0));
    }
}
