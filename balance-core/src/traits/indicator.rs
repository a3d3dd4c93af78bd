//! Status indicator trait

use crate::stability::Reading;

/// Errors that can occur while presenting a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Output device is not available (detached, powered down)
    Unavailable,
    /// Output device cannot accept an update right now
    Busy,
}

/// Trait for whatever presents the monitor's output
///
/// The core never formats text or picks colours; an implementation gets
/// the full [`Reading`] and decides how to show it.
pub trait StatusIndicator {
    /// Present the latest reading
    fn show(&mut self, reading: &Reading) -> Result<(), IndicatorError>;
}
