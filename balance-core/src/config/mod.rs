//! Configuration types
//!
//! Construction-time settings for the monitor. With the `toml` feature the
//! same structure can be parsed from a TOML document.

#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

#[cfg(feature = "toml")]
pub use self::toml::parse_config;
pub use types::*;
