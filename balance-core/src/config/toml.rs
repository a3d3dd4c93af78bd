//! TOML configuration parsing
//!
//! Reads the optional `[monitor]` table. Missing keys fall back to
//! [`MonitorConfig::default`], and the result is validated before it is
//! returned.
//!
//! ```toml
//! [monitor]
//! calibration_samples = 20
//! tolerance_x = 2.0
//! tolerance_y = 1.0
//! tolerance_z = 2.0
//! sample_interval_ms = 1000
//! ```

use serde::Deserialize;

use super::{ConfigError, MonitorConfig};

/// Top-level document layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    monitor: MonitorConfig,
}

/// Parse a TOML document into a validated [`MonitorConfig`]
pub fn parse_config(input: &str) -> Result<MonitorConfig, ConfigError> {
    let file: ConfigFile = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;

    file.monitor.validate()?;
    Ok(file.monitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Axis;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(parse_config(""), Ok(MonitorConfig::default()));
    }

    #[test]
    fn test_full_section() {
        let input = r#"
            # tighter window for a short session
            [monitor]
            calibration_samples = 10
            tolerance_x = 1.5
            tolerance_y = 0.75
            tolerance_z = 1.5
            sample_interval_ms = 500
        "#;

        let config = parse_config(input).unwrap();
        assert_eq!(config.calibration_samples, 10);
        assert_eq!(config.tolerance_x, 1.5);
        assert_eq!(config.tolerance_y, 0.75);
        assert_eq!(config.tolerance_z, 1.5);
        assert_eq!(config.sample_interval_ms, 500);
    }

    #[test]
    fn test_partial_section() {
        let config = parse_config("[monitor]\ntolerance_y = 0.5\n").unwrap();
        assert_eq!(config.tolerance_y, 0.5);
        assert_eq!(config.tolerance_x, 2.0);
        assert_eq!(config.calibration_samples, 20);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_config("[monitor\n"), Err(ConfigError::Parse));
        assert_eq!(
            parse_config("[monitor]\ncalibration_samples = \"many\"\n"),
            Err(ConfigError::Parse)
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_eq!(
            parse_config("[monitor]\ncalibration_samples = 0\n"),
            Err(ConfigError::InvalidCalibrationSamples)
        );
        assert_eq!(
            parse_config("[monitor]\ntolerance_x = -1.0\n"),
            Err(ConfigError::InvalidTolerance(Axis::X))
        );
    }
}
