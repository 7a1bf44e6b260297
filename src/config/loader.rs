use crate::config::error::ConfigError;
use crate::control::UnitControl;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Initial state of the control
    #[serde(default)]
    pub control: ControlConfig,

    // How transcripts are printed
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlConfig {
    #[serde(default = "default_value")]
    pub default_value: String,

    #[serde(default)]
    pub default_unit: Unit,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            default_value: default_value(),
            default_unit: Unit::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_value() -> String {
    "0".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a control from the configured defaults
    pub fn build_control(&self) -> UnitControl {
        UnitControl::new(&self.control.default_value, self.control.default_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.control.default_value, "0");
        assert_eq!(config.control.default_unit, Unit::Percent);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
            [control]
            default_value = "150"
            default_unit = "pixel"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.control.default_value, "150");
        assert_eq!(config.control.default_unit, Unit::Pixel);
        assert_eq!(config.output.format, OutputFormat::Json);

        let control = config.build_control();
        assert_eq!(control.display_text(), "150");
        assert_eq!(control.unit(), Unit::Pixel);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::load_from_str("[control]\ndefault_unit = \"pixel\"\n").unwrap();
        assert_eq!(config.control.default_value, "0");
        assert_eq!(config.control.default_unit, Unit::Pixel);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::load_from_str("[control]\ndefault_unit = \"em\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("/nonexistent/unitctl.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
