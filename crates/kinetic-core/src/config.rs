use serde::{Deserialize, Serialize};

use crate::css::{is_custom_ident, UnitValue};
use crate::error::{KineticError, KineticResult};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Offset used when a range name is picked and no offset exists yet.
    pub default_range_value: f64,
    pub default_range_unit: String,
    /// Prefix for synthesized view-timeline names.
    pub timeline_prefix: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_range_value: 0.0,
            default_range_unit: "%".to_string(),
            timeline_prefix: "--generated-timeline-".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn default_range_offset(&self) -> UnitValue {
        UnitValue::new(self.default_range_value, self.default_range_unit.clone())
    }

    /// Synthesized timeline names must stay custom identifiers.
    pub fn validate(&self) -> KineticResult<()> {
        if !is_custom_ident(&format!("{}x", self.timeline_prefix)) {
            return Err(KineticError::Config(format!(
                "panel.timeline_prefix '{}' must start with '--' and contain no whitespace or commas",
                self.timeline_prefix
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String, // EnvFilter directive, overridden by RUST_LOG
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct KineticConfig {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl KineticConfig {
    pub fn from_toml_str(contents: &str) -> KineticResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.panel.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &std::path::Path) -> KineticResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> KineticResult<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
