//! Parsing and validation for mojicount.toml configuration files

use crate::error::ConfigError;
use crate::rules::RuleToggles;
use crate::status::{ConfigSource, LabelStyle};
use crate::types::{GlobPattern, RuleName};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mojicount.toml";

/// Main configuration struct for mojicount.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metadata and document selection
    pub mojicount: MojicountMeta,

    /// Per-rule "disabled" flags
    #[serde(default)]
    pub disabled: RuleToggles,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mojicount: MojicountMeta {
                version: "1".to_string(),
                include: default_include(),
                exclude: Vec::new(),
            },
            disabled: RuleToggles::new(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        debug!(
            path = %path.display(),
            disabled = ?config.disabled.disabled().collect::<Vec<_>>(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Marks additional rules as disabled, on top of what the file says
    pub fn disable_rules(&mut self, names: &[RuleName]) {
        for &name in names {
            self.disabled.set_disabled(name, true);
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.mojicount.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.mojicount.version
            )));
        }

        // Validate glob patterns by attempting to compile them with globset
        for (kind, patterns) in [
            ("include", &self.mojicount.include),
            ("exclude", &self.mojicount.exclude),
        ] {
            for pattern in patterns {
                globset::Glob::new(pattern.as_str()).map_err(|e| {
                    ConfigError::Validation(format!(
                        "Invalid {} glob pattern '{}': {}",
                        kind,
                        pattern.as_str(),
                        e
                    ))
                })?;
            }
        }

        if self.output.unit.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.unit must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl ConfigSource for Config {
    fn disabled_rules(&self) -> RuleToggles {
        self.disabled.clone()
    }
}

/// `[mojicount]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MojicountMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// File patterns to include
    #[serde(default = "default_include")]
    pub include: Vec<GlobPattern>,

    /// File patterns to exclude
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,
}

fn default_include() -> Vec<GlobPattern> {
    vec![GlobPattern::new("**/*")]
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,

    /// Icon shown before the count in status labels
    #[serde(default = "default_icon")]
    pub icon: Option<String>,

    /// Unit label shown after the count
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_icon() -> Option<String> {
    Some("$(pencil)".to_string())
}

fn default_unit() -> String {
    "文字".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorOption::Auto,
            icon: default_icon(),
            unit: default_unit(),
        }
    }
}

impl OutputConfig {
    /// Label style used for status lines
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle::new(self.icon.clone().filter(|icon| !icon.is_empty()), self.unit.clone())
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
