//! # Configuration
//!
//! Optional YAML file given with `--config`. Every field has a default, so
//! an empty file (or none at all) is valid. Command-line flags override the
//! file.
//!
//! ```yaml
//! tolerance: 1.0e-6
//! exact: false
//! format: json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use esc_core::{Comparison, Tolerance};

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Failure lines on stderr, one summary line per criterion on stdout.
    #[default]
    Text,
    /// Condition sets as pretty-printed JSON on stdout.
    Json,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscConfig {
    /// Equality tolerance for tolerant comparison.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Use exact IEEE equality instead of the tolerance.
    #[serde(default)]
    pub exact: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_tolerance() -> f64 {
    Tolerance::DEFAULT.value()
}

impl Default for EscConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            exact: false,
            format: OutputFormat::default(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub tolerance: Option<f64>,
    pub exact: bool,
    pub format: Option<OutputFormat>,
}

impl EscConfig {
    /// Read a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `path` if given, then apply `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if let Some(tolerance) = overrides.tolerance {
            config.tolerance = tolerance;
            config.exact = false;
        }
        if overrides.exact {
            config.exact = true;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// The comparison mode this configuration selects.
    pub fn comparison(&self) -> Result<Comparison> {
        if self.exact {
            return Ok(Comparison::Exact);
        }
        Comparison::tolerant(self.tolerance)
            .with_context(|| format!("invalid tolerance {}", self.tolerance))
    }
}
