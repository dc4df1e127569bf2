use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "coalesce.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the `coalesce` binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// How merged intervals are printed.
    pub format: OutputFormat,
    /// Whether status marks are colorized.
    pub color: bool,
    /// Whether text output ends with an input/output count line.
    pub summary: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            summary: true,
        }
    }
}

impl CliConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Resolve the config: an explicit path must exist, the default file is
    /// optional.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::discover_in(Path::new("."), explicit)
    }

    /// Like [`CliConfig::discover`], looking for the default file in `dir`.
    pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!("using config {}", fallback.display());
            return Self::load(&fallback);
        }
        Ok(Self::default())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("cannot render config")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(c.color);
        assert!(c.summary);
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"").unwrap();
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert!(c.color);
        assert!(c.summary);
    }

    #[test]
    fn load_rejects_unknown_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"yaml\"").unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(CliConfig::discover(Some(&missing)).is_err());
    }

    #[test]
    fn discover_picks_up_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "summary = false\n").unwrap();
        let c = CliConfig::discover_in(dir.path(), None).unwrap();
        assert!(!c.summary);
        assert_eq!(c.format, OutputFormat::Text);
    }

    #[test]
    fn discover_without_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CliConfig::discover_in(dir.path(), None).unwrap(), CliConfig::default());
    }

    #[test]
    fn explicit_path_wins_over_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "format = \"json\"\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "color = false\n").unwrap();
        let c = CliConfig::discover_in(dir.path(), Some(&explicit)).unwrap();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(!c.color);
    }

    #[test]
    fn toml_roundtrip() {
        let c = CliConfig {
            format: OutputFormat::Json,
            color: false,
            summary: false,
        };
        let rendered = c.to_toml().unwrap();
        assert!(rendered.contains("format = \"json\""));
        let parsed: CliConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, c);
    }
}
