//! Table configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Environment variable overriding the cell padding.
pub const PADDING_ENV: &str = "BOXTABLE_PADDING";

/// Environment variable overriding the line ending.
pub const LINE_ENDING_ENV: &str = "BOXTABLE_LINE_ENDING";

/// Line terminator appended to every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else (default)
    #[default]
    Platform,
    /// Always `\n`
    Lf,
    /// Always `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the terminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" => Ok(LineEnding::Platform),
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            other => Err(TableError::Config(format!(
                "unknown line ending '{other}' (expected lf, crlf or platform)"
            ))),
        }
    }
}

/// Configuration for a [`TableRenderer`](crate::TableRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Spaces placed before and after every cell's text.
    #[serde(default = "default_padding")]
    pub padding: usize,

    /// Terminator written after every line.
    #[serde(default)]
    pub line_ending: LineEnding,
}

fn default_padding() -> usize {
    1
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            line_ending: LineEnding::default(),
        }
    }
}

/// Keys set in a configuration file. Absent keys leave lower layers intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub padding: Option<usize>,
    pub line_ending: Option<LineEnding>,
}

impl ConfigFile {
    /// Read the keys of a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse the keys of a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TableError::Config(e.to_string()))
    }
}

impl TableConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TableError::Config(e.to_string()))
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `BOXTABLE_*` overrides obtained through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(padding) = lookup(PADDING_ENV) {
            self.padding = padding.trim().parse().map_err(|_| {
                TableError::Config(format!(
                    "{PADDING_ENV} must be a non-negative integer, got '{padding}'"
                ))
            })?;
        }

        if let Some(line_ending) = lookup(LINE_ENDING_ENV) {
            self.line_ending = line_ending.parse()?;
        }

        Ok(self)
    }

    /// Overrides only the keys `file` sets.
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        if let Some(padding) = file.padding {
            self.padding = padding;
        }
        if let Some(line_ending) = file.line_ending {
            self.line_ending = line_ending;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.padding, 1);
        assert_eq!(config.line_ending, LineEnding::Platform);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = TableConfig::parse("padding = 3\n").unwrap();
        assert_eq!(config.padding, 3);
        assert_eq!(config.line_ending, LineEnding::Platform);

        let config = TableConfig::parse("line_ending = \"crlf\"\n").unwrap();
        assert_eq!(config.padding, 1);
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_parse_rejects_negative_padding() {
        let err = TableConfig::parse("padding = -1\n").unwrap_err();
        assert!(matches!(err, TableError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "padding = 0").unwrap();
        writeln!(file, "line_ending = \"lf\"").unwrap();

        let config = TableConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            TableConfig {
                padding: 0,
                line_ending: LineEnding::Lf,
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_env_overrides() {
        let config = TableConfig::default()
            .with_overrides(|key| match key {
                PADDING_ENV => Some(" 2 ".to_string()),
                LINE_ENDING_ENV => Some("CRLF".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.padding, 2);
        assert_eq!(config.line_ending, LineEnding::CrLf);

        let untouched = TableConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(untouched, TableConfig::default());
    }

    #[test]
    fn test_env_overrides_invalid() {
        let err = TableConfig::default()
            .with_overrides(|key| (key == PADDING_ENV).then(|| "wide".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(PADDING_ENV));

        let err = TableConfig::default()
            .with_overrides(|key| (key == LINE_ENDING_ENV).then(|| "cr".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown line ending"));
    }

    #[test]
    fn test_file_layers_over_env() {
        let env = TableConfig::default()
            .with_overrides(|key| (key == LINE_ENDING_ENV).then(|| "crlf".to_string()))
            .unwrap();
        let file = ConfigFile::parse("padding = 2\n").unwrap();
        assert_eq!(file.line_ending, None);

        let config = env.with_file(&file);
        assert_eq!(config.padding, 2);
        assert_eq!(config.line_ending, LineEnding::CrLf);

        let file = ConfigFile::parse("line_ending = \"lf\"\n").unwrap();
        assert_eq!(config.with_file(&file).line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(TableConfig::default().with_file(&file), TableConfig::default());
    }

    #[test]
    fn test_line_ending_strings() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        if cfg!(windows) {
            assert_eq!(LineEnding::Platform.as_str(), "\r\n");
        } else {
            assert_eq!(LineEnding::Platform.as_str(), "\n");
        }
    }
}
