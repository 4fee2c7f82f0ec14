//! File-based rule source.
//!
//! Rule sets are stored as JSON or YAML documents:
//! ```yaml
//! rules:
//!   - kind: fizz_buzz
//!   - kind: fizz
//!   - kind: buzz
//!   - kind: divisible
//!     divisor: 7
//!     label: Bazz
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use fizzbuzz_application::ports::{RuleSource, RuleSourceError};
use fizzbuzz_domain::RuleSet;

/// Supported rule document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// JSON document (`.json`).
    Json,
    /// YAML document (`.yaml` or `.yml`).
    Yaml,
}

impl RuleFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    /// Returns [`RuleSourceError::UnsupportedFormat`] for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, RuleSourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(RuleSourceError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parses a rule document.
///
/// # Errors
/// Returns [`RuleSourceError::Parse`] if the document is malformed or a
/// rule fails validation.
pub fn parse_rule_set(content: &str, format: RuleFormat) -> Result<RuleSet, RuleSourceError> {
    match format {
        RuleFormat::Json => {
            serde_json::from_str(content).map_err(|e| RuleSourceError::Parse(e.to_string()))
        }
        RuleFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| RuleSourceError::Parse(e.to_string()))
        }
    }
}

/// Rule source backed by a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    /// Creates a rule source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for FileRuleSource {
    fn load(&self) -> Result<RuleSet, RuleSourceError> {
        let format = RuleFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)?;
        let rules = parse_rule_set(&content, format)?;

        tracing::debug!(
            path = %self.path.display(),
            %format,
            rules = rules.len(),
            "loaded rule file"
        );
        Ok(rules)
    }
}
