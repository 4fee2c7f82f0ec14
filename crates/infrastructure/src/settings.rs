//! Environment-based settings.

use std::path::PathBuf;

/// Environment variable holding the default upper bound.
pub const ENV_MAX: &str = "FIZZBUZZ_MAX";

/// Environment variable holding the default rule file path.
pub const ENV_RULES: &str = "FIZZBUZZ_RULES";

/// Errors that can occur while reading settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable is set but cannot be parsed.
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value found.
        value: String,
    },
}

/// Defaults taken from the environment. Command-line flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Upper bound from `FIZZBUZZ_MAX`.
    pub max_number: Option<i64>,
    /// Rule file from `FIZZBUZZ_RULES`.
    pub rules_path: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let max_number = read(ENV_MAX)
            .map(|value| {
                value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| SettingsError::InvalidValue {
                        key: ENV_MAX,
                        value,
                    })
            })
            .transpose()?;

        let rules_path = read(ENV_RULES).map(PathBuf::from);

        tracing::trace!(?max_number, ?rules_path, "settings read from environment");
        Ok(Self {
            max_number,
            rules_path,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_reads_values() {
        let settings =
            Settings::from_lookup(lookup(&[(ENV_MAX, " 30 "), (ENV_RULES, "rules.yaml")]))
                .unwrap();
        assert_eq!(settings.max_number, Some(30));
        assert_eq!(settings.rules_path, Some(PathBuf::from("rules.yaml")));
    }

    #[test]
    fn test_negative_max_is_passed_through() {
        let settings = Settings::from_lookup(lookup(&[(ENV_MAX, "-3")])).unwrap();
        assert_eq!(settings.max_number, Some(-3));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = Settings::from_lookup(lookup(&[(ENV_MAX, ""), (ENV_RULES, "  ")])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_rejects_garbage() {
        let result = Settings::from_lookup(lookup(&[(ENV_MAX, "lots")]));
        assert_eq!(
            result,
            Err(SettingsError::InvalidValue {
                key: ENV_MAX,
                value: "lots".to_string()
            })
        );
    }
}
