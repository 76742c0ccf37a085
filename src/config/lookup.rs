//! Lookup lists (allowed values of enumerated text fields)
//!
//! Lists come from the environment or, when `file` is set, from a YAML
//! settings file of the form:
//!
//! ```yaml
//! lookup:
//!   gender:
//!     - Male
//!     - Female
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ValidationError};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    #[serde(default = "default_genders")]
    pub genders: Vec<String>,

    /// YAML settings file overriding the lists above
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    lookup: LookupSection,
}

#[derive(Debug, Deserialize)]
struct LookupSection {
    #[serde(default)]
    gender: Option<Vec<String>>,
}

impl LookupConfig {
    /// Returns the effective lists, reading `file` when one is configured.
    pub fn resolve(&self) -> Result<LookupConfig, ConfigError> {
        match &self.file {
            Some(path) => {
                let from_file = Self::from_yaml_file(path)?;
                Ok(LookupConfig {
                    file: self.file.clone(),
                    ..from_file
                })
            }
            None => Ok(self.clone()),
        }
    }

    /// Reads lists from a YAML settings file; lists it omits keep their
    /// defaults.
    pub fn from_yaml_file(path: &Path) -> Result<LookupConfig, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::LookupFileUnreadable {
                path: display.clone(),
                source,
            }
        })?;
        let settings: SettingsFile = serde_yaml::from_str(&raw)
            .map_err(|source| ConfigError::LookupFileInvalid { path: display, source })?;

        Ok(LookupConfig {
            genders: settings.lookup.gender.unwrap_or_else(default_genders),
            file: None,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.genders.is_empty() {
            return Err(ValidationError::EmptyLookup("genders"));
        }
        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            genders: default_genders(),
            file: None,
        }
    }
}

fn default_genders() -> Vec<String> {
    vec!["Male".to_string(), "Female".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_male_and_female() {
        let config = LookupConfig::default();
        assert_eq!(config.genders, vec!["Male", "Female"]);
        assert_eq!(config.resolve().unwrap(), config);
    }

    #[test]
    fn reads_genders_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lookup:\n  gender:\n    - Female\n    - Male").unwrap();

        let config = LookupConfig {
            file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.genders, vec!["Female", "Male"]);
    }

    #[test]
    fn missing_list_in_file_keeps_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lookup: {{}}").unwrap();

        let resolved = LookupConfig::from_yaml_file(file.path()).unwrap();

        assert_eq!(resolved.genders, default_genders());
    }

    #[test]
    fn unreadable_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yml");

        let err = LookupConfig::from_yaml_file(&missing).unwrap_err();

        assert!(matches!(err, ConfigError::LookupFileUnreadable { .. }));
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lookup: [unclosed").unwrap();

        let err = LookupConfig::from_yaml_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::LookupFileInvalid { .. }));
    }

    #[test]
    fn empty_gender_list_fails_validation() {
        let config = LookupConfig {
            genders: vec![],
            file: None,
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLookup("genders")));
    }
}
