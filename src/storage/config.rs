use super::Result;
use crate::core::lines::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::core::numbers::TrailingTokenPolicy;
use crate::error::{AppError, ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub trailing_token: TrailingTokenPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            trailing_token: TrailingTokenPolicy::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("{}: {}", config_path.display(), e),
            })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigSaveFailed {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Default location, `<config dir>/textops/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("textops").join(CONFIG_FILE_NAME))
    }

    /// Set a field by its user-facing key: `input`, `output` or `trailing`
    pub fn set_field(&mut self, key: &str, value: &str) -> std::result::Result<(), AppError> {
        match key {
            "input" => self.input_path = PathBuf::from(value),
            "output" => self.output_path = PathBuf::from(value),
            "trailing" => {
                self.trailing_token =
                    value
                        .parse()
                        .map_err(|reason| ConfigError::InvalidValue {
                            field: key.to_string(),
                            value: value.to_string(),
                            reason,
                        })?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input_path.display().to_string()),
            ("output", self.output_path.display().to_string()),
            ("trailing", self.trailing_token.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
        assert_eq!(config.trailing_token, TrailingTokenPolicy::Flush);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_field("input", "in/data.txt").expect("set input");
        config.set_field("trailing", "drop").expect("set trailing");

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
        assert_eq!(loaded_config.trailing_token, TrailingTokenPolicy::Drop);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Missing file should yield defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "trailing_token = \"drop\"\n").expect("write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.trailing_token, TrailingTokenPolicy::Drop);
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "trailing_token = [").expect("write config");

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(matches!(err, StorageError::ConfigParseError { .. }));
    }

    #[test]
    fn test_set_field_rejects_unknown_keys_and_values() {
        let mut config = Config::default();

        let result = config.set_field("input_path", "x.txt");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));

        let result = config.set_field("trailing", "sometimes");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_entries_order() {
        let keys: Vec<_> = Config::default().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["input", "output", "trailing"]);
    }
}
