use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid class prefix {prefix:?}: only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidClassPrefix { prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for the style classes in rendered output.
    pub class_prefix: String,
    /// Wrap each source line in a numbered line marker.
    pub line_numbers: bool,
    /// Emit a complete HTML document instead of a fragment.
    pub standalone: bool,
    /// CSS file embedded in standalone documents instead of the default styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: "bm-".to_string(),
            line_numbers: false,
            standalone: false,
            stylesheet: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        // Expand shell variables and tilde in the stylesheet path
        config.stylesheet = config
            .stylesheet
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Checks the class prefix can be used verbatim in CSS selectors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self
            .class_prefix
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidClassPrefix {
                prefix: self.class_prefix.clone(),
            })
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/blockmark/config.toml"));
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.class_prefix, "bm-");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str("line_numbers = true\n").unwrap();
        assert!(config.line_numbers);
        assert!(!config.standalone);
        assert_eq!(config.class_prefix, "bm-");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            class_prefix: "hl_".to_string(),
            line_numbers: true,
            standalone: true,
            stylesheet: Some(PathBuf::from("/tmp/theme.css")),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_validate_rejects_markup_in_prefix() {
        let config = Config {
            class_prefix: "x\"><b".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClassPrefix { .. }));
        assert!(err.to_string().contains("Invalid class prefix"));
    }

    #[test]
    fn test_validate_accepts_empty_prefix() {
        let config = Config {
            class_prefix: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/themes/dark.css");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("themes/dark.css"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/theme.css");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            line_numbers: true,
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_load_rejects_invalid_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "class_prefix = \"a b\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClassPrefix { .. }));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "line_numbers = \"yes\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_stylesheet_with_env_var_in_toml() {
        unsafe {
            env::set_var("BLOCKMARK_THEMES", "/custom/themes");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "stylesheet = \"$BLOCKMARK_THEMES/light.css\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.stylesheet,
            Some(PathBuf::from("/custom/themes/light.css"))
        );

        unsafe {
            env::remove_var("BLOCKMARK_THEMES");
        }
    }
}
