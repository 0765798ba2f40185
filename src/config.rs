use crate::convert::{CamelVariant, CaseStyle};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".identcase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub camel_variant: CamelVariant,

    /// Style printed by the demo binary when none is requested; all styles if unset
    #[serde(default)]
    pub default_style: Option<CaseStyle>,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camel_variant: CamelVariant::default(),
            default_style: None,
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("Loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("Loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::from_file(path)?);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid identcase configuration")
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        if other.camel_variant != CamelVariant::default() {
            self.camel_variant = other.camel_variant;
        }
        if other.default_style.is_some() {
            self.default_style = other.default_style;
        }
        if other.color != default_color() {
            self.color = other.color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.camel_variant, CamelVariant::Decompose);
        assert_eq!(config.default_style, None);
        assert!(config.color);
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_toml_str(
            r#"
camel_variant = "separators"
default_style = "kebab"
color = false
"#,
        )
        .unwrap();
        assert_eq!(config.camel_variant, CamelVariant::Separators);
        assert_eq!(config.default_style, Some(CaseStyle::Kebab));
        assert!(!config.color);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_variant_is_rejected() {
        assert!(Config::from_toml_str(r#"camel_variant = "snake""#).is_err());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            default_style: Some(CaseStyle::Dot),
            ..Default::default()
        };
        let override_config = Config {
            camel_variant: CamelVariant::Separators,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.camel_variant, CamelVariant::Separators);
        assert_eq!(merged.default_style, Some(CaseStyle::Dot));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_style = \"camel\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.default_style, Some(CaseStyle::Camel));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::from_file(Path::new("/nonexistent/identcase.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/identcase.toml"));
    }
}
