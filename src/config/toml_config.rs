use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_DELIMITER: &str = ",";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySection {
    /// Relative paths given on the command line are resolved against this.
    pub base_path: Option<String>,
    pub default_delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl LibraryConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LibraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LibraryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Option<Regex>> = OnceLock::new();
        let Some(re) = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").ok()) else {
            return content.to_string();
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn default_delimiter(&self) -> &str {
        self.library
            .default_delimiter
            .as_deref()
            .unwrap_or(DEFAULT_DELIMITER)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logging(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    /// Joins relative paths onto `library.base_path` when one is set.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.library.base_path {
            Some(base) if path.is_relative() => Path::new(base).join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Validate for LibraryConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_path) = &self.library.base_path {
            validate_path("library.base_path", base_path)?;
        }
        if let Some(delimiter) = &self.library.default_delimiter {
            validate_non_empty_string("library.default_delimiter", delimiter)?;
            Regex::new(delimiter).map_err(|e| LibraryError::InvalidConfigValueError {
                field: "library.default_delimiter".to_string(),
                value: delimiter.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
