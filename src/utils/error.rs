use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid regular expression '{pattern}': {source}")]
    RegexError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid number format: {value}")]
    InvalidNumberError { value: String },

    #[error("Array is empty")]
    EmptyInputError,

    #[error("Array is null")]
    MissingArrayError,

    #[error("Missing value: {field}")]
    MissingValueError { field: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LibraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LibraryError::IoError(_) | LibraryError::SerializationError(_) => ErrorCategory::Io,
            LibraryError::RegexError { .. }
            | LibraryError::InvalidNumberError { .. }
            | LibraryError::EmptyInputError
            | LibraryError::MissingArrayError
            | LibraryError::MissingValueError { .. } => ErrorCategory::Input,
            LibraryError::ConfigError { .. }
            | LibraryError::ConfigValidationError { .. }
            | LibraryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LibraryError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorSeverity::Medium
            }
            LibraryError::IoError(_) | LibraryError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LibraryError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "Check that the path and its parent directory exist",
                std::io::ErrorKind::PermissionDenied => "Check the permissions of the target path",
                _ => "Retry the operation or inspect the file system",
            },
            LibraryError::RegexError { .. } => "Fix the regular expression syntax",
            LibraryError::InvalidNumberError { .. } => {
                "Make sure every value between delimiters is a number"
            }
            LibraryError::EmptyInputError => "Provide at least one value",
            LibraryError::MissingArrayError | LibraryError::MissingValueError { .. } => {
                "Set the missing value before calling this operation"
            }
            LibraryError::SerializationError(_) => "Report this as a bug",
            LibraryError::ConfigError { .. }
            | LibraryError::ConfigValidationError { .. }
            | LibraryError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File system problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    pub(crate) fn regex(pattern: &str, source: regex::Error) -> Self {
        LibraryError::RegexError {
            pattern: pattern.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
