use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{failed} of {attempted} renders failed")]
    RenderFailures { failed: usize, attempted: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Configuration,
    Rendering,
}

/// `Medium` errors leave a usable run behind; `High` errors stop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::DirectoryUnavailable { .. } => ErrorCategory::Filesystem,
            RenderError::TomlError(_)
            | RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RenderError::RenderFailures { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RenderError::RenderFailures { .. } => ErrorSeverity::Medium,
            RenderError::DirectoryUnavailable { .. }
            | RenderError::TomlError(_)
            | RenderError::ConfigError { .. }
            | RenderError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error when it ends a run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RenderError::DirectoryUnavailable { path, .. } => format!(
                "Check that '{}' exists, is a directory and is readable",
                path.display()
            ),
            RenderError::TomlError(_) => {
                "Make sure the config file is valid TOML with a [render] table".to_string()
            }
            RenderError::ConfigError { .. } => {
                "Review the command line arguments and config file".to_string()
            }
            RenderError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            RenderError::RenderFailures { .. } => {
                "Check that the renderer is installed and the .dot files are well formed"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RenderError::DirectoryUnavailable { path, source } => {
                format!("Cannot read graph directory '{}': {}", path.display(), source)
            }
            RenderError::RenderFailures { failed, attempted } => {
                format!("{} of {} graphs could not be rendered", failed, attempted)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
