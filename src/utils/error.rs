use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Cannot read input '{}': {source}", .path.display())]
    InputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output '{}': {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Serialization,
}

impl BatchError {
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputError {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputError { .. } => ErrorCategory::Input,
            Self::OutputError { .. } => ErrorCategory::Output,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 1 = I/O 失敗, 2 = 配置或用法錯誤
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input | ErrorCategory::Output | ErrorCategory::Serialization => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputError { path, source } => {
                format!("Unable to read input file {}: {}", path.display(), source)
            }
            Self::OutputError { path, source } => {
                format!("Unable to write output file {}: {}", path.display(), source)
            }
            Self::SerializationError(e) => format!("Failed to serialize run report: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::MissingConfigError { field } => format!("Missing setting: {}", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputError { .. } => "Check that the input file exists and is readable",
            Self::OutputError { .. } => {
                "Check that the output directory exists and is writable"
            }
            Self::SerializationError(_) => "Check the report path and retry",
            Self::ConfigError { .. } => "Check the job file syntax (TOML)",
            Self::MissingConfigError { .. } => {
                "Pass <input> <sink-a> <sink-b> on the command line or set them under [job]"
            }
            Self::InvalidConfigValueError { .. } => {
                "Use three distinct, non-empty paths for the input and both sinks"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_category_and_exit_code() {
        let err = BatchError::input("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let err = BatchError::output("out/a.txt", denied);
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 1);

        let err = BatchError::MissingConfigError {
            field: "job.input".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_display_names_path() {
        let err = BatchError::input("corpus.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("corpus.txt"));
        assert!(err.user_friendly_message().contains("corpus.txt"));
    }
}
