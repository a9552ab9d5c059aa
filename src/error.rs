use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("TextError: {0}")]
    Text(#[from] TextError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Output serialization failed: {message}")]
    Serialization { message: String },
}

/// Failures of the text utilities themselves.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("File not found: {path}")]
    FileNotFound { path: String },
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl TextError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TextError::InvalidInput {
            message: message.into(),
        }
    }

    /// Classify an I/O failure on `path`, mapping `NotFound` to [`TextError::FileNotFound`].
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            TextError::FileNotFound { path }
        } else {
            TextError::Io { path, source }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "notice",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::Medium,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::FileIo { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Text(text_error) => match text_error {
                TextError::InvalidInput { .. } => ErrorSeverity::Low,
                TextError::FileNotFound { .. } => ErrorSeverity::Medium,
                TextError::Io { .. } => ErrorSeverity::High,
            },
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Text(TextError::InvalidInput { message }) => {
                format!("Invalid input: {}", message)
            }
            AppError::Text(TextError::FileNotFound { path }) => {
                format!("File not found: {}", path)
            }
            AppError::Config(ConfigError::UnknownKey { key }) => {
                format!("Unknown configuration key '{}'", key)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Text(TextError::InvalidInput { .. }) => {
                Some("Provide at least one number, e.g. 'textops sum-squares \"1, 2, 3\"'".to_string())
            }
            AppError::Text(TextError::FileNotFound { .. }) => Some(
                "Check the path or pass '--input <PATH>' to 'textops reverse'".to_string(),
            ),
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some("Valid keys are 'input', 'output' and 'trailing'".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the config file, then try again".to_string())
            }
            _ => None,
        }
    }
}
