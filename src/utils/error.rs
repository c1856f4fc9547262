use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid widget state ({field}): {reason}")]
    InvalidWidgetState { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依錯誤嚴重程度決定 CLI 退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl WidgetError {
    pub fn invalid_widget(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidWidgetState {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidWidgetState { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::Medium,
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidWidgetState { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Retry with --format text".to_string(),
            Self::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add '{}' to the config file", field)
            }
            Self::InvalidWidgetState { field, .. } => {
                format!("Provide a valid '{}' for the widget", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not render report: {}", e),
            Self::ConfigParseError { message } => format!("Config file is malformed: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Config field '{}' is required", field),
            Self::InvalidWidgetState { field, reason } => {
                format!("Widget cannot be built, '{}' {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
