use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FeedError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        FeedError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Config key the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            FeedError::IoError(_) => None,
            FeedError::ConfigError { field, .. }
            | FeedError::InvalidConfigValueError { field, .. } => Some(field),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
