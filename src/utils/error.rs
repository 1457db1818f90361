use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Store rejected request with status {status}: {body}")]
    StoreError { status: u16, body: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl RosterError {
    pub fn config(message: impl Into<String>) -> Self {
        RosterError::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        RosterError::ValidationError {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        RosterError::AuthError {
            message: message.into(),
        }
    }

    /// Validation failures map to 400 at the HTTP surface; everything else is a 500.
    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::ValidationError { .. })
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
