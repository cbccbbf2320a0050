use thiserror::Error;

/// Result type for classforge-java operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is empty or malformed.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The template text does not contain a required placeholder token.
    #[error("template is missing placeholder '{token}'")]
    MissingPlaceholder { token: &'static str },
}

impl Error {
    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
