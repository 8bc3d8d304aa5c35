use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(ohack::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(ohack::config))]
    Config(String),

    #[error("Volunteer API error: {0}")]
    #[diagnostic(code(ohack::api))]
    Api(String),

    #[error("HTTP error: {0}")]
    #[diagnostic(code(ohack::http))]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    #[diagnostic(code(ohack::url))]
    Url(#[from] url::ParseError),

    #[error("Availability error: {0}")]
    #[diagnostic(code(ohack::availability))]
    Availability(String),

    #[error(transparent)]
    #[diagnostic(code(ohack::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(ohack::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(ohack::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create volunteer API errors
pub fn api_error(message: &str) -> Error {
    Error::Api(message.to_string())
}

/// Helper to create availability parsing errors
pub fn availability_error(message: &str) -> Error {
    Error::Availability(message.to_string())
}
