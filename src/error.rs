use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(aikaikkuna::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(aikaikkuna::config))]
    Config(String),

    #[error("Unknown timezone: {0}")]
    #[diagnostic(code(aikaikkuna::unknown_timezone))]
    UnknownTimezone(String),

    #[error("Invalid event time format: {0}")]
    #[diagnostic(code(aikaikkuna::invalid_event_time))]
    InvalidEventTime(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(aikaikkuna::google_calendar))]
    GoogleCalendar(String),

    #[error(transparent)]
    #[diagnostic(code(aikaikkuna::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(aikaikkuna::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(aikaikkuna::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
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

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
