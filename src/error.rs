//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Model provider communication errors (network, HTTP status)
    #[error("API error: {message}")]
    Api { message: String },

    /// Model output that does not match the expected response shape
    #[error("Unexpected response from the suggestion service: {message}")]
    Schema { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// True for failures of the outbound model call itself, as opposed to bad input
    #[must_use]
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Schema { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TripPlannerError::Api { message } => {
                format!("Unable to reach the suggestion service: {message}")
            }
            TripPlannerError::Schema { .. } => {
                "Received unexpected data from the suggestion service. Please try again."
                    .to_string()
            }
            TripPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripPlannerError::General { message } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for TripPlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::schema(err.to_string())
    }
}
