//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.
//!
//! Every variant collapses onto one [`ErrorClass`], which is all a caller of the
//! resolution pipeline (CLI or HTTP) ever needs to branch on.

use crate::models::SourceId;
use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Missing or empty input, rejected before any network call.
    #[error("Validation Error: {0}")]
    Validation(String),

    /// Geocoding produced no usable candidate, or the geocoder itself failed.
    #[error("Location not found: '{0}'")]
    LocationNotFound(String),

    /// An air quality source could not deliver a reading.
    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable { provider: SourceId, reason: String },

    /// Any other failure while producing a report, such as an aborted lookup task.
    #[error("Unexpected Error: {0}")]
    Unexpected(String),

    /// Error originating from an upstream HTTP client call (`reqwest`).
    #[error("API Error: {0}")]
    Api(Arc<reqwest::Error>),

    /// Error during JSON parsing (`serde_json`). Wrapped in Arc as serde_json::Error is not Clone.
    #[error("JSON Parsing Error: {0}")]
    JsonParse(Arc<serde_json::Error>),

    /// Error related to accessing environment variables.
    #[error("Environment Error: {0}")]
    Env(#[from] std::env::VarError),

    /// A configuration value was present but unusable.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error related to progress bar style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// The externally visible failure classes of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    UpstreamUnavailable,
}

impl ErrorClass {
    /// HTTP status code used by the server for this class.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorClass::BadRequest => 400,
            ErrorClass::NotFound => 404,
            ErrorClass::UpstreamUnavailable => 500,
        }
    }

    /// Message shown to dashboard clients. Never includes provider details.
    pub fn public_message(self) -> &'static str {
        match self {
            ErrorClass::BadRequest => "City query parameter is required",
            ErrorClass::NotFound => "City not found",
            ErrorClass::UpstreamUnavailable => "Unable to fetch AQI data",
        }
    }
}

impl AppError {
    /// Shorthand for a `ProviderUnavailable` error.
    pub fn provider<S: Into<String>>(provider: SourceId, reason: S) -> Self {
        AppError::ProviderUnavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Maps this error onto the failure class reported to callers.
    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Validation(_) => ErrorClass::BadRequest,
            AppError::LocationNotFound(_) => ErrorClass::NotFound,
            _ => ErrorClass::UpstreamUnavailable,
        }
    }
}

// --- From implementations ---
// These allow easy conversion from external error types into AppError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(Arc::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for AppError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        AppError::Template(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonParse(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_their_class() {
        assert_eq!(
            AppError::Validation("empty".into()).class(),
            ErrorClass::BadRequest
        );
        assert_eq!(
            AppError::LocationNotFound("Nowhereville".into()).class(),
            ErrorClass::NotFound
        );
        assert_eq!(
            AppError::provider(SourceId::Waqi, "timeout").class(),
            ErrorClass::UpstreamUnavailable
        );
        assert_eq!(
            AppError::Unexpected("boom".into()).class(),
            ErrorClass::UpstreamUnavailable
        );
    }

    #[test]
    fn test_ambient_errors_are_upstream_class() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.class(), ErrorClass::UpstreamUnavailable);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.class(), ErrorClass::UpstreamUnavailable);
    }

    #[test]
    fn test_class_status_codes_and_messages() {
        assert_eq!(ErrorClass::BadRequest.status_code(), 400);
        assert_eq!(ErrorClass::NotFound.status_code(), 404);
        assert_eq!(ErrorClass::UpstreamUnavailable.status_code(), 500);
        assert_eq!(ErrorClass::NotFound.public_message(), "City not found");
    }

    #[test]
    fn test_provider_error_display_names_the_source() {
        let err = AppError::provider(SourceId::OpenWeather, "empty list");
        assert_eq!(err.to_string(), "Provider OpenWeather unavailable: empty list");
    }
}
