use crate::constants::{SIGNATURE_EXPIRED, TOKEN_REVOKED};
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure: the request never produced an HTTP response,
    /// so there is no status or payload to inspect
    Network(reqwest::Error),
    /// The backend answered with a non-success status; carries the original
    /// status and the response payload (`Value::Null` when the body was empty
    /// or not valid JSON)
    Http {
        /// HTTP status code returned by the backend
        status: StatusCode,
        /// Parsed JSON payload of the error response
        body: Value,
    },
    /// A payload could not be serialized or deserialized
    Serialization(serde_json::Error),
    /// A caller-supplied value could not be turned into a valid request
    InvalidInput(String),
    /// The backend answered successfully but the envelope was missing data
    /// the caller needs
    UnexpectedResponse(String),
}

impl AppError {
    /// Returns the HTTP status of the failure, if a response was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True when the failure carries one of the backend's session-expiry
    /// messages in the `error` field of the response payload.
    ///
    /// This is a string match against the exact wording the backend uses
    /// (`"Signature has expired"`, `"Token has been revoked"`), so it is
    /// coupled to the backend's error-message contract.
    pub fn is_session_expired(&self) -> bool {
        match self {
            AppError::Http { body, .. } => matches!(
                body.get("error").and_then(Value::as_str),
                Some(SIGNATURE_EXPIRED) | Some(TOKEN_REVOKED)
            ),
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Http { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Serialization(e) => write!(f, "serialization error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::UnexpectedResponse(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error)
    }
}
