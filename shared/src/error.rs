use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

/// Message shown when no bearer token can be found in any storage location.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please log in again to view achievements";

/// Fallback message when a failure carries no text of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to load achievements";

#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("{}", MISSING_CREDENTIALS_MESSAGE)]
    MissingCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SharedError {
    /// Text surfaced to the user; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FETCH_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

/// Failure reported by one of the data-access calls.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status when the server answered, `None` for transport failures.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl From<ApiError> for SharedError {
    fn from(error: ApiError) -> Self {
        if error.is_unauthorized() {
            Self::Unauthorized(error.message)
        } else {
            Self::Api {
                status: error.status,
                message: error.message,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_credentials_uses_login_message() {
        assert_eq!(
            SharedError::MissingCredentials.user_message(),
            "Please log in again to view achievements"
        );
    }

    #[test]
    fn unauthorized_api_error_converts_to_unauthorized() {
        let err: SharedError = ApiError::new(Some(401), "Unauthorized").into();
        assert_eq!(err, SharedError::Unauthorized("Unauthorized".to_string()));

        let err: SharedError = ApiError::new(Some(500), "boom").into();
        assert!(matches!(err, SharedError::Api { status: Some(500), .. }));
    }

    #[test]
    fn empty_message_falls_back_to_generic_text() {
        let err = SharedError::Api {
            status: None,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), GENERIC_FETCH_ERROR);
    }
}
