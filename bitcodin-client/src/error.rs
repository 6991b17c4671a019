//! Error types for the bitcodin client

use bitcodin_core::domain::ResourceId;
use bitcodin_core::domain::job::JobStatus;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the bitcodin client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API rejected the request parameters (400)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Missing or invalid API key (401/403)
    #[error("Unauthorized (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Resource not found (404)
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Request conflicts with the resource state (409)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The service failed (5xx)
    #[error("Server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Any other non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Polling parameters that cannot be honoured
    #[error("Invalid poll options: {0}")]
    InvalidPollOptions(String),

    /// Job reached the error status while being polled
    #[error("Job {job_id} failed: status changed to {status}")]
    JobFailed { job_id: ResourceId, status: JobStatus },

    /// Job did not reach a terminal status in time
    #[error("Job {job_id} did not finish within {timeout:?} (last status: {last_status})")]
    JobTimeout {
        job_id: ResourceId,
        timeout: Duration,
        last_status: JobStatus,
    },
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ClientError {
    /// Build the error matching an HTTP status and raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            400 => Self::BadRequest { message },
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { message },
            409 => Self::Conflict { message },
            500..=599 => Self::ServerError { status, message },
            _ => Self::api_error(status, message),
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status behind this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Conflict { .. } => Some(409),
            Self::Unauthorized { status, .. }
            | Self::ServerError { status, .. }
            | Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a "bad request" error
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest { .. })
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Reduce an error body to a human-readable message
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Unknown error".to_string();
    }

    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody {
            message: Some(message),
            error: Some(error),
        }) => format!("{}: {}", message, error),
        Ok(ErrorBody {
            message: Some(text),
            error: None,
        })
        | Ok(ErrorBody {
            message: None,
            error: Some(text),
        }) => text,
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(ClientError::from_response(400, "").is_bad_request());
        assert!(matches!(
            ClientError::from_response(401, ""),
            ClientError::Unauthorized { status: 401, .. }
        ));
        assert!(ClientError::from_response(404, "").is_not_found());
        assert!(matches!(
            ClientError::from_response(409, ""),
            ClientError::Conflict { .. }
        ));
        assert!(ClientError::from_response(503, "").is_server_error());
        assert!(matches!(
            ClientError::from_response(418, ""),
            ClientError::ApiError { status: 418, .. }
        ));
    }

    #[test]
    fn test_forbidden_keeps_its_status() {
        let err = ClientError::from_response(403, r#"{"message":"API key disabled"}"#);
        assert!(matches!(err, ClientError::Unauthorized { status: 403, .. }));
        assert_eq!(err.status(), Some(403));
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Unauthorized (status 403): API key disabled");
    }

    #[test]
    fn test_classification() {
        let err = ClientError::from_response(400, "");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = ClientError::from_response(502, "");
        assert!(!err.is_client_error());
        assert_eq!(err.status(), Some(502));

        let err = ClientError::JobFailed {
            job_id: 1,
            status: JobStatus::Error,
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_message_from_json_body() {
        let err = ClientError::from_response(
            400,
            r#"{"message":"Invalid manifest type","error":"invalid is not supported"}"#,
        );
        match err {
            ClientError::BadRequest { message } => {
                assert_eq!(message, "Invalid manifest type: invalid is not supported")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = ClientError::from_response(404, r#"{"message":"Job not found"}"#);
        assert_eq!(err.to_string(), "Resource not found: Job not found");
    }

    #[test]
    fn test_message_from_text_body() {
        let err = ClientError::from_response(500, "upstream exploded\n");
        assert_eq!(err.to_string(), "Server error (status 500): upstream exploded");

        let err = ClientError::from_response(400, "   ");
        assert_eq!(err.to_string(), "Bad request: Unknown error");
    }
}
