use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TcgApiError {
    #[error("failed to marshal request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse path: {0}")]
    Path(#[source] url::ParseError),

    #[error("failed to create request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to send request: {0}")]
    Send(#[from] SendError),

    #[error("API error: {} (code: {})", .error.message, .error.code)]
    Api {
        status: StatusCode,
        error: ErrorResponse,
    },

    #[error("failed to decode error response: {0}")]
    DecodeErrorResponse(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    DecodeResponse(#[source] serde_json::Error),
}

/// Coarse classification of [`TcgApiError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never left the process.
    Construction,
    Transport,
    Api,
    DecodeResponse,
    DecodeErrorResponse,
}

impl TcgApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialize(_) | Self::Path(_) | Self::Build(_) => ErrorKind::Construction,
            Self::Send(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::DecodeResponse(_) => ErrorKind::DecodeResponse,
            Self::DecodeErrorResponse(_) => ErrorKind::DecodeErrorResponse,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied error envelope of an API error.
    pub fn api_error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Send(SendError::Cancelled))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Send(SendError::DeadlineExceeded(_)))
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(#[source] reqwest::Error),

    #[error(transparent)]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SendError::DeadlineExceeded(err)
        } else {
            SendError::Transport(err)
        }
    }
}

/// Error envelope returned by the service with every status >= 400.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> TcgApiError {
        TcgApiError::Api {
            status: StatusCode::BAD_REQUEST,
            error: ErrorResponse {
                message: "Invalid request".into(),
                code: "INVALID_REQUEST".into(),
            },
        }
    }

    #[test]
    fn api_error_embeds_message_and_code() {
        assert_eq!(
            api_error().to_string(),
            "API error: Invalid request (code: INVALID_REQUEST)"
        );
    }

    #[test]
    fn api_error_exposes_status_and_envelope() {
        let err = api_error();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.api_error().unwrap().code, "INVALID_REQUEST");
    }

    #[test]
    fn cancellation_is_a_transport_error() {
        let err = TcgApiError::from(SendError::Cancelled);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.is_cancelled());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "failed to send request: request cancelled");
    }

    #[test]
    fn decode_failures_name_their_stage() {
        let json_err = serde_json::from_str::<ErrorResponse>("{").unwrap_err();
        let err = TcgApiError::DecodeResponse(json_err);
        assert_eq!(err.kind(), ErrorKind::DecodeResponse);
        assert!(err.to_string().starts_with("failed to decode response:"));

        let json_err = serde_json::from_str::<ErrorResponse>("invalid json").unwrap_err();
        let err = TcgApiError::DecodeErrorResponse(json_err);
        assert_eq!(err.kind(), ErrorKind::DecodeErrorResponse);
        assert!(err.to_string().starts_with("failed to decode error response:"));
    }

    #[test]
    fn error_envelope_tolerates_missing_fields() {
        let envelope: ErrorResponse = serde_json::from_str(r#"{"message":"Not found"}"#).unwrap();
        assert_eq!(envelope.message, "Not found");
        assert_eq!(envelope.code, "");
    }
}
