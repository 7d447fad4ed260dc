use serde::Deserialize;
use thiserror::Error;

/// Client-level error type for calls to the matcher backend.
/// The controller catches these, logs them, and keeps its previous results.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),
}

/// Error body the backend sends alongside a 5xx: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
struct BackendError {
    error: String,
}

impl ClientError {
    /// Builds an `Api` error from a non-2xx response body.
    /// Falls back to the raw body when it is not the backend's JSON error shape.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<BackendError>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        ClientError::Api { status, message }
    }

    /// Short label attached to the controller's failure logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "network",
            ClientError::Api { .. } => "api",
            ClientError::Parse(_) => "payload",
            ClientError::Input(_) => "input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_backend_message() {
        let err = ClientError::from_status(500, r#"{"error": "model overloaded"}"#.to_string());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_status_keeps_raw_body_when_not_json() {
        let err = ClientError::from_status(502, "Bad Gateway".to_string());
        assert_eq!(err.to_string(), "API error (status 502): Bad Gateway");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ClientError::from_status(404, String::new()).kind(), "api");
        assert_eq!(ClientError::Input("missing".into()).kind(), "input");
        let parse = serde_json::from_str::<BackendError>("nope").unwrap_err();
        assert_eq!(ClientError::Parse(parse).kind(), "payload");
    }
}
