// ============================================================================
// ERRORS - Typed failures for the API client and the persisted store
// ============================================================================

use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never reached the server or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Body could not be built (serialization, form encoding)
    #[error("Request build error: {0}")]
    Request(String),

    /// 401 - token missing, expired or revoked
    #[error("Unauthorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Maps a non-success status and its body text to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Http {
            status,
            message: detail_message(body).unwrap_or_else(|| body.trim().to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// The backend reports failures as `{"detail": "..."}`
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Failure reading or writing the persisted session record
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend: {0}")]
    Backend(#[from] gloo_storage::errors::StorageError),

    #[error("invalid session record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session record version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized() {
        let err = ApiError::from_status(401, r#"{"detail":"Unauthorized"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn detail_field_becomes_message() {
        let err = ApiError::from_status(400, r#"{"detail":"LOGIN_BAD_CREDENTIALS"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "LOGIN_BAD_CREDENTIALS".to_string()
            }
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn structured_detail_is_kept_as_json() {
        let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#);
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("field required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plain_body_is_used_verbatim() {
        let err = ApiError::from_status(502, "  Bad Gateway \n");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }
}
