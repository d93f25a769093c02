//! API Error Types
//!
//! Errors surfaced by the HTTP client layer and their user-facing text.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("decode error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success HTTP response
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Status { status, body },
        }
    }

    /// Human-readable message for notices
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Server is unreachable, check the connection".to_string(),
            ApiError::Unauthorized => "Session expired, please sign in again".to_string(),
            ApiError::NotFound => "The requested item no longer exists".to_string(),
            ApiError::Decode(_) => "Unexpected server response".to_string(),
            ApiError::Status { status, body } => {
                detail_message(body).unwrap_or_else(|| format!("Request failed with status {}", status))
            }
        }
    }
}

/// Extract `detail` from an error body: either a plain string or a list of
/// `{ "msg": ... }` entries.
fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::from_status(400, r#"{"detail":"Course already exists"}"#.into());
        assert_eq!(err.user_message(), "Course already exists");
    }

    #[test]
    fn test_detail_list() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"too short"}]}"#;
        let err = ApiError::from_status(422, body.into());
        assert_eq!(err.user_message(), "field required; too short");
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiError::from_status(500, "<html>oops</html>".into());
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
    }
}
