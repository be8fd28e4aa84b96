//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status. The message comes from
    /// the error body's `msg` field, else its `error.message` field, else a
    /// generic fallback naming the status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The server answered with a success status but the body was empty or
    /// not valid JSON for the expected payload.
    #[error("Invalid JSON response.")]
    InvalidResponse,
    /// The request never completed (connection failure, timeout, etc).
    /// Passed through from the transport untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The request URL could not be constructed.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Builds the `Http` variant for a failed response, deriving the message
    /// from the body. An unparseable body is treated as absent.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|payload| extract_message(&payload))
            .unwrap_or_else(|| format!("Request failed ({status})"));
        Error::Http { status, message }
    }
}

fn extract_message(payload: &Value) -> Option<String> {
    if let Some(msg) = non_empty_str(payload.get("msg")) {
        return Some(msg);
    }
    non_empty_str(payload.get("error").and_then(|e| e.get("message")))
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_msg_field() {
        let err = Error::from_status(404, r#"{"msg":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn message_from_nested_error_message() {
        let err = Error::from_status(500, r#"{"error":{"message":"boom"}}"#);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn msg_takes_priority_over_nested_message() {
        let err = Error::from_status(400, r#"{"msg":"first","error":{"message":"second"}}"#);
        assert_eq!(err.to_string(), "first");
    }

    #[test]
    fn empty_msg_falls_through() {
        let err = Error::from_status(400, r#"{"msg":"","error":{"message":"second"}}"#);
        assert_eq!(err.to_string(), "second");
    }

    #[test]
    fn fallback_names_the_status() {
        let err = Error::from_status(503, "upstream unavailable");
        assert_eq!(err.to_string(), "Request failed (503)");
    }

    #[test]
    fn empty_body_uses_fallback() {
        let err = Error::from_status(401, "");
        assert_eq!(err.to_string(), "Request failed (401)");
    }

    #[test]
    fn status_is_preserved() {
        match Error::from_status(404, r#"{"msg":"not found"}"#) {
            Error::Http { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
