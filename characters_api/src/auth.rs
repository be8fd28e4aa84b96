//! Bearer-token handling for outgoing requests.
//!
//! Tokens are issued and stored by the authentication flow, which lives
//! outside this crate. The client only ever asks a [`TokenProvider`] for the
//! current token at send time, so a token set or cleared between two calls is
//! picked up by the later call.

use std::sync::RwLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Source of the current access token, injected into the client at
/// construction.
pub trait TokenProvider: Send + Sync {
    /// Returns the current access token, if one is available.
    fn current_token(&self) -> Option<String>;
}

/// Provider holding a fixed token, or none at all.
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Provider for unauthenticated clients.
    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn current_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// In-memory token store written by an external authentication flow and read
/// by the client on every call.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap() = None;
    }
}

impl TokenProvider for MemoryTokenStore {
    fn current_token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }
}

/// Returns a copy of `base` with `Authorization: Bearer <token>` set, or with
/// no `Authorization` entry when the token is absent or empty. The caller's
/// map is never modified, and a malformed header like `Bearer ` is never
/// produced.
pub(crate) fn merged_headers(base: &HeaderMap, token: Option<&str>) -> HeaderMap {
    let mut headers = base.clone();
    match token.filter(|t| !t.is_empty()) {
        Some(token) => match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("Stored token is not a valid header value, sending without auth");
                headers.remove(AUTHORIZATION);
            }
        },
        None => {
            headers.remove(AUTHORIZATION);
        }
    }
    headers
}
