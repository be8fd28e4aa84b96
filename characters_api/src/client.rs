//! HTTP client and generic verb wrappers for the site API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{auth, config, Error, TokenProvider};

/// Request timeout applied to every call. No retry on expiry; the failure
/// surfaces to the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-call request options. The headers here are merged with a freshly read
/// Authorization header at send time; the options value itself is never
/// modified by a call, so one set can be reused across calls.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// Headers-only options with nothing preset. Auth is still injected at
    /// send time when a token exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for requests carrying a JSON body.
    pub fn json() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self { headers }
    }
}

/// HTTP client for the site API.
///
/// Holds the resolved `<origin>/api` base URL and the credential provider
/// injected at construction. Each call reads the provider for the current
/// token, so a token set or cleared between calls is observed by later calls
/// but never by in-flight ones.
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl Client {
    /// Creates a client pointing at the hosted site.
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Result<Self, Error> {
        Self::with_origin(config::DEFAULT_ORIGIN, tokens)
    }

    /// Creates a client for a custom origin. Also the hook for testing with
    /// wiremock.
    pub fn with_origin(origin: &str, tokens: Arc<dyn TokenProvider>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_api_url: config::base_api_url(origin),
            tokens,
        })
    }

    /// The resolved base URL, e.g. `https://www.ancientwhitearmyvet.com/api`.
    pub fn base_api_url(&self) -> &str {
        &self.base_api_url
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{}", self.base_api_url, path)).map_err(|e| {
            tracing::error!("Invalid URL constructed for {path}: {e}");
            Error::from(e)
        })
    }

    fn request_headers(&self, options: &RequestOptions) -> HeaderMap {
        auth::merged_headers(&options.headers, self.tokens.current_token().as_deref())
    }

    /// Generic read wrapper (GET).
    pub async fn get<T>(&self, path: &str, options: &RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .get(self.url(path)?)
            .headers(self.request_headers(options))
            .send()
            .await
            .inspect_err(|e| tracing::error!("GET {path} failed: {e}"))?;
        handle(resp).await
    }

    /// Generic create wrapper (POST) with a JSON-serialized body.
    pub async fn post<T, B>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .http
            .post(self.url(path)?)
            .headers(self.request_headers(options))
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("POST {path} failed: {e}"))?;
        handle(resp).await
    }

    /// Generic update wrapper (PUT) with a JSON-serialized body. The server
    /// rejects unauthenticated updates; this layer does not pre-check.
    pub async fn put<T, B>(&self, path: &str, body: &B, options: &RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .http
            .put(self.url(path)?)
            .headers(self.request_headers(options))
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("PUT {path} failed: {e}"))?;
        handle(resp).await
    }

    /// Generic remove wrapper (DELETE). The server rejects unauthenticated
    /// deletes; this layer does not pre-check.
    pub async fn delete<T>(&self, path: &str, options: &RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .delete(self.url(path)?)
            .headers(self.request_headers(options))
            .send()
            .await
            .inspect_err(|e| tracing::error!("DELETE {path} failed: {e}"))?;
        handle(resp).await
    }
}

/// Shared response handling for all verbs: non-success statuses become
/// [`Error::Http`] with a message derived from the body, success bodies that
/// fail to parse become [`Error::InvalidResponse`]. A success never resolves
/// with a null payload.
async fn handle<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .inspect_err(|e| tracing::error!("Failed to read response body: {e}"))?;

    if !status.is_success() {
        tracing::error!("Request failed with status {status}: {}", truncate_body(&body));
        return Err(Error::from_status(status.as_u16(), &body));
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        tracing::error!("Failed to parse response: {e} | body: {}", truncate_body(&body));
        Error::InvalidResponse
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Back off to a char boundary so a multibyte character straddling
        // the limit cannot panic the slice.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn truncate_body_keeps_short_bodies_whole() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_ascii() {
        let body = "a".repeat(3000);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn truncate_body_backs_off_mid_character() {
        // 'é' is two bytes and straddles the 2000-byte limit here.
        let body = format!("{}ééééé", "a".repeat(1999));
        let truncated = truncate_body(&body);
        assert!(truncated.starts_with(&"a".repeat(1999)));
        assert_eq!(truncated, format!("{}...[truncated]", "a".repeat(1999)));
    }

    #[test]
    fn truncate_body_handles_exact_boundary_multibyte() {
        // Last character ends exactly at the limit; nothing to back off.
        let body = format!("{}é", "a".repeat(1998));
        assert_eq!(truncate_body(&body), body);
    }
}
