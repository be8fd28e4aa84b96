//! API base URL resolution.

/// Origin of the hosted site. Overridable per client via
/// [`Client::with_origin`](crate::Client::with_origin).
pub const DEFAULT_ORIGIN: &str = "https://www.ancientwhitearmyvet.com";

/// Computes the API base URL for an origin, e.g.
/// `https://example.com/` becomes `https://example.com/api`.
///
/// One trailing slash on the origin is stripped; an empty origin yields a
/// host-relative `/api`.
pub fn base_api_url(origin: &str) -> String {
    let origin = origin.strip_suffix('/').unwrap_or(origin);
    if origin.is_empty() {
        "/api".to_string()
    } else {
        format!("{origin}/api")
    }
}
