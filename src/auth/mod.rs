use axum::http::{header, HeaderMap};

/// Extract the profile lookup key from the Authorization header.
///
/// The expected shape is `<scheme> user:<key>`, e.g. `Bearer user:one`.
/// The scheme word is not validated. Returns `None` when the header is
/// absent, has no second component, or the second component lacks the
/// `user:` prefix; callers treat `None` as an unauthorized request.
pub fn lookup_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)?
        .strip_prefix("user:")
}
