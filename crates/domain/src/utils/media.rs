//! Media reference normalisation
//!
//! The backend returns image references in several shapes: absolute URLs
//! pointing at its own development origin, absolute CDN URLs, or bare paths.

use crate::constants::LOCAL_DEV_ORIGINS;

/// Resolve a backend media reference against `base`.
///
/// Known local development origins are stripped and the remainder treated as
/// a path. Other `http(s)` URLs pass through unchanged. Paths get a leading
/// `/` and the base origin (trailing slashes removed) in front.
///
/// # Examples
///
/// ```
/// use numerolog_domain::normalize_media_url;
///
/// let base = "https://api.example";
/// assert_eq!(
///     normalize_media_url("http://localhost:8000/static/x.png", base),
///     "https://api.example/static/x.png"
/// );
/// assert_eq!(normalize_media_url("static/x.png", base), "https://api.example/static/x.png");
/// assert_eq!(
///     normalize_media_url("https://cdn.example/x.png", base),
///     "https://cdn.example/x.png"
/// );
/// ```
#[must_use]
pub fn normalize_media_url(raw: &str, base: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let raw = raw.trim();

    let path = LOCAL_DEV_ORIGINS
        .iter()
        .find_map(|origin| raw.strip_prefix(origin))
        .unwrap_or(raw);

    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
