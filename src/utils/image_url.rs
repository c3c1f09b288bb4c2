//! Image URL normalization.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Normalizes and validates an artwork image URL.
///
/// # Rules
///
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
/// - Must have a host
/// - Fragments are stripped (they never reach the image server anyway)
///
/// Returns the normalized string form produced by the `url` crate
/// (lowercased scheme/host, default ports removed).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is malformed or uses an
/// unsupported scheme.
pub fn normalize_image_url(raw: &str) -> Result<String, AppError> {
    let mut parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request("Invalid image URL", json!({ "reason": e.to_string() }))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Image URL must use http or https",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::bad_request(
            "Image URL must have a host",
            json!({ "url": raw }),
        ));
    }

    parsed.set_fragment(None);

    Ok(parsed.to_string())
}
