//! Caller identity extraction from HTTP headers.
//!
//! Authentication is handled by a fronting proxy, which verifies the session
//! and forwards the caller's identity in the `X-User-Id` header. Handlers
//! that act on behalf of a user read it through this helper.

use crate::error::AppError;
use axum::http::HeaderMap;
use serde_json::json;

/// Header carrying the authenticated caller id, set by the auth proxy.
const USER_ID_HEADER: &str = "x-user-id";

/// Extracts the caller's user id from request headers.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header is missing, empty, or not
/// valid ASCII.
pub fn extract_user_id_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing X-User-Id header",
                json!({ "header": USER_ID_HEADER }),
            )
        })?
        .to_str()
        .map_err(|_| {
            AppError::bad_request(
                "X-User-Id header is not valid ASCII",
                json!({ "header": USER_ID_HEADER }),
            )
        })?
        .trim();

    if value.is_empty() {
        return Err(AppError::bad_request(
            "X-User-Id header is empty",
            json!({ "header": USER_ID_HEADER }),
        ));
    }

    Ok(value.to_string())
}
