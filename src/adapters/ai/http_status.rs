//! Mapping of provider transport failures and HTTP statuses to [`AIError`].

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;

use crate::ports::AIError;

/// Maps a reqwest send error, keeping timeouts distinct from other failures.
pub(super) fn transport_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("connection failed: {err}"))
    } else {
        AIError::network(err.to_string())
    }
}

/// Maps a non-2xx status, its headers and its body.
///
/// 401 is an authentication failure, 429 a rate limit, 5xx an outage and any
/// other status an invalid request. A 429 waits for the `retry-after` header
/// first, then the hint in the body, then `default_retry_secs`.
pub(super) fn status_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: String,
    default_retry_secs: u32,
) -> AIError {
    match status.as_u16() {
        401 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(
            retry_after_header(headers)
                .or_else(|| parse_retry_after(&body))
                .unwrap_or(default_retry_secs),
        ),
        500..=599 => AIError::unavailable(format!("server error {status}: {body}")),
        _ => AIError::InvalidRequest(format!("status {status}: {body}")),
    }
}

/// Whole seconds from a `retry-after` header. HTTP-date values are ignored.
fn retry_after_header(headers: &HeaderMap) -> Option<u32> {
    headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()
}

/// Reads "try again in Ns" from a JSON error body's `error.message`.
fn parse_retry_after(body: &str) -> Option<u32> {
    const MARKER: &str = "try again in ";

    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = parsed.get("error")?.get("message")?.as_str()?;
    let rest = &message[message.find(MARKER)? + MARKER.len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
