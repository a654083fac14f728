// ABOUTME: Shared HTTP client with connection pooling for collaborator calls
// ABOUTME: Timeouts configured once at startup; HTTP status codes mapped to external error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use foodprint_core::errors::{AppError, ErrorCode};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Longest response body excerpt carried into an error message
const ERROR_BODY_EXCERPT: usize = 200;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Set the shared client's timeouts.
///
/// Only the first call before [`shared_client`] is first used has any effect.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Pooled client used by every provider
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Error for a non-success response from `service`
pub fn status_error(service: &str, status: StatusCode, body: &str) -> AppError {
    let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
    let message = format!("{service}: HTTP {status}: {excerpt}");
    let code = match status.as_u16() {
        401 | 403 => ErrorCode::ExternalAuthFailed,
        429 => ErrorCode::ExternalRateLimited,
        502..=504 => ErrorCode::ExternalServiceUnavailable,
        _ => ErrorCode::ExternalServiceError,
    };
    AppError::new(code, message)
}

/// Error for a request that never produced a response
pub fn transport_error(service: &str, error: reqwest::Error) -> AppError {
    let code = if error.is_timeout() {
        ErrorCode::ExternalTimeout
    } else if error.is_connect() {
        ErrorCode::ExternalServiceUnavailable
    } else {
        ErrorCode::ExternalServiceError
    };
    AppError::new(code, format!("{service}: request failed: {error}")).with_source(error)
}

/// Join a base URL and a path without doubling slashes
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let limited = status_error("osrm", StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(limited.code, ErrorCode::ExternalRateLimited);
        let auth = status_error("llm", StatusCode::UNAUTHORIZED, "");
        assert_eq!(auth.code, ErrorCode::ExternalAuthFailed);
        let down = status_error("nominatim", StatusCode::BAD_GATEWAY, "");
        assert_eq!(down.code, ErrorCode::ExternalServiceUnavailable);
        let other = status_error("nominatim", StatusCode::BAD_REQUEST, "bad");
        assert_eq!(other.code, ErrorCode::ExternalServiceError);
        assert!(other.message.contains("bad"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://router.project-osrm.org/", "/route/v1"),
            "https://router.project-osrm.org/route/v1"
        );
        assert_eq!(join_url("http://h", "search"), "http://h/search");
    }
}
