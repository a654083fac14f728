// ABOUTME: Deadline wrapper for external collaborator calls and the per-call timeout budget
// ABOUTME: An elapsed deadline becomes an ExternalTimeout error so callers take their fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

const DEFAULT_RECIPE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);
const DEFAULT_GEOCODING_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_ROUTING_TIMEOUT: Duration = Duration::from_secs(5);

/// Deadlines applied to each external call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTimeouts {
    /// Recipe data lookup
    pub recipe_lookup: Duration,
    /// Origin address geocoding
    pub geocoding: Duration,
    /// Route distance request
    pub routing: Duration,
}

impl Default for EngineTimeouts {
    fn default() -> Self {
        Self {
            recipe_lookup: DEFAULT_RECIPE_LOOKUP_TIMEOUT,
            geocoding: DEFAULT_GEOCODING_TIMEOUT,
            routing: DEFAULT_ROUTING_TIMEOUT,
        }
    }
}

/// Run `operation` with a deadline.
///
/// The future is dropped when the deadline passes, cancelling the call.
///
/// # Errors
///
/// Returns `ExternalTimeout` on expiry, or the operation's own error.
pub async fn with_deadline<F, T>(service: &str, duration: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    timeout(duration, operation)
        .await
        .unwrap_or_else(|_| Err(AppError::external_timeout(service, duration.as_millis())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let value = with_deadline("test", Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(value.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_elapsed_deadline_is_timeout_error() {
        let result: AppResult<()> = with_deadline("slow", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        let error = result.unwrap_err();
        assert_eq!(error.code, ErrorCode::ExternalTimeout);
        assert!(error.message.contains("slow"));
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let result: AppResult<()> = with_deadline("svc", Duration::from_secs(1), async {
            Err(AppError::external_service("svc", "boom"))
        })
        .await;
        assert_eq!(result.unwrap_err().code, ErrorCode::ExternalServiceError);
    }
}
