// ABOUTME: Timeout wrapper for route handlers so slow collaborators cannot hang a request
// ABOUTME: Dropping the wrapped future on expiry cancels any in-flight conversion or parse call
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::errors::{AppError, AppResult};

/// Run `operation` for at most `duration`
///
/// The operation is polled in place, so when the deadline passes it is
/// dropped at its current await point and no further service calls are made.
///
/// # Errors
/// Returns an internal error naming the deadline when the operation does not finish in time
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use recipe_adjuster_agent::utils::route_timeout::with_request_timeout;
///
/// # async fn example() -> recipe_adjuster_agent::errors::AppResult<()> {
/// let answer = with_request_timeout(Duration::from_secs(1), async { 42 }).await?;
/// assert_eq!(answer, 42);
/// # Ok(())
/// # }
/// ```
pub async fn with_request_timeout<F, T>(duration: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = T>,
{
    timeout(duration, operation)
        .await
        .map_err(|_| AppError::internal(format!("Request timed out after {duration:?}")))
}
