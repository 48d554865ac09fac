use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs a store-bound operation under the per-request deadline.
///
/// When the deadline elapses the operation future is dropped, abandoning any in-flight
/// store call. Every store write is a single transaction, so nothing needs rolling back.
///
/// # Arguments
/// - `timeout` - Maximum time to wait for the operation
/// - `operation` - The service call to run
///
/// # Returns
/// - The operation's own result when it finishes in time
/// - `Err(AppError::Timeout)` - The deadline elapsed first
pub async fn with_deadline<T, F>(timeout: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Request exceeded deadline of {:?}", timeout);
            Err(AppError::Timeout(timeout))
        }
    }
}
