use std::{future::Future, time::Duration};

use tracing_subscriber::EnvFilter;

pub mod contents;
mod error;
pub mod sample;

pub use contents::InteractionContents;
pub use error::{ContractError, Result};

/// Deadline applied to every outbound call in the sample scenarios.
pub const DEFAULT_CALL_DEADLINE: Duration = Duration::from_secs(5);

/// Environment variable holding the log filter, e.g. `LOG_LEVEL=debug`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Install a `tracing` subscriber that writes through the test harness
///
/// The filter comes from `LOG_LEVEL` and defaults to `info`. Calling this more than
/// once is harmless, only the first call installs anything.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Run an outbound call under a deadline
///
/// When `deadline` passes first the call future is dropped, which cancels the
/// request, and [`ContractError::DeadlineExceeded`] is returned. Errors from the call
/// itself are converted into [`ContractError`].
///
/// Usage:
/// ```
/// use std::time::Duration;
/// use pact_grpc_repro::{ContractError, call_with_deadline};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let fast = call_with_deadline(Duration::from_secs(1), async {
///         Ok::<_, tonic::Status>(42)
///     })
///     .await;
///     assert_eq!(fast.unwrap(), 42);
///
///     let slow = call_with_deadline(Duration::from_millis(10), async {
///         tokio::time::sleep(Duration::from_secs(5)).await;
///         Ok::<_, tonic::Status>(())
///     })
///     .await;
///     assert!(matches!(slow, Err(ContractError::DeadlineExceeded(_))));
/// });
/// ```
pub async fn call_with_deadline<T, E, F>(deadline: Duration, call: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<ContractError>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(ContractError::DeadlineExceeded(deadline)),
    }
}
