//! Graceful shutdown signal handling.
//!
//! [`shutdown_token`] returns a [`CancellationToken`] that is cancelled on the
//! first SIGTERM or SIGINT (Ctrl+C on non-Unix platforms).

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio_util::sync::CancellationToken;

/// Registers the OS signal handlers and spawns the task that waits on them.
///
/// Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if signal registration fails.
#[allow(clippy::unnecessary_wraps)]
pub fn shutdown_token() -> Result<CancellationToken, std::io::Error> {
    let token = CancellationToken::new();
    let trigger = token.clone();

    #[cfg(unix)]
    {
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            let name = tokio::select! {
                _ = sigterm.recv() => "SIGTERM",
                _ = sigint.recv() => "SIGINT",
            };
            #[cfg(feature = "telemetry")]
            tracing::info!(signal = name, "shutting down");
            #[cfg(not(feature = "telemetry"))]
            let _ = name;
            trigger.cancel();
        });
    }

    #[cfg(not(unix))]
    {
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            #[cfg(feature = "telemetry")]
            tracing::info!(signal = "ctrl-c", "shutting down");
            trigger.cancel();
        });
    }

    Ok(token)
}
