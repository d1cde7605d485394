//! Shutdown signal handling.

use tokio::signal;

/// Resolve on the first of Ctrl+C or SIGTERM.
///
/// # Errors
/// Fails if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> anyhow::Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("received Ctrl+C");
        }
        result = sigterm() => {
            result?;
            tracing::info!("received SIGTERM");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn sigterm() -> std::io::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> std::io::Result<()> {
    std::future::pending().await
}
