use tokio::signal;
use tracing::{error, info};

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
///
/// Pass to `Server::serve_with_shutdown`: tonic stops accepting new
/// connections and lets in-flight streams finish before the listener is
/// released. A handler that cannot be installed is logged and never fires,
/// leaving the other signal in charge.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, draining in-flight streams");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, draining in-flight streams");
        },
    }
}
