//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Background model load (ModelReadiness)
//! - Service creation
//! - Health check service (grpc.health.v1.Health) following readiness
//! - gRPC server configuration, startup and graceful shutdown

use std::future::Future;
use std::sync::Arc;

use domain_word2vec::{LoadPhase, ModelReadiness};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
use rpc::word2vec::word2_vec_service_server::{SERVICE_NAME, Word2VecServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_health::server::HealthReporter;
use tracing::{info, warn};

use crate::config::ServerSettings;
use crate::service::Word2VecServiceImpl;

/// Run the gRPC server until SIGINT or SIGTERM.
///
/// The model starts loading in the background before the listener is
/// bound; lookups are accepted immediately and answered once it is ready.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails at runtime. A model that fails to load is not an error: the server
/// keeps running and reports not ready.
pub async fn run(settings: ServerSettings) -> Result<()> {
    let addr = settings
        .grpc
        .socket_addr()
        .wrap_err_with(|| format!("Failed to parse server address: {}", settings.grpc.addr_string()))?;

    let readiness = ModelReadiness::new();
    let _load = readiness.start(settings.model.clone());

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    serve(readiness, &settings.grpc, listener, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// In-flight streams are drained before this returns.
pub async fn serve<F>(
    readiness: Arc<ModelReadiness>,
    config: &ServerConfig,
    listener: TcpListener,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let local_addr = listener.local_addr().wrap_err("Failed to read listener address")?;

    // Create a health reporter for Kubernetes probes
    let (health_reporter, health_service) = create_health_service();
    GrpcServer::set_not_serving(&health_reporter, SERVICE_NAME).await;
    tokio::spawn(follow_readiness(Arc::clone(&readiness), health_reporter));

    let mut service = Word2VecServiceServer::new(Word2VecServiceImpl::new(readiness))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    if config.enable_compression {
        service = service
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    GrpcServer::log_startup(config, SERVICE_NAME);
    info!(addr = %local_addr, "Word2VecService listening");

    Server::builder()
        .add_service(health_service)
        .add_service(service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .wrap_err("gRPC server failed")?;

    info!("Word2VecService stopped");
    Ok(())
}

/// Flip the health status to SERVING once the model is ready.
///
/// Returns once the load settles; a failed load leaves the status at
/// NOT_SERVING. Yields whether the service became ready.
async fn follow_readiness(readiness: Arc<ModelReadiness>, health_reporter: HealthReporter) -> bool {
    let mut phase = readiness.subscribe();
    let settled = match phase.wait_for(LoadPhase::is_settled).await {
        Ok(current) => current.clone(),
        Err(_) => return false,
    };

    match settled {
        LoadPhase::Ready => {
            GrpcServer::set_serving(&health_reporter, SERVICE_NAME).await;
            true
        }
        LoadPhase::Failed(message) => {
            warn!(error = %message, "Model failed to load, health stays NOT_SERVING");
            false
        }
        LoadPhase::Loading => false,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use domain_word2vec::Word2VecError;

    use super::*;

    #[tokio::test]
    async fn test_follow_readiness_returns_after_failed_load() {
        let readiness = ModelReadiness::new();
        let _load = readiness.start_with(|| Err(Word2VecError::Format("bad header".into())));
        let (health_reporter, _health_service) = create_health_service();

        let became_ready = tokio::time::timeout(
            Duration::from_secs(5),
            follow_readiness(Arc::clone(&readiness), health_reporter),
        )
        .await
        .expect("follower should finish once the load fails");

        assert!(!became_ready);
        assert!(!readiness.is_ready());
    }
}
