//! gRPC Server utilities.
//!
//! Provides helpers for building gRPC servers with health checks.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helper for creating gRPC servers with health checks.
///
/// # Example
///
/// ```ignore
/// use grpc_client::server::{GrpcServer, ServerConfig};
/// use rpc::word2vec::word2_vec_service_server::{Word2VecServiceServer, SERVICE_NAME};
///
/// let config = ServerConfig::from_env()?;
/// let (health_reporter, health_service) = create_health_service();
///
/// // Not serving until the model is loaded
/// GrpcServer::set_not_serving(&health_reporter, SERVICE_NAME).await;
/// GrpcServer::log_startup(&config, SERVICE_NAME);
/// ```
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark a service and the empty service name (used by k8s default probes)
    /// as serving.
    pub async fn set_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::Serving).await;
    }

    /// Mark a service and the empty service name as not serving.
    pub async fn set_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_status(health_reporter, service_name, ServingStatus::NotServing).await;
    }

    async fn set_status(health_reporter: &HealthReporter, service_name: &str, status: ServingStatus) {
        health_reporter
            .set_service_status(service_name, status)
            .await;
        health_reporter.set_service_status("", status).await;

        info!(service = service_name, status = ?status, "Health status updated");
    }
}
