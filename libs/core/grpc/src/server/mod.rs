//! gRPC Server helpers
//!
//! Configuration, health reporting and shutdown handling shared by the
//! service binaries.
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
//! use rpc::word2vec::word2_vec_service_server::{Word2VecServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//!
//! GrpcServer::set_not_serving(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(Word2VecServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;
mod shutdown;

pub use builder::GrpcServer;
pub use config::ServerConfig;
pub use shutdown::shutdown_signal;

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;
