//! # gRPC Client/Server Library
//!
//! Shared tonic plumbing for the word2vec services: tuned client channels,
//! server configuration, health reporting and graceful shutdown.
//!
//! ## Quick Start
//!
//! ### Client
//! ```ignore
//! use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
//! use rpc::word2vec::word2_vec_service_client::Word2VecServiceClient;
//!
//! let channel = create_channel_lazy_with_config("http://[::1]:8080", ChannelConfig::streaming())?;
//! let client = Word2VecServiceClient::new(channel)
//!     .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
//!     .send_compressed(tonic::codec::CompressionEncoding::Zstd);
//! ```
//!
//! ### Server
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::set_not_serving(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(my_service)
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

pub mod channel;
pub mod error;
pub mod server;

// Re-export main types and functions for convenience
pub use channel::{ChannelConfig, create_channel_lazy_with_config, create_channel_with_config};
pub use error::{GrpcError, GrpcResult};
