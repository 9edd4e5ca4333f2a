pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

fn endpoint_for(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  Ok(config.apply_to_endpoint(endpoint))
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Returns immediately without establishing a connection, so a client can be
/// built before the server is listening.
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint_for(&addr, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %addr,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

/// Creates a gRPC channel with custom configuration and connects eagerly
///
/// ## Example
/// ```ignore
/// use grpc_client::{ChannelConfig, create_channel_with_config};
/// use rpc::word2vec::word2_vec_service_client::Word2VecServiceClient;
///
/// let channel = create_channel_with_config("http://[::1]:8080", ChannelConfig::streaming()).await?;
/// let client = Word2VecServiceClient::new(channel);
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let connect_timeout = config.connect_timeout;
  let endpoint = endpoint_for(&addr, config)?;

  tracing::debug!(target: "grpc_client", addr = %addr, "Creating gRPC channel");

  match tokio::time::timeout(connect_timeout, endpoint.connect()).await {
    Ok(Ok(channel)) => Ok(channel),
    Ok(Err(e)) => {
      tracing::error!(
        target: "grpc_client",
        addr = %addr,
        error = ?e,
        "Failed to connect to gRPC service"
      );
      Err(GrpcError::ConnectionFailed(e))
    }
    Err(_) => {
      tracing::error!(target: "grpc_client", addr = %addr, "Timed out connecting to gRPC service");
      Err(GrpcError::ConnectionTimeout(connect_timeout))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel_with_config("not a valid uri", ChannelConfig::default()).await;
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // Nothing listens here; a lazy channel must still be created.
    let result = create_channel_lazy_with_config("http://127.0.0.1:9", ChannelConfig::streaming());
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_connection_failed() {
    let config = ChannelConfig::new().with_connect_timeout(std::time::Duration::from_millis(500));
    let result = create_channel_with_config("http://127.0.0.1:9", config).await;
    assert!(result.is_err());
  }
}
