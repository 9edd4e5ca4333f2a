use std::time::Duration;
use tonic::transport::Endpoint;

/// Configuration for gRPC channel creation
///
/// Builder over the HTTP/2 and TCP settings applied to a tonic `Endpoint`.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  /// Per-request deadline. `None` leaves long-lived streams unbounded at the
  /// transport level; callers bound them themselves.
  pub timeout: Option<Duration>,

  // Window sizes (HTTP/2 flow control)
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: Some(Duration::from_secs(30)),
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl ChannelConfig {
  /// Create a new configuration with production defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Defaults for bidirectional streaming clients.
  ///
  /// Identical to [`ChannelConfig::default`] except that no per-request
  /// deadline is applied.
  pub fn streaming() -> Self {
    Self {
      timeout: None,
      ..Self::default()
    }
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the request timeout for individual RPCs
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Remove the per-request deadline
  pub fn without_request_timeout(mut self) -> Self {
    self.timeout = None;
    self
  }

  /// Set the HTTP/2 keep-alive interval
  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.http2_keep_alive_interval = Some(interval);
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Set both connection and stream window sizes to the same value
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new()
  ///     .with_window_size(2 * 1024 * 1024); // 2MB windows
  /// ```
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.initial_connection_window_size = Some(size);
    self.initial_stream_window_size = Some(size);
    self
  }

  /// Apply this configuration to a tonic Endpoint
  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle)
      .connect_timeout(self.connect_timeout);

    if let Some(timeout) = self.timeout {
      endpoint = endpoint.timeout(timeout);
    }

    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }
    endpoint = endpoint.http2_adaptive_window(self.http2_adaptive_window);

    endpoint = endpoint.tcp_nodelay(self.tcp_nodelay);
    if let Some(keepalive) = self.tcp_keepalive {
      endpoint = endpoint.tcp_keepalive(Some(keepalive));
    }

    endpoint
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.initial_connection_window_size, Some(1024 * 1024));
    assert!(config.tcp_nodelay);
    assert!(config.http2_adaptive_window);
  }

  #[test]
  fn test_streaming_has_no_request_deadline() {
    let config = ChannelConfig::streaming();
    assert_eq!(config.timeout, None);
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(120))
      .with_window_size(2 * 1024 * 1024)
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.timeout, Some(Duration::from_secs(120)));
    assert_eq!(config.initial_stream_window_size, Some(2 * 1024 * 1024));
    assert_eq!(config.http2_keep_alive_interval, None);
    assert_eq!(config.without_request_timeout().timeout, None);
  }
}
