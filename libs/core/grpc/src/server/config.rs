//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use core_config::{ConfigError, FromEnv, env_flag, env_or_default, env_parse};

const DEFAULT_HOST: &str = "[::1]";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: [::1] for IPv6 localhost)
    pub host: String,
    /// Port to listen on (default: 8080)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 8MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 8MB)
    pub max_encoding_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            enable_compression: true,
            max_decoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_encoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: [::1])
    /// - `GRPC_PORT` (default: 8080)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608 / 8MB)
    fn from_env() -> Result<Self, ConfigError> {
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", DEFAULT_HOST),
            port: env_parse("GRPC_PORT", DEFAULT_PORT)?,
            enable_compression: env_flag("GRPC_COMPRESSION", true),
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
        })
    }
}

impl ServerConfig {
    /// Create a new server config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Set maximum message size.
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_decoding_message_size = size;
        self.max_encoding_message_size = size;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.addr_string().parse()
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "[::1]");
        assert_eq!(config.port, 8080);
        assert!(config.enable_compression);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("0.0.0.0")
            .with_port(50051)
            .with_compression(false)
            .with_max_message_size(1024);

        assert_eq!(config.addr_string(), "0.0.0.0:50051");
        assert!(!config.enable_compression);
        assert_eq!(config.max_decoding_message_size, 1024);
        assert_eq!(config.max_encoding_message_size, 1024);
    }

    #[test]
    fn test_from_env_with_overrides() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("9090")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "127.0.0.1:9090");
                assert!(!config.enable_compression);
                assert_eq!(config.max_decoding_message_size, DEFAULT_MAX_MESSAGE_SIZE);
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port() {
        temp_env::with_var("GRPC_PORT", Some("not_a_number"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_unparseable_host_fails_socket_addr() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(config.socket_addr().is_err());
    }
}
