//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};
use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 9090;
const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

/// Configuration for the gRPC listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 9090)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 4MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 4MB)
    pub max_encoding_message_size: usize,
    /// TCP keepalive interval in seconds (default: 60)
    pub keepalive_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
            enable_compression: true,
            max_decoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_encoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            keepalive_secs: 60,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
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

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: 9090)
    /// - `GRPC_COMPRESSION` (default: true; "false" or "0" disables)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4MB)
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("GRPC_PORT", DEFAULT_PORT)?;
        let compression = env_or_default("GRPC_COMPRESSION", "true");
        let enable_compression = !matches!(compression.trim(), "false" | "0");
        let max_message_size = env_parse_or_default("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?;

        Ok(Self {
            host,
            port,
            enable_compression,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
            keepalive_secs: 60,
        })
    }
}
