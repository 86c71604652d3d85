use crate::{ConfigError, FromEnv, env_or_default, env_parse_or_default};
use std::net::Ipv4Addr;

/// HTTP listener configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HTTP_HOST: defaults to 0.0.0.0 (all interfaces)
    /// - HTTP_PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HTTP_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("HTTP_PORT", 8080)?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(
            [("HTTP_HOST", None::<&str>), ("HTTP_PORT", None::<&str>)],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "0.0.0.0");
                assert_eq!(config.port, 8080);
                assert_eq!(config.address(), "0.0.0.0:8080");
            },
        );
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [("HTTP_HOST", Some("127.0.0.1")), ("HTTP_PORT", Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
            },
        );
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        temp_env::with_var("HTTP_PORT", Some("not_a_number"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("HTTP_PORT"));
        });
    }

    #[test]
    fn test_server_config_from_env_port_out_of_range() {
        temp_env::with_var("HTTP_PORT", Some("99999"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, Ipv4Addr::UNSPECIFIED.to_string());
        assert_eq!(config.port, 8080);
    }
}
