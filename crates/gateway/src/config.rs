//! Gateway configuration.

use std::env;

use common::ServiceConfig;

/// Longest amount text accepted over HTTP; the config can only lower it.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 64;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Service name for logging
    pub service_name: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Longest amount text accepted by the form and the JSON API
    pub max_input_length: usize,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// `GATEWAY_*` variables win over the shared `SERVER_*` ones.
    pub fn from_env() -> Self {
        let service = ServiceConfig::from_env();
        Self {
            service_name: service.service_name,
            host: env::var("GATEWAY_HOST").unwrap_or(service.host),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(service.port),
            max_input_length: env::var("GATEWAY_MAX_INPUT_LENGTH")
                .ok()
                .and_then(|l| l.parse().ok())
                .map_or(DEFAULT_MAX_INPUT_LENGTH, |l: usize| l.min(DEFAULT_MAX_INPUT_LENGTH)),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        let service = ServiceConfig::default();
        Self {
            service_name: service.service_name,
            host: service.host,
            port: service.port,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_addr() {
        let config = GatewayConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);
    }

    #[test]
    fn test_server_addr_uses_host_and_port() {
        let config = GatewayConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..GatewayConfig::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
