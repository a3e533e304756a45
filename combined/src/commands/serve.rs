//! Serve command - runs the gateway in this process.

use gateway_lib::config::GatewayConfig;

use crate::cli::ServeArgs;

pub async fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::info!("Starting HTTP form on http://{}:{}", config.host, config.port);
    gateway_lib::run_server_with_config(config).await
}
