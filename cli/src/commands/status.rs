//! Status Command - Probe the gateway

use std::sync::Arc;

use clap::Args;
use fhevm_sdk::{ClientRegistry, FhevmApi, FhevmProvider, GatewayConfig};

/// Probe the gateway
#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn execute(self, config: GatewayConfig) -> anyhow::Result<()> {
        println!("Querying gateway at {}...", config.gateway_url);
        println!();

        let network = config.network;
        let chain_id = config.chain_id();

        let provider = FhevmProvider::new(Arc::new(ClientRegistry::new()));
        let ctx = provider.context();
        provider.mount(Arc::new(config)).await;
        let status = ctx.status()?;

        match (&status.client, &status.error) {
            (Some(client), None) if status.is_initialized => {
                println!("✅ Gateway is reachable");
                println!();
                println!("Network:      {}", network);
                println!("Chain ID:     {}", chain_id);
                println!("Ready:        {}", client.is_ready());
            }
            (_, error) => {
                println!("❌ Could not initialize the FHEVM client");
                println!();
                println!("Error: {}", error.as_deref().unwrap_or("unknown"));
                println!();
                println!("Check the gateway URL, or set FHEVM_GATEWAY_URL.");
                anyhow::bail!(
                    "gateway not available: {}",
                    error.as_deref().unwrap_or("unknown")
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhevm_sdk::Network;

    #[tokio::test]
    async fn test_unreachable_gateway_fails_the_command() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = GatewayConfig::new(Network::Localhost, format!("http://{addr}"));
        let err = StatusCommand {}.execute(config).await.unwrap_err();
        assert!(err.to_string().contains("gateway not available"));
    }
}
