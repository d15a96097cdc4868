//! Confidential rental matching CLI
//!
//! Talks to the FHEVM gateway and prepares encrypted inputs for the
//! rental-match program.
//!
//! # Usage
//!
//! ```bash
//! # Check that the gateway is up
//! rentfhe --gateway-url https://gateway.example.org status
//!
//! # Encrypt a landlord's listing
//! rentfhe listing --price 2000 --bedrooms 2 --postal-code 12345 --property-type house
//!
//! # Encrypt a tenant's request
//! rentfhe request --max-budget 2500 --min-bedrooms 2 --postal-code 12345 --property-type house
//!
//! # Decrypt a value the contract made public
//! rentfhe decrypt 0xd0070000 --type euint32 --contract 0x5FbDB2315678afecb367f032d93F642f64180aa3
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use fhevm_sdk::{ClientRegistry, FhevmContext, FhevmProvider, GatewayConfig, Network};

mod commands;
mod logging;

use commands::{DecryptCommand, EncryptCommand, ListingCommand, RequestCommand, StatusCommand};

/// Confidential rental matching
#[derive(Parser)]
#[command(name = "rentfhe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Encrypt and decrypt rental data through an FHEVM gateway", long_about = None)]
struct Cli {
    /// Path to a TOML gateway configuration (overrides the flags below)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Gateway base URL
    #[arg(
        long,
        global = true,
        env = "FHEVM_GATEWAY_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    gateway_url: String,

    /// Network (sepolia, mainnet, localhost)
    #[arg(long, global = true, default_value = "sepolia")]
    network: Network,

    /// Log gateway payloads
    #[arg(long, global = true)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the gateway
    Status(StatusCommand),

    /// Encrypt a single value
    Encrypt(EncryptCommand),

    /// Decrypt a ciphertext
    Decrypt(DecryptCommand),

    /// Encrypt the fields of a landlord listing
    Listing(ListingCommand),

    /// Encrypt the fields of a tenant request
    Request(RequestCommand),
}

impl Cli {
    fn gateway_config(&self) -> anyhow::Result<GatewayConfig> {
        let config = match &self.config {
            Some(path) => GatewayConfig::load(path)?,
            None => GatewayConfig::new(self.network, self.gateway_url.clone()),
        };
        Ok(if self.debug { config.with_debug(true) } else { config })
    }
}

/// Mount a provider and hand back a context. The provider must outlive
/// the context.
async fn connect(config: GatewayConfig) -> anyhow::Result<(FhevmProvider, FhevmContext)> {
    let provider = FhevmProvider::new(Arc::new(ClientRegistry::new()));
    let ctx = provider.context();

    let status = provider.mount(Arc::new(config)).await;
    if let Some(error) = status.error {
        anyhow::bail!(error);
    }

    Ok((provider, ctx))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, cli.json_logs)?;

    let config = cli.gateway_config()?;

    match cli.command {
        Commands::Status(cmd) => cmd.execute(config).await,
        Commands::Encrypt(cmd) => {
            let (_provider, ctx) = connect(config).await?;
            cmd.execute(&ctx).await
        }
        Commands::Decrypt(cmd) => {
            let (_provider, ctx) = connect(config).await?;
            cmd.execute(&ctx).await
        }
        Commands::Listing(cmd) => {
            let (_provider, ctx) = connect(config).await?;
            cmd.execute(&ctx).await
        }
        Commands::Request(cmd) => {
            let (_provider, ctx) = connect(config).await?;
            cmd.execute(&ctx).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_listing_fields() {
        let cli = Cli::try_parse_from([
            "rentfhe",
            "--network",
            "localhost",
            "listing",
            "--price",
            "2000",
            "--bedrooms",
            "2",
            "--postal-code",
            "12345",
            "--property-type",
            "house",
        ])
        .unwrap();

        assert_eq!(cli.network, Network::Localhost);
        assert!(matches!(cli.command, Commands::Listing(_)));

        let config = cli.gateway_config().unwrap();
        assert_eq!(config.chain_id(), 31337);
    }

    #[test]
    fn test_cli_rejects_signature_without_contract() {
        let parsed = Cli::try_parse_from(["rentfhe", "decrypt", "0x01", "--signature", "0xsig"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_debug_flag_reaches_config() {
        let cli = Cli::try_parse_from(["rentfhe", "--debug", "status"]).unwrap();
        assert!(cli.gateway_config().unwrap().debug);
    }
}
