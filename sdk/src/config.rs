//! Gateway configuration
//!
//! Handles building, validating and loading the client configuration
//! from TOML files.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::parse_address;
use crate::error::{SdkError, SdkResult};

/// Networks the gateway client knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Sepolia,
    Mainnet,
    Localhost,
}

impl Network {
    pub fn default_chain_id(&self) -> u64 {
        match self {
            Network::Sepolia => 11_155_111,
            Network::Mainnet => 1,
            Network::Localhost => 31_337,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Sepolia => "sepolia",
            Network::Mainnet => "mainnet",
            Network::Localhost => "localhost",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sepolia" => Ok(Network::Sepolia),
            "mainnet" => Ok(Network::Mainnet),
            "localhost" | "local" => Ok(Network::Localhost),
            other => Err(SdkError::Config(format!("unknown network: {other}"))),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    pub network: Network,

    /// Base URL of the encryption gateway
    pub gateway_url: String,

    /// ACL contract address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_address: Option<String>,

    /// KMS verifier contract address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_verifier_address: Option<String>,

    /// Overrides the network's default chain id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Log gateway payloads at info level
    #[serde(default)]
    pub debug: bool,
}

impl GatewayConfig {
    pub fn new(network: Network, gateway_url: impl Into<String>) -> Self {
        Self {
            network,
            gateway_url: gateway_url.into(),
            acl_address: None,
            kms_verifier_address: None,
            chain_id: None,
            debug: false,
        }
    }

    pub fn with_acl_address(mut self, address: impl Into<String>) -> Self {
        self.acl_address = Some(address.into());
        self
    }

    pub fn with_kms_verifier_address(mut self, address: impl Into<String>) -> Self {
        self.kms_verifier_address = Some(address.into());
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SdkResult<Self> {
        if !path.exists() {
            return Err(SdkError::Config(format!(
                "config not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SdkResult<()> {
        let url = self.gateway_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "gateway URL must be http(s): {url:?}"
            )));
        }
        let host = url
            .split_once("://")
            .map(|(_, rest)| rest.trim_end_matches('/'))
            .unwrap_or_default();
        if host.is_empty() {
            return Err(SdkError::Config(format!("gateway URL has no host: {url:?}")));
        }

        for (name, address) in [
            ("ACL", &self.acl_address),
            ("KMS verifier", &self.kms_verifier_address),
        ] {
            if let Some(address) = address {
                parse_address(address)
                    .map_err(|e| SdkError::Config(format!("{name} address: {e}")))?;
            }
        }

        if self.chain_id == Some(0) {
            return Err(SdkError::Config("chain id must be non-zero".into()));
        }

        Ok(())
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id.unwrap_or_else(|| self.network.default_chain_id())
    }

    /// Absolute URL of a gateway endpoint, e.g. `endpoint("health")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.gateway_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACL: &str = "0x339EcE85B9E11a3A3AA557582784a15d7F82AAf2";

    #[test]
    fn endpoints_ignore_trailing_slash() {
        let config = GatewayConfig::new(Network::Sepolia, "https://gateway.example.org/");
        assert_eq!(config.endpoint("health"), "https://gateway.example.org/health");
        assert_eq!(
            config.endpoint("/public-decrypt"),
            "https://gateway.example.org/public-decrypt"
        );
    }

    #[test]
    fn chain_id_defaults_per_network() {
        assert_eq!(GatewayConfig::new(Network::Sepolia, "http://x").chain_id(), 11_155_111);
        assert_eq!(GatewayConfig::new(Network::Localhost, "http://x").chain_id(), 31_337);
        assert_eq!(
            GatewayConfig::new(Network::Mainnet, "http://x").with_chain_id(5).chain_id(),
            5
        );
    }

    #[test]
    fn validation_rejects_bad_urls_and_addresses() {
        assert!(GatewayConfig::new(Network::Sepolia, "ftp://gw").validate().is_err());
        assert!(GatewayConfig::new(Network::Sepolia, "https://").validate().is_err());
        assert!(GatewayConfig::new(Network::Sepolia, "https://gw")
            .with_acl_address("0x1234")
            .validate()
            .is_err());
        assert!(GatewayConfig::new(Network::Sepolia, "https://gw")
            .with_acl_address(ACL)
            .validate()
            .is_ok());
        assert!(GatewayConfig::new(Network::Sepolia, "https://gw")
            .with_chain_id(0)
            .validate()
            .is_err());
    }

    #[test]
    fn parses_toml() {
        let config: GatewayConfig = toml::from_str(&format!(
            r#"
            network = "sepolia"
            gatewayUrl = "https://gateway.sepolia.zama.ai"
            aclAddress = "{ACL}"
            debug = true
            "#
        ))
        .unwrap();
        assert_eq!(config.network, Network::Sepolia);
        assert_eq!(config.acl_address.as_deref(), Some(ACL));
        assert!(config.debug);
        assert!(config.kms_verifier_address.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GatewayConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn network_names() {
        assert_eq!("Sepolia".parse::<Network>().unwrap(), Network::Sepolia);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Localhost);
        assert!("goerli".parse::<Network>().is_err());
    }
}
