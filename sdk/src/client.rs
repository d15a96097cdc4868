//! Gateway client
//!
//! Thin HTTP wrapper around the hosted encryption gateway. Every call is
//! a single request: no retries, no caching, no client-side timeout.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::encoding;
use crate::error::{SdkError, SdkResult};
use crate::types::{DecryptedValue, EncryptedType, EncryptedValue, PlainValue};

const HEALTH_PATH: &str = "health";
const DECRYPT_PATH: &str = "decrypt";
const PUBLIC_DECRYPT_PATH: &str = "public-decrypt";
const USER_DECRYPT_PATH: &str = "user-decrypt";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecryptRequest<'a> {
    ciphertext: &'a str,
    #[serde(rename = "type")]
    value_type: EncryptedType,
    #[serde(skip_serializing_if = "Option::is_none")]
    contract_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct DecryptResponse {
    value: Value,
}

/// Connected gateway client
pub struct FhevmClient {
    config: GatewayConfig,
    http: reqwest::Client,
    ready: AtomicBool,
}

impl FhevmClient {
    /// Validate the configuration and probe `GET {gateway}/health`.
    pub async fn connect(config: GatewayConfig) -> SdkResult<Self> {
        config
            .validate()
            .map_err(|e| SdkError::Initialization(e.to_string()))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SdkError::Initialization(format!("http client: {e}")))?;

        let client = Self {
            config,
            http,
            ready: AtomicBool::new(false),
        };
        client.probe().await?;
        client.ready.store(true, Ordering::Release);

        info!(
            network = %client.config.network,
            chain_id = client.config.chain_id(),
            gateway = %client.config.gateway_url,
            "FHEVM client ready"
        );

        Ok(client)
    }

    async fn probe(&self) -> SdkResult<()> {
        let url = self.config.endpoint(HEALTH_PATH);
        debug!(%url, "probing gateway");

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let status = response.status();
                warn!(%url, status = status.as_u16(), "gateway health check failed");
                Err(SdkError::Initialization(format!(
                    "health check returned {} {}",
                    status.as_u16(),
                    status_text(status)
                )))
            }
            Err(e) => {
                warn!(%url, error = %e, "gateway unreachable");
                Err(SdkError::Initialization(format!(
                    "gateway unreachable at {url}: {e}"
                )))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Mark the client unusable. Later calls fail with `NotReady`.
    pub fn shutdown(&self) {
        if self.ready.swap(false, Ordering::AcqRel) {
            info!(gateway = %self.config.gateway_url, "FHEVM client shut down");
        }
    }

    fn ensure_ready(&self) -> SdkResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(SdkError::NotReady)
        }
    }

    /// Range-check and encode `value` as `value_type`.
    pub async fn encrypt(
        &self,
        value: impl Into<PlainValue>,
        value_type: EncryptedType,
    ) -> SdkResult<EncryptedValue> {
        self.ensure_ready()?;
        let value = value.into();

        let encrypted = encoding::encode(&value, value_type)
            .inspect_err(|e| debug!(%value_type, error = %e, "encrypt rejected"))?;

        if self.config.debug {
            info!(%value_type, data = %encrypted.data(), "encrypted value");
        } else {
            debug!(%value_type, len = encrypted.bytes.len(), "encrypted value");
        }

        Ok(encrypted)
    }

    pub async fn decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
    ) -> SdkResult<DecryptedValue> {
        self.post_decrypt(
            DECRYPT_PATH,
            DecryptRequest {
                ciphertext,
                value_type,
                contract_address: None,
                signature: None,
            },
        )
        .await
    }

    pub async fn public_decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
    ) -> SdkResult<DecryptedValue> {
        self.post_decrypt(
            PUBLIC_DECRYPT_PATH,
            DecryptRequest {
                ciphertext,
                value_type,
                contract_address: Some(contract_address),
                signature: None,
            },
        )
        .await
    }

    /// Decrypt on behalf of a user. `signature` is the user's EIP-712
    /// signature, passed through untouched.
    pub async fn user_decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
        signature: &str,
    ) -> SdkResult<DecryptedValue> {
        self.post_decrypt(
            USER_DECRYPT_PATH,
            DecryptRequest {
                ciphertext,
                value_type,
                contract_address: Some(contract_address),
                signature: Some(signature),
            },
        )
        .await
    }

    async fn post_decrypt(
        &self,
        path: &str,
        request: DecryptRequest<'_>,
    ) -> SdkResult<DecryptedValue> {
        self.ensure_ready()?;
        let url = self.config.endpoint(path);

        if self.config.debug {
            info!(%url, payload = ?request, "gateway request");
        } else {
            debug!(%url, value_type = %request.value_type, "gateway request");
        }

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "gateway rejected request");
            return Err(SdkError::Gateway {
                status: status.as_u16(),
                status_text: status_text(status).to_string(),
            });
        }

        let body: DecryptResponse = response
            .json()
            .await
            .map_err(|e| SdkError::InvalidResponse(e.to_string()))?;

        let raw = match body.value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(SdkError::InvalidResponse(format!(
                    "unexpected value {other}"
                )))
            }
        };

        DecryptedValue::parse(&raw, request.value_type)
    }
}

impl std::fmt::Debug for FhevmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FhevmClient")
            .field("network", &self.config.network)
            .field("gateway_url", &self.config.gateway_url)
            .field("ready", &self.is_ready())
            .finish()
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}
