//! Client registry
//!
//! Holds at most one ready client. Applications own a `ClientRegistry`
//! and pass it where needed; `global()` keeps a process-wide instance for
//! callers that want a single shared client.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::client::FhevmClient;
use crate::config::GatewayConfig;
use crate::error::SdkResult;

#[derive(Debug, Default)]
pub struct ClientRegistry {
    slot: Mutex<Option<Arc<FhevmClient>>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the held client if it is ready, otherwise connect a new one
    /// and hold it. Concurrent callers are serialized.
    pub async fn initialize(&self, config: GatewayConfig) -> SdkResult<Arc<FhevmClient>> {
        let mut slot = self.slot.lock().await;

        if let Some(client) = slot.as_ref().filter(|c| c.is_ready()) {
            debug!(gateway = %client.config().gateway_url, "reusing ready FHEVM client");
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(FhevmClient::connect(config).await?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    pub async fn current(&self) -> Option<Arc<FhevmClient>> {
        self.slot.lock().await.clone()
    }

    /// Shut down and drop the held client.
    pub async fn teardown(&self) {
        if let Some(client) = self.slot.lock().await.take() {
            client.shutdown();
            info!("FHEVM client registry cleared");
        }
    }
}

static GLOBAL: Lazy<ClientRegistry> = Lazy::new(ClientRegistry::new);

/// The process-wide registry.
pub fn global() -> &'static ClientRegistry {
    &GLOBAL
}

/// Initialize the process-wide client.
pub async fn init_fhevm(config: GatewayConfig) -> SdkResult<Arc<FhevmClient>> {
    global().initialize(config).await
}
