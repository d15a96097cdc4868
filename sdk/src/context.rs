//! Context adapter
//!
//! A provider owns the published client state; contexts handed out by
//! the provider expose status, encrypt and decrypt to the code that
//! needs them. Contexts are passed explicitly, there is no ambient lookup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::client::FhevmClient;
use crate::config::GatewayConfig;
use crate::error::{SdkError, SdkResult};
use crate::registry::ClientRegistry;
use crate::types::{DecryptedValue, EncryptedType, EncryptedValue, PlainValue};

/// State published by a provider
#[derive(Debug, Clone, Default)]
pub struct FhevmStatus {
    pub client: Option<Arc<FhevmClient>>,
    pub is_initialized: bool,
    pub is_initializing: bool,
    pub error: Option<String>,
}

/// Bookkeeping for one operation kind
#[derive(Debug, Clone)]
pub struct HookState<T> {
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for HookState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            result: None,
        }
    }
}

impl<T: Clone> HookState<T> {
    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Settle a call whose provider went away: stop loading, keep the
    /// last result and error as they were.
    fn abandon(&mut self) {
        self.is_loading = false;
    }

    fn finish(&mut self, outcome: &SdkResult<T>) {
        self.is_loading = false;
        match outcome {
            Ok(value) => self.result = Some(value.clone()),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Operations available to code running under a provider.
#[allow(async_fn_in_trait)]
pub trait FhevmApi {
    fn status(&self) -> SdkResult<FhevmStatus>;

    async fn encrypt(
        &self,
        value: PlainValue,
        value_type: EncryptedType,
    ) -> SdkResult<EncryptedValue>;

    /// Signed decrypt on behalf of the user.
    async fn decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
        signature: &str,
    ) -> SdkResult<DecryptedValue>;

    async fn public_decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
    ) -> SdkResult<DecryptedValue>;
}

pub struct FhevmProvider {
    registry: Arc<ClientRegistry>,
    config: Mutex<Option<Arc<GatewayConfig>>>,
    state: watch::Sender<FhevmStatus>,
    mounted: Arc<AtomicBool>,
}

impl FhevmProvider {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        let (state, _) = watch::channel(FhevmStatus::default());
        Self {
            registry,
            config: Mutex::new(None),
            state,
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Initialize against `config`. Does nothing when `config` is the same
    /// allocation as the previous call. Failures are published, not retried.
    pub async fn mount(&self, config: Arc<GatewayConfig>) -> FhevmStatus {
        {
            let mut last = self.config.lock();
            if last.as_ref().is_some_and(|prev| Arc::ptr_eq(prev, &config)) {
                return self.state.borrow().clone();
            }
            *last = Some(Arc::clone(&config));
        }
        self.mounted.store(true, Ordering::Release);

        self.state.send_modify(|s| {
            s.is_initializing = true;
            s.error = None;
        });

        let outcome = self.registry.initialize((*config).clone()).await;

        if !self.mounted.load(Ordering::Acquire) {
            debug!("provider unmounted during initialization, discarding result");
            return self.state.borrow().clone();
        }

        self.state.send_modify(|s| {
            s.is_initializing = false;
            match outcome {
                Ok(client) => {
                    s.client = Some(client);
                    s.is_initialized = true;
                    s.error = None;
                }
                Err(e) => {
                    warn!(error = %e, "FHEVM initialization failed");
                    s.client = None;
                    s.is_initialized = false;
                    s.error = Some(e.to_string());
                }
            }
        });

        self.state.borrow().clone()
    }

    /// Detach the provider. Contexts stop answering and pending results
    /// are dropped. The registry's client is left alone.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
        *self.config.lock() = None;
    }

    pub fn context(&self) -> FhevmContext {
        FhevmContext {
            state: self.state.subscribe(),
            mounted: Arc::clone(&self.mounted),
            encrypt: Arc::new(Mutex::new(HookState::default())),
            decrypt: Arc::new(Mutex::new(HookState::default())),
        }
    }
}

impl Drop for FhevmProvider {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::Release);
    }
}

/// Handle given to code under a provider
#[derive(Clone)]
pub struct FhevmContext {
    state: watch::Receiver<FhevmStatus>,
    mounted: Arc<AtomicBool>,
    encrypt: Arc<Mutex<HookState<EncryptedValue>>>,
    decrypt: Arc<Mutex<HookState<DecryptedValue>>>,
}

impl FhevmContext {
    pub fn encrypt_state(&self) -> HookState<EncryptedValue> {
        self.encrypt.lock().clone()
    }

    pub fn decrypt_state(&self) -> HookState<DecryptedValue> {
        self.decrypt.lock().clone()
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    fn ready_client(&self) -> SdkResult<Arc<FhevmClient>> {
        if !self.is_mounted() {
            return Err(SdkError::NoProvider);
        }
        let state = self.state.borrow();
        match &state.client {
            Some(client) if state.is_initialized && client.is_ready() => Ok(Arc::clone(client)),
            _ => Err(SdkError::NotReady),
        }
    }

    async fn tracked<T, F>(&self, hook: &Mutex<HookState<T>>, call: F) -> SdkResult<T>
    where
        T: Clone,
        F: std::future::Future<Output = SdkResult<T>>,
    {
        hook.lock().begin();
        let outcome = call.await;
        if self.is_mounted() {
            hook.lock().finish(&outcome);
        } else {
            debug!("provider unmounted during call, discarding outcome");
            hook.lock().abandon();
        }
        outcome
    }
}

impl FhevmApi for FhevmContext {
    fn status(&self) -> SdkResult<FhevmStatus> {
        if !self.is_mounted() {
            return Err(SdkError::NoProvider);
        }
        Ok(self.state.borrow().clone())
    }

    async fn encrypt(
        &self,
        value: PlainValue,
        value_type: EncryptedType,
    ) -> SdkResult<EncryptedValue> {
        let client = self.ready_client()?;
        self.tracked(&self.encrypt, client.encrypt(value, value_type))
            .await
    }

    async fn decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
        signature: &str,
    ) -> SdkResult<DecryptedValue> {
        let client = self.ready_client()?;
        self.tracked(
            &self.decrypt,
            client.user_decrypt(ciphertext, value_type, contract_address, signature),
        )
        .await
    }

    async fn public_decrypt(
        &self,
        ciphertext: &str,
        value_type: EncryptedType,
        contract_address: &str,
    ) -> SdkResult<DecryptedValue> {
        let client = self.ready_client()?;
        self.tracked(
            &self.decrypt,
            client.public_decrypt(ciphertext, value_type, contract_address),
        )
        .await
    }
}
