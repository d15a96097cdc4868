//! Client SDK for the FHEVM encryption gateway
//!
//! - [`client::FhevmClient`]: health probe, encrypt, decrypt, public and user decrypt
//! - [`registry::ClientRegistry`]: holds at most one ready client
//! - [`context`]: provider and context handle exposing status/encrypt/decrypt
//!
//! Encryption here is fixed-width byte packing; the homomorphic work is
//! done by the gateway.

pub mod client;
pub mod config;
pub mod context;
pub mod encoding;
pub mod error;
pub mod registry;
pub mod types;

pub use client::FhevmClient;
pub use config::{GatewayConfig, Network};
pub use context::{FhevmApi, FhevmContext, FhevmProvider, FhevmStatus, HookState};
pub use error::{SdkError, SdkResult};
pub use registry::{global, init_fhevm, ClientRegistry};
pub use types::{DecryptedValue, EncryptedType, EncryptedValue, PlainValue, PropertyType};
