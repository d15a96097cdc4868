//! State account definitions

/// Encrypted FHE handle as produced by the gateway SDK.
pub type Handle = [u8; 32];

pub mod listing;
pub mod market_config;
pub mod portfolio;
pub mod rental_match;
pub mod rental_request;

pub use listing::*;
pub use market_config::*;
pub use portfolio::*;
pub use rental_match::*;
pub use rental_request::*;
