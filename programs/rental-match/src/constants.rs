pub const MARKET_SEED: &[u8] = b"market";
pub const LISTING_SEED: &[u8] = b"listing";
pub const REQUEST_SEED: &[u8] = b"request";
pub const MATCH_SEED: &[u8] = b"match";
pub const PORTFOLIO_SEED: &[u8] = b"portfolio";

pub const MAX_PAUSERS: usize = 8;

/// Domain tags for deterministic FHE result handles.
pub const HANDLE_DOMAIN_BINARY: &[u8] = b"RENTAL_FHE_BINARY_V1";
