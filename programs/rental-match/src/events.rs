use anchor_lang::prelude::*;


#[event]
pub struct MarketInitialized {
    pub market: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct PauserAdded {
    pub owner: Pubkey,
    pub pauser: Pubkey,
}

#[event]
pub struct PauserRemoved {
    pub owner: Pubkey,
    pub pauser: Pubkey,
}

#[event]
pub struct MarketPaused {
    pub pauser: Pubkey,
}

#[event]
pub struct MarketUnpaused {
    pub pauser: Pubkey,
}

#[event]
pub struct ListingCreated {
    pub listing_id: u64,
    pub owner: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct ListingDeactivated {
    pub listing_id: u64,
    pub owner: Pubkey,
}

#[event]
pub struct RequestCreated {
    pub request_id: u64,
    pub owner: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct RequestCancelled {
    pub request_id: u64,
    pub owner: Pubkey,
}

/// Picked up by the FHE executor, which evaluates the predicates
/// and binds the results to these handles.
#[event]
pub struct MatchCreated {
    pub match_id: u64,
    pub listing_id: u64,
    pub request_id: u64,
    pub landlord: Pubkey,
    pub tenant: Pubkey,
    pub price_ok: [u8; 32],
    pub bedrooms_ok: [u8; 32],
    pub postal_ok: [u8; 32],
    pub type_ok: [u8; 32],
    pub compatibility: [u8; 32],
}

#[event]
pub struct MatchConfirmed {
    pub match_id: u64,
    pub party: Pubkey,
    pub fully_confirmed: bool,
}
