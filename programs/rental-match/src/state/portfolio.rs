use anchor_lang::prelude::*;

/// Per-identity index of created listings and requests.
///
/// The account has no fixed capacity: it is sized to its contents and
/// grown by one slot on every create.
#[account]
pub struct Portfolio {
    /// The identity this index belongs to
    pub owner: Pubkey,

    pub listing_ids: Vec<u64>,

    pub request_ids: Vec<u64>,

    pub bump: u8,
}

impl Portfolio {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            listing_ids: Vec::new(),
            request_ids: Vec::new(),
            bump,
        }
    }

    /// Account size, discriminator included, for the given id counts.
    pub fn space_for(listings: usize, requests: usize) -> usize {
        8 + 32 + (4 + 8 * listings) + (4 + 8 * requests) + 1
    }

    pub fn space(&self) -> usize {
        Self::space_for(self.listing_ids.len(), self.request_ids.len())
    }

    pub fn record_listing(&mut self, listing_id: u64) {
        self.listing_ids.push(listing_id);
    }

    pub fn record_request(&mut self, request_id: u64) {
        self.request_ids.push(request_id);
    }
}
