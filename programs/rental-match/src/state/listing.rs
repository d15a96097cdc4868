use anchor_lang::prelude::*;

use crate::errors::RentalMatchError;

/// Property offered by a landlord.
///
/// Privacy: the owner is public, every property attribute is an
/// encrypted handle and never appears in plaintext on-chain.
#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub listing_id: u64,

    /// Landlord who created the listing
    pub owner: Pubkey,

    /// Monthly rent (euint32)
    pub price: [u8; 32],

    /// Bedroom count (euint8)
    pub bedrooms: [u8; 32],

    /// Postal code (euint32)
    pub postal_code: [u8; 32],

    /// Property type tag (euint8)
    pub property_type: [u8; 32],

    pub is_active: bool,
    pub is_matched: bool,

    pub created_at: i64,
    pub bump: u8,
}

impl Listing {
    pub fn ensure_matchable(&self) -> Result<()> {
        require!(self.is_active, RentalMatchError::ListingNotActive);
        require!(!self.is_matched, RentalMatchError::ListingAlreadyMatched);
        Ok(())
    }

    /// Owner-only; a matched listing is frozen.
    pub fn deactivate(&mut self, by: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *by, RentalMatchError::NotListingOwner);
        require!(self.is_active, RentalMatchError::ListingNotActive);
        require!(!self.is_matched, RentalMatchError::ListingAlreadyMatched);
        self.is_active = false;
        Ok(())
    }
}
