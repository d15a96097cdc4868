use anchor_lang::prelude::*;

use crate::errors::RentalMatchError;

/// What a tenant is looking for. Mirrors `Listing`, with every
/// criterion encrypted.
#[account]
#[derive(InitSpace)]
pub struct RentalRequest {
    pub request_id: u64,

    /// Tenant who created the request
    pub owner: Pubkey,

    /// Maximum monthly rent (euint32)
    pub max_budget: [u8; 32],

    /// Minimum bedroom count (euint8)
    pub min_bedrooms: [u8; 32],

    /// Preferred postal code (euint32)
    pub postal_code: [u8; 32],

    /// Preferred property type tag (euint8)
    pub property_type: [u8; 32],

    pub is_active: bool,
    pub is_matched: bool,

    pub created_at: i64,
    pub bump: u8,
}

impl RentalRequest {
    pub fn ensure_matchable(&self) -> Result<()> {
        require!(self.is_active, RentalMatchError::RequestNotActive);
        require!(!self.is_matched, RentalMatchError::RequestAlreadyMatched);
        Ok(())
    }

    pub fn cancel(&mut self, by: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *by, RentalMatchError::NotRequestOwner);
        require!(self.is_active, RentalMatchError::RequestNotActive);
        require!(!self.is_matched, RentalMatchError::RequestAlreadyMatched);
        self.is_active = false;
        Ok(())
    }
}
