use anchor_lang::prelude::*;

pub mod compat;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");

#[program]
pub mod rental_match {
    use super::*;

    pub fn initialize_market(ctx: Context<InitializeMarket>) -> Result<()> {
        instructions::initialize_market(ctx)
    }

    pub fn add_pauser(ctx: Context<ManagePausers>, pauser: Pubkey) -> Result<()> {
        instructions::add_pauser(ctx, pauser)
    }

    pub fn remove_pauser(ctx: Context<ManagePausers>, pauser: Pubkey) -> Result<()> {
        instructions::remove_pauser(ctx, pauser)
    }

    pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::unpause(ctx)
    }

    pub fn create_listing(
        ctx: Context<CreateListing>,
        price: [u8; 32],
        bedrooms: [u8; 32],
        postal_code: [u8; 32],
        property_type: [u8; 32],
    ) -> Result<()> {
        instructions::create_listing(ctx, price, bedrooms, postal_code, property_type)
    }

    pub fn deactivate_listing(ctx: Context<DeactivateListing>, listing_id: u64) -> Result<()> {
        instructions::deactivate_listing(ctx, listing_id)
    }

    pub fn create_request(
        ctx: Context<CreateRequest>,
        max_budget: [u8; 32],
        min_bedrooms: [u8; 32],
        postal_code: [u8; 32],
        property_type: [u8; 32],
    ) -> Result<()> {
        instructions::create_request(ctx, max_budget, min_bedrooms, postal_code, property_type)
    }

    pub fn cancel_request(ctx: Context<CancelRequest>, request_id: u64) -> Result<()> {
        instructions::cancel_request(ctx, request_id)
    }

    pub fn create_match(ctx: Context<CreateMatch>, listing_id: u64, request_id: u64) -> Result<()> {
        instructions::create_match(ctx, listing_id, request_id)
    }

    pub fn confirm_match(ctx: Context<ConfirmMatch>, match_id: u64) -> Result<()> {
        instructions::confirm_match(ctx, match_id)
    }

    pub fn get_listings_by_owner(ctx: Context<QueryPortfolio>) -> Result<Vec<u64>> {
        instructions::get_listings_by_owner(ctx)
    }

    pub fn get_requests_by_owner(ctx: Context<QueryPortfolio>) -> Result<Vec<u64>> {
        instructions::get_requests_by_owner(ctx)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use anchor_lang::error::Error;

    /// Numeric code of an Anchor error, for comparing against `u32::from(RentalMatchError::..)`.
    pub fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => u32::MAX,
        }
    }
}
