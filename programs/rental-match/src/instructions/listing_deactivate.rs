use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::events::ListingDeactivated;
use crate::state::Listing;

#[derive(Accounts)]
#[instruction(listing_id: u64)]
pub struct DeactivateListing<'info> {
    /// Landlord who owns the listing
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing_id.to_le_bytes().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,
}

/// Take a listing off the market before it is matched.
///
/// # Operations
/// 1. Validate signer owns the listing
/// 2. Validate listing is active and unmatched
/// 3. Set is_active to false
pub fn deactivate_listing(ctx: Context<DeactivateListing>, listing_id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.listing.deactivate(&owner)?;

    emit!(ListingDeactivated { listing_id, owner });

    msg!("✅ Listing {} deactivated by landlord: {:?}", listing_id, owner);

    Ok(())
}
