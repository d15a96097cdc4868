use anchor_lang::prelude::*;
use anchor_lang::system_program::System;

use crate::constants::{LISTING_SEED, MARKET_SEED, PORTFOLIO_SEED};
use crate::events::ListingCreated;
use crate::instructions::portfolio_record::{record_in_portfolio, PortfolioEntry};
use crate::state::{Handle, Listing, MarketConfig};

#[derive(Accounts)]
pub struct CreateListing<'info> {
    /// Landlord who is listing the property
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKET_SEED],
        bump = market.bump,
    )]
    pub market: Account<'info, MarketConfig>,

    /// Listing account to be created under the next listing id
    #[account(
        init,
        payer = owner,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED, market.next_listing_id().to_le_bytes().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,

    /// CHECK: the owner's portfolio PDA, allocated or resized by `record_in_portfolio`
    #[account(
        mut,
        seeds = [PORTFOLIO_SEED, owner.key().as_ref()],
        bump
    )]
    pub portfolio: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Create a new rental listing from encrypted property attributes.
///
/// # Privacy Model
/// - Landlord identity is public
/// - Price, bedrooms, postal code and property type are FHE handles
///
/// # Operations
/// 1. Reject while the market is paused
/// 2. Assign the next listing id
/// 3. Initialize the listing as active and unmatched
/// 4. Record the id in the landlord's portfolio
pub fn create_listing(
    ctx: Context<CreateListing>,
    price: Handle,
    bedrooms: Handle,
    postal_code: Handle,
    property_type: Handle,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let market = &mut ctx.accounts.market;

    market.ensure_not_paused()?;
    let listing_id = market.take_listing_id()?;
    let created_at = Clock::get()?.unix_timestamp;

    let listing = &mut ctx.accounts.listing;
    listing.listing_id = listing_id;
    listing.owner = owner;
    listing.price = price;
    listing.bedrooms = bedrooms;
    listing.postal_code = postal_code;
    listing.property_type = property_type;
    listing.is_active = true;
    listing.is_matched = false;
    listing.created_at = created_at;
    listing.bump = ctx.bumps.listing;

    record_in_portfolio(
        &ctx.accounts.portfolio,
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
        ctx.bumps.portfolio,
        PortfolioEntry::Listing(listing_id),
    )?;

    emit!(ListingCreated {
        listing_id,
        owner,
        created_at,
    });

    msg!("✅ Listing {} created by landlord: {:?}", listing_id, owner);

    Ok(())
}
