use anchor_lang::prelude::*;

use crate::compat::derive_compatibility;
use crate::constants::{LISTING_SEED, MARKET_SEED, MATCH_SEED, REQUEST_SEED};
use crate::errors::RentalMatchError;
use crate::events::MatchCreated;
use crate::state::{Listing, MarketConfig, MatchStatus, RentalMatch, RentalRequest};

#[derive(Accounts)]
#[instruction(listing_id: u64, request_id: u64)]
pub struct CreateMatch<'info> {
    /// Landlord or tenant proposing the match
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKET_SEED],
        bump = market.bump,
    )]
    pub market: Account<'info, MarketConfig>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing_id.to_le_bytes().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        seeds = [REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump,
    )]
    pub request: Account<'info, RentalRequest>,

    #[account(
        init,
        payer = creator,
        space = 8 + RentalMatch::INIT_SPACE,
        seeds = [MATCH_SEED, market.next_match_id().to_le_bytes().as_ref()],
        bump
    )]
    pub rental_match: Account<'info, RentalMatch>,

    pub system_program: Program<'info, System>,
}

/// Pair a listing with a request.
///
/// # Privacy Model
/// - Compatibility is evaluated over ciphertexts by the FHE executor
/// - The program only derives and publishes the result handles
///
/// # Operations
/// 1. Reject while the market is paused
/// 2. Validate both records are active and unmatched
/// 3. Validate signer is the landlord or the tenant
/// 4. Derive the encrypted compatibility handle
/// 5. Flip both matched flags and open the match
pub fn create_match(ctx: Context<CreateMatch>, listing_id: u64, request_id: u64) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let market = &mut ctx.accounts.market;
    let listing = &mut ctx.accounts.listing;
    let request = &mut ctx.accounts.request;

    market.ensure_not_paused()?;
    listing.ensure_matchable()?;
    request.ensure_matchable()?;

    require!(
        creator == listing.owner || creator == request.owner,
        RentalMatchError::NotMatchCounterparty
    );
    require_keys_neq!(listing.owner, request.owner, RentalMatchError::SelfMatch);

    let handles = derive_compatibility(listing, request, ctx.program_id);
    let match_id = market.take_match_id()?;

    listing.is_matched = true;
    request.is_matched = true;

    let rental_match = &mut ctx.accounts.rental_match;
    rental_match.match_id = match_id;
    rental_match.listing_id = listing_id;
    rental_match.request_id = request_id;
    rental_match.landlord = listing.owner;
    rental_match.tenant = request.owner;
    rental_match.compatibility = handles.compatible;
    rental_match.landlord_confirmed = false;
    rental_match.tenant_confirmed = false;
    rental_match.is_confirmed = false;
    rental_match.status = MatchStatus::Created;
    rental_match.created_at = Clock::get()?.unix_timestamp;
    rental_match.confirmed_at = None;
    rental_match.bump = ctx.bumps.rental_match;

    emit!(MatchCreated {
        match_id,
        listing_id,
        request_id,
        landlord: rental_match.landlord,
        tenant: rental_match.tenant,
        price_ok: handles.price_ok,
        bedrooms_ok: handles.bedrooms_ok,
        postal_ok: handles.postal_ok,
        type_ok: handles.type_ok,
        compatibility: handles.compatible,
    });

    msg!(
        "✅ Match {} created: listing {} <-> request {}",
        match_id,
        listing_id,
        request_id
    );

    Ok(())
}
