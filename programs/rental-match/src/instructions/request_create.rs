use anchor_lang::prelude::*;
use anchor_lang::system_program::System;

use crate::constants::{MARKET_SEED, PORTFOLIO_SEED, REQUEST_SEED};
use crate::events::RequestCreated;
use crate::instructions::portfolio_record::{record_in_portfolio, PortfolioEntry};
use crate::state::{Handle, MarketConfig, RentalRequest};

#[derive(Accounts)]
pub struct CreateRequest<'info> {
    /// Tenant who is looking for a property
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKET_SEED],
        bump = market.bump,
    )]
    pub market: Account<'info, MarketConfig>,

    #[account(
        init,
        payer = owner,
        space = 8 + RentalRequest::INIT_SPACE,
        seeds = [REQUEST_SEED, market.next_request_id().to_le_bytes().as_ref()],
        bump
    )]
    pub request: Account<'info, RentalRequest>,

    /// CHECK: the owner's portfolio PDA, allocated or resized by `record_in_portfolio`
    #[account(
        mut,
        seeds = [PORTFOLIO_SEED, owner.key().as_ref()],
        bump
    )]
    pub portfolio: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Create a tenant request from encrypted search criteria.
///
/// # Operations
/// 1. Reject while the market is paused
/// 2. Assign the next request id
/// 3. Initialize the request as active and unmatched
/// 4. Record the id in the tenant's portfolio
pub fn create_request(
    ctx: Context<CreateRequest>,
    max_budget: Handle,
    min_bedrooms: Handle,
    postal_code: Handle,
    property_type: Handle,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let market = &mut ctx.accounts.market;

    market.ensure_not_paused()?;
    let request_id = market.take_request_id()?;
    let created_at = Clock::get()?.unix_timestamp;

    let request = &mut ctx.accounts.request;
    request.request_id = request_id;
    request.owner = owner;
    request.max_budget = max_budget;
    request.min_bedrooms = min_bedrooms;
    request.postal_code = postal_code;
    request.property_type = property_type;
    request.is_active = true;
    request.is_matched = false;
    request.created_at = created_at;
    request.bump = ctx.bumps.request;

    record_in_portfolio(
        &ctx.accounts.portfolio,
        &ctx.accounts.owner,
        &ctx.accounts.system_program,
        ctx.bumps.portfolio,
        PortfolioEntry::Request(request_id),
    )?;

    emit!(RequestCreated {
        request_id,
        owner,
        created_at,
    });

    msg!("✅ Request {} created by tenant: {:?}", request_id, owner);

    Ok(())
}
