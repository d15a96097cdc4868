use anchor_lang::prelude::*;

use crate::constants::PORTFOLIO_SEED;
use crate::state::Portfolio;

#[derive(Accounts)]
pub struct QueryPortfolio<'info> {
    /// CHECK: any identity may be looked up, no signature required
    pub owner: UncheckedAccount<'info>,

    /// Absent when the identity has never created anything
    #[account(
        seeds = [PORTFOLIO_SEED, owner.key().as_ref()],
        bump = portfolio.bump,
    )]
    pub portfolio: Option<Account<'info, Portfolio>>,
}

pub fn get_listings_by_owner(ctx: Context<QueryPortfolio>) -> Result<Vec<u64>> {
    Ok(ctx
        .accounts
        .portfolio
        .as_ref()
        .map(|p| p.listing_ids.clone())
        .unwrap_or_default())
}

pub fn get_requests_by_owner(ctx: Context<QueryPortfolio>) -> Result<Vec<u64>> {
    Ok(ctx
        .accounts
        .portfolio
        .as_ref()
        .map(|p| p.request_ids.clone())
        .unwrap_or_default())
}
