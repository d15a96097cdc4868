use anchor_lang::prelude::*;

use crate::constants::MARKET_SEED;
use crate::events::MarketInitialized;
use crate::state::MarketConfig;

#[derive(Accounts)]
pub struct InitializeMarket<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + MarketConfig::INIT_SPACE,
        seeds = [MARKET_SEED],
        bump
    )]
    pub market: Account<'info, MarketConfig>,

    pub system_program: Program<'info, System>,
}

/// Create the market. The signer becomes owner and first pauser.
pub fn initialize_market(ctx: Context<InitializeMarket>) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let market = &mut ctx.accounts.market;
    market.owner = owner;
    market.paused = false;
    market.pausers = vec![owner];
    market.listing_count = 0;
    market.request_count = 0;
    market.match_count = 0;
    market.created_at = clock.unix_timestamp;
    market.bump = ctx.bumps.market;

    emit!(MarketInitialized {
        market: market.key(),
        owner,
    });

    msg!("✅ Market initialized by owner: {:?}", owner);

    Ok(())
}
