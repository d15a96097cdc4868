use anchor_lang::prelude::*;

use crate::constants::MARKET_SEED;
use crate::events::{MarketPaused, MarketUnpaused};
use crate::state::MarketConfig;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub pauser: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKET_SEED],
        bump = market.bump,
    )]
    pub market: Account<'info, MarketConfig>,
}

/// Halt listing, request and match creation. Read-only queries and
/// confirmations of existing matches keep working.
pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
    let pauser = ctx.accounts.pauser.key();
    ctx.accounts.market.set_paused(&pauser, true)?;

    emit!(MarketPaused { pauser });
    msg!("⏸️ Market paused by: {:?}", pauser);

    Ok(())
}

pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
    let pauser = ctx.accounts.pauser.key();
    ctx.accounts.market.set_paused(&pauser, false)?;

    emit!(MarketUnpaused { pauser });
    msg!("▶️ Market unpaused by: {:?}", pauser);

    Ok(())
}
