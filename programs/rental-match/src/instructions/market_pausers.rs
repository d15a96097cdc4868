use anchor_lang::prelude::*;

use crate::constants::MARKET_SEED;
use crate::errors::RentalMatchError;
use crate::events::{PauserAdded, PauserRemoved};
use crate::state::MarketConfig;

#[derive(Accounts)]
pub struct ManagePausers<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKET_SEED],
        bump = market.bump,
        has_one = owner @ RentalMatchError::NotOwner
    )]
    pub market: Account<'info, MarketConfig>,
}

pub fn add_pauser(ctx: Context<ManagePausers>, pauser: Pubkey) -> Result<()> {
    let market = &mut ctx.accounts.market;
    market.add_pauser(pauser)?;

    emit!(PauserAdded {
        owner: market.owner,
        pauser,
    });

    msg!("✅ Pauser added: {:?}", pauser);

    Ok(())
}

pub fn remove_pauser(ctx: Context<ManagePausers>, pauser: Pubkey) -> Result<()> {
    let market = &mut ctx.accounts.market;
    market.remove_pauser(&pauser)?;

    emit!(PauserRemoved {
        owner: market.owner,
        pauser,
    });

    msg!("✅ Pauser removed: {:?}", pauser);

    Ok(())
}
