use anchor_lang::prelude::*;

use crate::constants::REQUEST_SEED;
use crate::events::RequestCancelled;
use crate::state::RentalRequest;

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct CancelRequest<'info> {
    /// Tenant who owns the request
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump,
    )]
    pub request: Account<'info, RentalRequest>,
}

/// Withdraw an unmatched request.
pub fn cancel_request(ctx: Context<CancelRequest>, request_id: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.request.cancel(&owner)?;

    emit!(RequestCancelled { request_id, owner });

    msg!("✅ Request {} cancelled by tenant: {:?}", request_id, owner);

    Ok(())
}
