use anchor_lang::prelude::*;

use crate::constants::MATCH_SEED;
use crate::events::MatchConfirmed;
use crate::state::RentalMatch;

#[derive(Accounts)]
#[instruction(match_id: u64)]
pub struct ConfirmMatch<'info> {
    /// Landlord or tenant of the match
    pub party: Signer<'info>,

    #[account(
        mut,
        seeds = [MATCH_SEED, match_id.to_le_bytes().as_ref()],
        bump = rental_match.bump,
    )]
    pub rental_match: Account<'info, RentalMatch>,
}

/// Record one side's confirmation.
///
/// # Operations
/// 1. Validate signer is the landlord or the tenant
/// 2. Reject a repeated confirmation from the same side
/// 3. Mark the match Confirmed once both sides have confirmed
pub fn confirm_match(ctx: Context<ConfirmMatch>, match_id: u64) -> Result<()> {
    let party = ctx.accounts.party.key();
    let now = Clock::get()?.unix_timestamp;

    let rental_match = &mut ctx.accounts.rental_match;
    let role = rental_match.confirm(&party, now)?;

    emit!(MatchConfirmed {
        match_id,
        party,
        fully_confirmed: rental_match.is_confirmed,
    });

    msg!(
        "✅ Match {} confirmed by {:?} ({:?})",
        match_id,
        role,
        rental_match.status
    );

    Ok(())
}
