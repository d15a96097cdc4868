use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, Transfer};

use crate::constants::PORTFOLIO_SEED;
use crate::state::Portfolio;

pub(crate) enum PortfolioEntry {
    Listing(u64),
    Request(u64),
}

/// Append `entry` to the owner's portfolio.
///
/// The account is allocated on first use and resized to fit afterwards,
/// with the owner topping up rent. `portfolio` must already be checked
/// against the `[PORTFOLIO_SEED, owner]` address.
pub(crate) fn record_in_portfolio<'info>(
    portfolio: &UncheckedAccount<'info>,
    owner: &Signer<'info>,
    system_program: &Program<'info, System>,
    bump: u8,
    entry: PortfolioEntry,
) -> Result<()> {
    let info = portfolio.to_account_info();
    let exists = info.owner == &crate::ID && !info.data_is_empty();

    let mut index = if exists {
        let data = info.try_borrow_data()?;
        Portfolio::try_deserialize(&mut &data[..])?
    } else {
        Portfolio::new(owner.key(), bump)
    };

    match entry {
        PortfolioEntry::Listing(id) => index.record_listing(id),
        PortfolioEntry::Request(id) => index.record_request(id),
    }

    let space = index.space();
    let rent_minimum = Rent::get()?.minimum_balance(space);
    if rent_minimum > info.lamports() {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: owner.to_account_info(),
                    to: info.clone(),
                },
            ),
            rent_minimum - info.lamports(),
        )?;
    }

    if exists {
        resize(&info, space)?;
    } else {
        let owner_key = owner.key();
        let bump_seed = [bump];
        let seeds: &[&[u8]] = &[PORTFOLIO_SEED, owner_key.as_ref(), &bump_seed];
        let signer_seeds = &[seeds];

        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                Allocate {
                    account_to_allocate: info.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                Assign {
                    account_to_assign: info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
        msg!("📒 Portfolio opened for {:?}", owner_key);
    }

    let mut data = info.try_borrow_mut_data()?;
    index.try_serialize(&mut &mut data[..])?;

    Ok(())
}

#[allow(deprecated)]
fn resize(info: &AccountInfo, space: usize) -> Result<()> {
    info.realloc(space, false)?;
    Ok(())
}
