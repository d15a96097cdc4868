use anchor_lang::prelude::*;

use crate::errors::RentalMatchError;

/// Pairing of one listing with one request, awaiting confirmation
/// from both sides.
#[account]
#[derive(InitSpace)]
pub struct RentalMatch {
    pub match_id: u64,
    pub listing_id: u64,
    pub request_id: u64,

    /// Listing owner
    pub landlord: Pubkey,

    /// Request owner
    pub tenant: Pubkey,

    /// Encrypted AND of the four compatibility predicates (ebool).
    /// Only the FHE executor or an authorized decrypt reveals it.
    pub compatibility: [u8; 32],

    pub landlord_confirmed: bool,
    pub tenant_confirmed: bool,

    /// Set once both parties have confirmed; never cleared.
    pub is_confirmed: bool,

    pub status: MatchStatus,

    pub created_at: i64,
    pub confirmed_at: Option<i64>,
    pub bump: u8,
}

#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace,
)]
pub enum MatchStatus {
    #[default]
    Created,            // No confirmations yet
    PartiallyConfirmed, // One side confirmed
    Confirmed,          // Both sides confirmed, terminal
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchParty {
    Landlord,
    Tenant,
}

impl RentalMatch {
    pub fn party_of(&self, key: &Pubkey) -> Option<MatchParty> {
        if *key == self.landlord {
            Some(MatchParty::Landlord)
        } else if *key == self.tenant {
            Some(MatchParty::Tenant)
        } else {
            None
        }
    }

    /// Records the signer's confirmation and advances the status.
    pub fn confirm(&mut self, by: &Pubkey, now: i64) -> Result<MatchParty> {
        let party = self.party_of(by).ok_or(RentalMatchError::NotMatchParty)?;

        match party {
            MatchParty::Landlord => {
                require!(
                    !self.landlord_confirmed,
                    RentalMatchError::LandlordAlreadyConfirmed
                );
                self.landlord_confirmed = true;
            }
            MatchParty::Tenant => {
                require!(
                    !self.tenant_confirmed,
                    RentalMatchError::TenantAlreadyConfirmed
                );
                self.tenant_confirmed = true;
            }
        }

        if self.landlord_confirmed && self.tenant_confirmed {
            self.is_confirmed = true;
            self.status = MatchStatus::Confirmed;
            self.confirmed_at = Some(now);
        } else {
            self.status = MatchStatus::PartiallyConfirmed;
        }

        Ok(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::error_code;

    fn pending(landlord: Pubkey, tenant: Pubkey) -> RentalMatch {
        RentalMatch {
            match_id: 1,
            listing_id: 1,
            request_id: 1,
            landlord,
            tenant,
            compatibility: [9u8; 32],
            landlord_confirmed: false,
            tenant_confirmed: false,
            is_confirmed: false,
            status: MatchStatus::default(),
            created_at: 100,
            confirmed_at: None,
            bump: 255,
        }
    }

    #[test]
    fn both_parties_confirm_in_either_order() {
        let landlord = Pubkey::new_unique();
        let tenant = Pubkey::new_unique();

        let mut m = pending(landlord, tenant);
        assert_eq!(m.confirm(&landlord, 200).unwrap(), MatchParty::Landlord);
        assert_eq!(m.status, MatchStatus::PartiallyConfirmed);
        assert!(!m.is_confirmed);
        assert_eq!(m.confirm(&tenant, 300).unwrap(), MatchParty::Tenant);
        assert_eq!(m.status, MatchStatus::Confirmed);
        assert!(m.is_confirmed);
        assert_eq!(m.confirmed_at, Some(300));

        let mut m = pending(landlord, tenant);
        m.confirm(&tenant, 200).unwrap();
        assert!(!m.is_confirmed);
        m.confirm(&landlord, 300).unwrap();
        assert!(m.is_confirmed);
    }

    #[test]
    fn same_party_cannot_confirm_twice() {
        let landlord = Pubkey::new_unique();
        let tenant = Pubkey::new_unique();
        let mut m = pending(landlord, tenant);

        m.confirm(&landlord, 200).unwrap();
        let err = m.confirm(&landlord, 201).unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(RentalMatchError::LandlordAlreadyConfirmed)
        );
        assert!(!m.is_confirmed);
        assert_eq!(m.status, MatchStatus::PartiallyConfirmed);

        m.confirm(&tenant, 202).unwrap();
        let err = m.confirm(&tenant, 203).unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(RentalMatchError::TenantAlreadyConfirmed)
        );
        assert_eq!(m.status, MatchStatus::Confirmed);
        assert_eq!(m.confirmed_at, Some(202));
    }

    #[test]
    fn outsiders_cannot_confirm() {
        let mut m = pending(Pubkey::new_unique(), Pubkey::new_unique());
        let err = m.confirm(&Pubkey::new_unique(), 200).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::NotMatchParty));
        assert_eq!(m.status, MatchStatus::Created);
    }

    #[test]
    fn new_matches_start_created() {
        assert_eq!(MatchStatus::default(), MatchStatus::Created);
    }
}
