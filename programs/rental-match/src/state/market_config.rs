use anchor_lang::prelude::*;

use crate::constants::MAX_PAUSERS;
use crate::errors::RentalMatchError;

/// Global market settings: ownership, pause switch and id counters.
#[account]
#[derive(InitSpace)]
pub struct MarketConfig {
    pub owner: Pubkey,
    pub paused: bool,
    #[max_len(MAX_PAUSERS)]
    pub pausers: Vec<Pubkey>,
    pub listing_count: u64,
    pub request_count: u64,
    pub match_count: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl MarketConfig {
    pub fn next_listing_id(&self) -> u64 {
        self.listing_count.saturating_add(1)
    }

    pub fn next_request_id(&self) -> u64 {
        self.request_count.saturating_add(1)
    }

    pub fn next_match_id(&self) -> u64 {
        self.match_count.saturating_add(1)
    }

    pub fn is_pauser(&self, key: &Pubkey) -> bool {
        self.pausers.contains(key)
    }

    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, RentalMatchError::MarketPaused);
        Ok(())
    }

    pub fn add_pauser(&mut self, pauser: Pubkey) -> Result<()> {
        require!(!self.is_pauser(&pauser), RentalMatchError::PauserAlreadyExists);
        require!(self.pausers.len() < MAX_PAUSERS, RentalMatchError::TooManyPausers);
        self.pausers.push(pauser);
        Ok(())
    }

    pub fn remove_pauser(&mut self, pauser: &Pubkey) -> Result<()> {
        let index = self
            .pausers
            .iter()
            .position(|p| p == pauser)
            .ok_or(RentalMatchError::PauserNotFound)?;
        self.pausers.remove(index);
        Ok(())
    }

    pub fn set_paused(&mut self, by: &Pubkey, paused: bool) -> Result<()> {
        require!(self.is_pauser(by), RentalMatchError::NotPauser);
        if paused {
            require!(!self.paused, RentalMatchError::MarketPaused);
        } else {
            require!(self.paused, RentalMatchError::MarketNotPaused);
        }
        self.paused = paused;
        Ok(())
    }

    /// Bumps the listing counter and returns the id that was assigned.
    pub fn take_listing_id(&mut self) -> Result<u64> {
        self.listing_count = self
            .listing_count
            .checked_add(1)
            .ok_or(RentalMatchError::CounterOverflow)?;
        Ok(self.listing_count)
    }

    pub fn take_request_id(&mut self) -> Result<u64> {
        self.request_count = self
            .request_count
            .checked_add(1)
            .ok_or(RentalMatchError::CounterOverflow)?;
        Ok(self.request_count)
    }

    pub fn take_match_id(&mut self) -> Result<u64> {
        self.match_count = self
            .match_count
            .checked_add(1)
            .ok_or(RentalMatchError::CounterOverflow)?;
        Ok(self.match_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::error_code;

    fn market(owner: Pubkey) -> MarketConfig {
        MarketConfig {
            owner,
            paused: false,
            pausers: vec![owner],
            listing_count: 0,
            request_count: 0,
            match_count: 0,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn space_reserves_every_pauser_slot() {
        let pauser_list = 4 + 32 * MAX_PAUSERS;
        assert_eq!(MarketConfig::INIT_SPACE, 32 + 1 + pauser_list + 8 * 3 + 8 + 1);
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut config = market(Pubkey::new_unique());
        assert_eq!(config.next_listing_id(), 1);
        assert_eq!(config.take_listing_id().unwrap(), 1);
        assert_eq!(config.take_listing_id().unwrap(), 2);
        assert_eq!(config.next_listing_id(), 3);
        assert_eq!(config.take_request_id().unwrap(), 1);
        assert_eq!(config.take_match_id().unwrap(), 1);
    }

    #[test]
    fn counter_overflow_is_rejected() {
        let mut config = market(Pubkey::new_unique());
        config.match_count = u64::MAX;
        let err = config.take_match_id().unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::CounterOverflow));
    }

    #[test]
    fn only_pausers_can_toggle_pause() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut config = market(owner);

        let err = config.set_paused(&stranger, true).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::NotPauser));
        assert!(!config.paused);

        config.set_paused(&owner, true).unwrap();
        assert!(config.paused);
        let err = config.ensure_not_paused().unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::MarketPaused));

        config.set_paused(&owner, false).unwrap();
        assert!(config.ensure_not_paused().is_ok());
    }

    #[test]
    fn pausing_twice_is_rejected() {
        let owner = Pubkey::new_unique();
        let mut config = market(owner);
        let err = config.set_paused(&owner, false).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::MarketNotPaused));

        config.set_paused(&owner, true).unwrap();
        let err = config.set_paused(&owner, true).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::MarketPaused));
    }

    #[test]
    fn pauser_list_management() {
        let owner = Pubkey::new_unique();
        let mut config = market(owner);
        let pauser = Pubkey::new_unique();

        config.add_pauser(pauser).unwrap();
        assert!(config.is_pauser(&pauser));

        let err = config.add_pauser(pauser).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::PauserAlreadyExists));

        config.remove_pauser(&pauser).unwrap();
        assert!(!config.is_pauser(&pauser));

        let err = config.remove_pauser(&pauser).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::PauserNotFound));
    }

    #[test]
    fn pauser_list_is_bounded() {
        let mut config = market(Pubkey::new_unique());
        while config.pausers.len() < MAX_PAUSERS {
            config.add_pauser(Pubkey::new_unique()).unwrap();
        }
        let err = config.add_pauser(Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), u32::from(RentalMatchError::TooManyPausers));
    }
}
