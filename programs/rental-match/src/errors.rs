use anchor_lang::prelude::*;

#[error_code]
pub enum RentalMatchError {
    #[msg("Unauthorized: signer is not the market owner")]
    NotOwner,

    #[msg("Unauthorized: signer is not a pauser")]
    NotPauser,

    #[msg("Pauser is already registered")]
    PauserAlreadyExists,

    #[msg("Pauser is not registered")]
    PauserNotFound,

    #[msg("Maximum number of pausers reached")]
    TooManyPausers,

    #[msg("Market is paused")]
    MarketPaused,

    #[msg("Market is not paused")]
    MarketNotPaused,

    #[msg("Unauthorized: signer does not own this listing")]
    NotListingOwner,

    #[msg("Unauthorized: signer does not own this request")]
    NotRequestOwner,

    #[msg("Listing is not active")]
    ListingNotActive,

    #[msg("Listing is already matched")]
    ListingAlreadyMatched,

    #[msg("Request is not active")]
    RequestNotActive,

    #[msg("Request is already matched")]
    RequestAlreadyMatched,

    #[msg("Unauthorized: only the landlord or the tenant may create this match")]
    NotMatchCounterparty,

    #[msg("Listing and request belong to the same identity")]
    SelfMatch,

    #[msg("Unauthorized: signer is not a party to this match")]
    NotMatchParty,

    #[msg("Landlord has already confirmed this match")]
    LandlordAlreadyConfirmed,

    #[msg("Tenant has already confirmed this match")]
    TenantAlreadyConfirmed,

    #[msg("Counter overflow")]
    CounterOverflow,
}
