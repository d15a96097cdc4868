pub mod listing_create;
pub mod listing_deactivate;
pub mod market_initialize;
pub mod market_pause;
pub mod market_pausers;
pub mod match_confirm;
pub mod match_create;
pub mod portfolio_query;
pub(crate) mod portfolio_record;
pub mod request_cancel;
pub mod request_create;

pub use listing_create::*;
pub use listing_deactivate::*;
pub use market_initialize::*;
pub use market_pause::*;
pub use market_pausers::*;
pub use match_confirm::*;
pub use match_create::*;
pub use portfolio_query::*;
pub use request_cancel::*;
pub use request_create::*;
