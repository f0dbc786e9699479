pub use events::*;
pub use phase::*;
pub use position_accounts::*;
pub use redemption::*;
pub use traits::*;
pub use vault::*;

pub mod events;
mod phase;
pub mod position_accounts;
mod redemption;
mod traits;
mod vault;
