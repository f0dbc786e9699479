pub use deposit::*;
pub use initialize_position_account::*;
pub use initialize_vault::*;
pub use multi_redeem_shares::*;
pub use redeem::*;

pub mod constraints;
mod deposit;
mod initialize_position_account;
mod initialize_vault;
mod multi_redeem_shares;
mod redeem;
