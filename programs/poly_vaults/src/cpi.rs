use anchor_lang::prelude::*;

pub mod token;

pub trait TokenTransferCPI {
    fn token_transfer(&self, amount: u64) -> Result<()>;
}

pub trait EntryFeeTransferCPI {
    fn entry_fee_transfer(&self, amount: u64) -> Result<()>;
}

pub trait MintTokensCPI {
    fn mint(&self, vault_name: [u8; 32], vault_bump: u8, amount: u64) -> Result<()>;
}

pub trait BurnTokensCPI {
    fn burn(&self, amount: u64) -> Result<()>;
}

pub trait ApproveVenueCPI {
    fn approve_venue(&self, vault_name: [u8; 32], vault_bump: u8) -> Result<()>;
}

pub trait ManagerProfitTransferCPI {
    fn manager_profit_transfer(&self, vault_name: [u8; 32], vault_bump: u8, amount: u64)
        -> Result<()>;
}

pub trait WithdrawCPI {
    fn withdraw(&self, vault_name: [u8; 32], vault_bump: u8, amount: u64) -> Result<()>;
}
