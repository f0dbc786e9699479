use anchor_lang::prelude::*;
use instructions::*;
use state::*;

mod constants;
mod cpi;
mod error;
mod instructions;
pub mod macros;
mod math;
mod state;
#[cfg(test)]
mod test_utils;
mod validation;

declare_id!("PoLYvLTuHKxvzXWvDg1jcRxgfYtvJ3t7D4E9tqQxaZ8");

#[program]
pub mod poly_vaults {
    use super::*;

    pub fn initialize_vault<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializeVault<'info>>,
        params: VaultParams,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, params)
    }

    pub fn initialize_position_account<'info>(
        ctx: Context<'_, '_, '_, 'info, InitializePositionAccount<'info>>,
    ) -> Result<()> {
        instructions::initialize_position_account(ctx)
    }

    pub fn deposit<'info>(
        ctx: Context<'_, '_, '_, 'info, Deposit<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn redeem<'info>(
        ctx: Context<'_, '_, '_, 'info, RedeemShares<'info>>,
        shares: u64,
    ) -> Result<()> {
        instructions::redeem(ctx, shares)
    }

    pub fn multi_redeem_shares<'info>(
        ctx: Context<'_, '_, 'info, 'info, RedeemShares<'info>>,
        shares: u64,
    ) -> Result<()> {
        instructions::multi_redeem_shares(ctx, shares)
    }
}
