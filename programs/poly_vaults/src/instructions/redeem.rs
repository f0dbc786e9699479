use crate::constraints::{is_manager_token_account_for_vault, is_shares_mint_for_vault};
use crate::cpi::token::transfer_with_signer_seeds;
use crate::cpi::{BurnTokensCPI, ManagerProfitTransferCPI, WithdrawCPI};
use crate::state::{Redemption, SharesHolder};
use crate::{Vault, VaultDepositorAction};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

pub fn redeem<'info>(ctx: Context<'_, '_, '_, 'info, RedeemShares<'info>>, shares: u64) -> Result<()> {
    let clock = &Clock::get()?;

    let mut vault = ctx.accounts.vault.load_mut()?;

    let redemption = vault.redeem(
        shares,
        &SharesHolder::from(&**ctx.accounts.owner_shares_account),
        ctx.accounts.authority.key,
        ctx.accounts.receiver_token_account.owner,
        ctx.accounts.shares_mint.supply,
        ctx.accounts.vault_token_account.amount,
        VaultDepositorAction::Redeem,
        clock.unix_timestamp,
    )?;

    let name = vault.name;
    let bump = vault.bump;
    drop(vault);

    pay_out_redemption(&ctx, &redemption, name, bump)?;

    msg!(
        "redeemed {} shares for {} to {}",
        redemption.shares,
        redemption.amount,
        ctx.accounts.receiver_token_account.owner
    );

    Ok(())
}

/// Pays the manager if this redemption settled profit, burns the shares, then pays the receiver.
pub fn pay_out_redemption<C>(
    ctx: &C,
    redemption: &Redemption,
    vault_name: [u8; 32],
    vault_bump: u8,
) -> Result<()>
where
    C: ManagerProfitTransferCPI + BurnTokensCPI + WithdrawCPI,
{
    if redemption.manager_profit_payment > 0 {
        ctx.manager_profit_transfer(vault_name, vault_bump, redemption.manager_profit_payment)?;
    }

    ctx.burn(redemption.shares)?;

    if redemption.amount > 0 {
        ctx.withdraw(vault_name, vault_bump, redemption.amount)?;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RedeemShares<'info> {
    #[account(mut)]
    pub vault: AccountLoader<'info, Vault>,
    /// share owner, or a delegate of the owner's share account
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"mint".as_ref(), vault.key().as_ref()],
        bump,
        constraint = is_shares_mint_for_vault(&vault, &shares_mint)?,
    )]
    pub shares_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        token::mint = shares_mint
    )]
    pub owner_shares_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        seeds = [b"vault_token_account".as_ref(), vault.key().as_ref()],
        bump,
    )]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = vault_token_account.mint
    )]
    pub receiver_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = vault_token_account.mint,
        constraint = is_manager_token_account_for_vault(&vault, &manager_token_account)?,
    )]
    pub manager_token_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}

impl<'info> ManagerProfitTransferCPI for Context<'_, '_, '_, 'info, RedeemShares<'info>> {
    fn manager_profit_transfer(
        &self,
        vault_name: [u8; 32],
        vault_bump: u8,
        amount: u64,
    ) -> Result<()> {
        transfer_with_signer_seeds(
            amount,
            vault_name,
            vault_bump,
            self.accounts.vault_token_account.to_account_info(),
            self.accounts.manager_token_account.to_account_info(),
            self.accounts.vault.to_account_info(),
            self.accounts.token_program.to_account_info(),
        )
    }
}

impl<'info> BurnTokensCPI for Context<'_, '_, '_, 'info, RedeemShares<'info>> {
    fn burn(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Burn {
            mint: self.accounts.shares_mint.to_account_info(),
            from: self.accounts.owner_shares_account.to_account_info(),
            authority: self.accounts.authority.to_account_info(),
        };
        let token_program = self.accounts.token_program.to_account_info();
        let cpi_context = CpiContext::new(token_program, cpi_accounts);

        token::burn(cpi_context, amount)?;

        Ok(())
    }
}

impl<'info> WithdrawCPI for Context<'_, '_, '_, 'info, RedeemShares<'info>> {
    fn withdraw(&self, vault_name: [u8; 32], vault_bump: u8, amount: u64) -> Result<()> {
        transfer_with_signer_seeds(
            amount,
            vault_name,
            vault_bump,
            self.accounts.vault_token_account.to_account_info(),
            self.accounts.receiver_token_account.to_account_info(),
            self.accounts.vault.to_account_info(),
            self.accounts.token_program.to_account_info(),
        )
    }
}
