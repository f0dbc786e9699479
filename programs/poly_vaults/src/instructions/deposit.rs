use crate::constraints::{is_manager_token_account_for_vault, is_shares_mint_for_vault};
use crate::cpi::{EntryFeeTransferCPI, MintTokensCPI, TokenTransferCPI};
use crate::Vault;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

pub fn deposit<'info>(ctx: Context<'_, '_, '_, 'info, Deposit<'info>>, amount: u64) -> Result<()> {
    let clock = &Clock::get()?;

    let mut vault = ctx.accounts.vault.load_mut()?;

    let deposit_amounts = vault.deposit(
        amount,
        ctx.accounts.authority.key(),
        ctx.accounts.receiver_shares_account.owner,
        ctx.accounts.shares_mint.supply,
        ctx.accounts.vault_token_account.amount,
        clock.unix_timestamp,
    )?;

    let name = vault.name;
    let bump = vault.bump;
    drop(vault);

    if deposit_amounts.entry_fee > 0 {
        ctx.entry_fee_transfer(deposit_amounts.entry_fee)?;
    }

    ctx.token_transfer(deposit_amounts.net_amount)?;
    ctx.mint(name, bump, deposit_amounts.shares)?;

    msg!(
        "deposited {} (entry fee {}) for {} shares to {}",
        deposit_amounts.net_amount,
        deposit_amounts.entry_fee,
        deposit_amounts.shares,
        ctx.accounts.receiver_shares_account.owner
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub vault: AccountLoader<'info, Vault>,
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"vault_token_account".as_ref(), vault.key().as_ref()],
        bump,
    )]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::authority = authority,
        token::mint = vault_token_account.mint
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        token::mint = vault_token_account.mint,
        constraint = is_manager_token_account_for_vault(&vault, &manager_token_account)?,
    )]
    pub manager_token_account: Box<Account<'info, TokenAccount>>,
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
    pub receiver_shares_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}

impl<'info> TokenTransferCPI for Context<'_, '_, '_, 'info, Deposit<'info>> {
    fn token_transfer(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.accounts.user_token_account.to_account_info(),
            to: self.accounts.vault_token_account.to_account_info(),
            authority: self.accounts.authority.to_account_info(),
        };
        let token_program = self.accounts.token_program.to_account_info();
        let cpi_context = CpiContext::new(token_program, cpi_accounts);

        token::transfer(cpi_context, amount)?;

        Ok(())
    }
}

impl<'info> EntryFeeTransferCPI for Context<'_, '_, '_, 'info, Deposit<'info>> {
    fn entry_fee_transfer(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.accounts.user_token_account.to_account_info(),
            to: self.accounts.manager_token_account.to_account_info(),
            authority: self.accounts.authority.to_account_info(),
        };
        let token_program = self.accounts.token_program.to_account_info();
        let cpi_context = CpiContext::new(token_program, cpi_accounts);

        token::transfer(cpi_context, amount)?;

        Ok(())
    }
}

impl<'info> MintTokensCPI for Context<'_, '_, '_, 'info, Deposit<'info>> {
    fn mint(&self, vault_name: [u8; 32], vault_bump: u8, amount: u64) -> Result<()> {
        let signature_seeds = Vault::get_vault_signer_seeds(&vault_name, &vault_bump);
        let signers = &[&signature_seeds[..]];

        let cpi_accounts = MintTo {
            mint: self.accounts.shares_mint.to_account_info(),
            to: self.accounts.receiver_shares_account.to_account_info(),
            authority: self.accounts.vault.to_account_info(),
        };

        let cpi_context = CpiContext::new_with_signer(
            self.accounts.token_program.to_account_info(),
            cpi_accounts,
            signers,
        );

        token::mint_to(cpi_context, amount)?;

        Ok(())
    }
}
