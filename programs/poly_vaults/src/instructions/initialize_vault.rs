use crate::cpi::token::approve_with_signer_seeds;
use crate::cpi::ApproveVenueCPI;
use crate::validation::validate_vault_params;
use crate::{Size, Vault};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

pub fn initialize_vault<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializeVault<'info>>,
    params: VaultParams,
) -> Result<()> {
    validate_vault_params(&params)?;

    let bump = ctx.bumps.vault;

    let mut vault = ctx.accounts.vault.load_init()?;
    vault.name = params.name;
    vault.symbol = params.symbol;
    vault.pubkey = *ctx.accounts.vault.to_account_info().key;
    vault.manager = *ctx.accounts.manager.key;
    vault.mint = ctx.accounts.mint.key();
    vault.token_account = *ctx.accounts.token_account.to_account_info().key;
    vault.shares_mint = ctx.accounts.shares_mint.key();
    vault.venue = *ctx.accounts.venue.key;
    vault.entry_fee = params.entry_fee;
    vault.profit_share = params.profit_share;
    vault.deposit_end_ts = params.deposit_end_ts;
    vault.trading_end_ts = params.trading_end_ts;
    vault.dead_shares = params.dead_shares;
    vault.bump = bump;

    drop(vault);

    ctx.approve_venue(params.name, bump)?;

    msg!(
        "initialized vault entry_fee={} profit_share={} deposit_end_ts={} trading_end_ts={}",
        params.entry_fee,
        params.profit_share,
        params.deposit_end_ts,
        params.trading_end_ts
    );

    Ok(())
}

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct VaultParams {
    pub name: [u8; 32],
    pub symbol: [u8; 16],
    pub entry_fee: u16,
    pub profit_share: u16,
    pub deposit_end_ts: i64,
    pub trading_end_ts: i64,
    pub dead_shares: u64,
}

#[derive(Accounts)]
#[instruction(params: VaultParams)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        seeds = [b"vault", params.name.as_ref()],
        space = Vault::SIZE,
        bump,
        payer = payer
    )]
    pub vault: AccountLoader<'info, Vault>,
    #[account(
        init,
        seeds = [b"vault_token_account".as_ref(), vault.key().as_ref()],
        bump,
        payer = payer,
        token::mint = mint,
        token::authority = vault
    )]
    pub token_account: Box<Account<'info, TokenAccount>>,
    #[account(
        init,
        seeds = [b"mint".as_ref(), vault.key().as_ref()],
        bump,
        payer = payer,
        mint::decimals = mint.decimals,
        mint::authority = vault.key(),
    )]
    pub shares_mint: Box<Account<'info, Mint>>,
    pub mint: Box<Account<'info, Mint>>,
    /// CHECK: recorded as the vault manager, does not need to sign
    pub manager: AccountInfo<'info>,
    /// CHECK: delegate over the vault's token accounts, trusted by whoever creates the vault
    pub venue: AccountInfo<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> ApproveVenueCPI for Context<'_, '_, '_, 'info, InitializeVault<'info>> {
    fn approve_venue(&self, vault_name: [u8; 32], vault_bump: u8) -> Result<()> {
        approve_with_signer_seeds(
            vault_name,
            vault_bump,
            self.accounts.token_account.to_account_info(),
            self.accounts.venue.to_account_info(),
            self.accounts.vault.to_account_info(),
            self.accounts.token_program.to_account_info(),
        )
    }
}
