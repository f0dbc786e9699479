use crate::constraints::{is_manager_for_vault, is_venue_for_vault};
use crate::cpi::token::approve_with_signer_seeds;
use crate::cpi::ApproveVenueCPI;
use crate::Vault;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

pub fn initialize_position_account<'info>(
    ctx: Context<'_, '_, '_, 'info, InitializePositionAccount<'info>>,
) -> Result<()> {
    let clock = &Clock::get()?;
    let position_mint = ctx.accounts.position_mint.key();

    let mut vault = ctx.accounts.vault.load_mut()?;
    vault.register_position_account(&position_mint, clock.unix_timestamp)?;

    let name = vault.name;
    let bump = vault.bump;
    let position_count = vault.position_count;
    drop(vault);

    ctx.approve_venue(name, bump)?;

    msg!(
        "registered position account {} for mint {} ({} total)",
        ctx.accounts.position_account.key(),
        position_mint,
        position_count
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePositionAccount<'info> {
    #[account(
        mut,
        constraint = is_manager_for_vault(&vault, &manager)?,
        constraint = is_venue_for_vault(&vault, &venue)?,
    )]
    pub vault: AccountLoader<'info, Vault>,
    #[account(
        init,
        seeds = [b"vault_position_account".as_ref(), vault.key().as_ref(), position_mint.key().as_ref()],
        bump,
        payer = payer,
        token::mint = position_mint,
        token::authority = vault
    )]
    pub position_account: Box<Account<'info, TokenAccount>>,
    pub position_mint: Box<Account<'info, Mint>>,
    /// CHECK: must be the venue recorded on the vault
    pub venue: AccountInfo<'info>,
    pub manager: Signer<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> ApproveVenueCPI for Context<'_, '_, '_, 'info, InitializePositionAccount<'info>> {
    fn approve_venue(&self, vault_name: [u8; 32], vault_bump: u8) -> Result<()> {
        approve_with_signer_seeds(
            vault_name,
            vault_bump,
            self.accounts.position_account.to_account_info(),
            self.accounts.venue.to_account_info(),
            self.accounts.vault.to_account_info(),
            self.accounts.token_program.to_account_info(),
        )
    }
}
