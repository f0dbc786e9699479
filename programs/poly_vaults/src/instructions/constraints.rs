use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::Vault;

pub fn is_manager_for_vault(vault: &AccountLoader<Vault>, signer: &Signer) -> Result<bool> {
    Ok(vault.load()?.manager.eq(signer.key))
}

pub fn is_manager_token_account_for_vault(
    vault: &AccountLoader<Vault>,
    token_account: &Account<TokenAccount>,
) -> Result<bool> {
    Ok(vault.load()?.manager.eq(&token_account.owner))
}

pub fn is_venue_for_vault(vault: &AccountLoader<Vault>, venue: &AccountInfo) -> Result<bool> {
    Ok(vault.load()?.venue.eq(venue.key))
}

pub fn is_shares_mint_for_vault(vault: &AccountLoader<Vault>, mint: &Account<Mint>) -> Result<bool> {
    Ok(vault.load()?.shares_mint.eq(&mint.key()))
}
