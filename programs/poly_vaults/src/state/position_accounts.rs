use crate::error::{ErrorCode, VaultResult};
use crate::state::Vault;
use crate::validate;
use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

pub const VAULT_POSITION_ACCOUNT_SEED: &[u8] = b"vault_position_account";

pub fn get_vault_position_account_address(vault: &Pubkey, position_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            VAULT_POSITION_ACCOUNT_SEED,
            vault.as_ref(),
            position_mint.as_ref(),
        ],
        &crate::id(),
    )
    .0
}

pub struct PositionAccounts<'info> {
    pub mint: Pubkey,
    pub vault_position_account: Account<'info, TokenAccount>,
    pub receiver_position_account: Account<'info, TokenAccount>,
}

/// Every registered position must be presented exactly once.
pub fn validate_position_mints(position_mints: &[Pubkey], position_count: u16) -> VaultResult {
    validate!(
        position_mints.len() == position_count as usize,
        ErrorCode::MissingPositionAccounts,
        "expected {} position account pairs, got {}",
        position_count,
        position_mints.len()
    )?;

    for (i, mint) in position_mints.iter().enumerate() {
        validate!(
            !position_mints[..i].contains(mint),
            ErrorCode::DuplicatePositionAccount,
            "position mint {} passed more than once",
            mint
        )?;
    }

    Ok(())
}

/// Reads `(vault position account, receiver position account)` pairs from the remaining accounts.
pub fn load_position_accounts<'info>(
    remaining_accounts: &'info [AccountInfo<'info>],
    vault: &Vault,
    receiver: &Pubkey,
) -> Result<Vec<PositionAccounts<'info>>> {
    validate!(
        remaining_accounts.len() % 2 == 0,
        ErrorCode::MissingPositionAccounts,
        "position accounts must come in pairs, got {} accounts",
        remaining_accounts.len()
    )?;

    let mut position_accounts = Vec::with_capacity(remaining_accounts.len() / 2);

    for pair in remaining_accounts.chunks_exact(2) {
        let vault_position_account = Account::<TokenAccount>::try_from(&pair[0])?;
        let receiver_position_account = Account::<TokenAccount>::try_from(&pair[1])?;
        let mint = vault_position_account.mint;

        validate!(
            vault_position_account.key() == get_vault_position_account_address(&vault.pubkey, &mint)
                && vault_position_account.owner == vault.pubkey,
            ErrorCode::InvalidPositionAccount,
            "{} is not the vault's position account for mint {}",
            vault_position_account.key(),
            mint
        )?;

        validate!(
            receiver_position_account.mint == mint && receiver_position_account.owner == *receiver,
            ErrorCode::InvalidPositionAccount,
            "{} is not a {} token account owned by receiver {}",
            receiver_position_account.key(),
            mint,
            receiver
        )?;

        position_accounts.push(PositionAccounts {
            mint,
            vault_position_account,
            receiver_position_account,
        });
    }

    let position_mints: Vec<Pubkey> = position_accounts.iter().map(|p| p.mint).collect();
    validate_position_mints(&position_mints, vault.position_count)?;

    Ok(position_accounts)
}
