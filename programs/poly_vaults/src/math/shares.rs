use crate::error::{ErrorCode, VaultResult};
use crate::math::casting::Cast;
use crate::math::safe_math::SafeMath;
use crate::validate;
use anchor_lang::prelude::*;

/// `value * numerator / denominator`, floored. Returns `value` untouched when the ratio is one.
pub fn get_proportion_u128(value: u128, numerator: u128, denominator: u128) -> VaultResult<u128> {
    if numerator == denominator {
        return Ok(value);
    }

    value.safe_mul(numerator)?.safe_div(denominator)
}

pub fn vault_amount_to_shares(amount: u64, total_shares: u128, vault_balance: u64) -> VaultResult<u64> {
    // empty pool mints 1:1
    if total_shares == 0 {
        return Ok(amount);
    }

    validate!(
        vault_balance != 0,
        ErrorCode::InvalidVaultForNewDepositors,
        "Vault balance should be non-zero for new depositors to enter"
    )?;

    get_proportion_u128(amount.cast()?, total_shares, vault_balance.cast()?)?.cast()
}

pub fn shares_to_vault_amount(n_shares: u64, total_shares: u128, vault_balance: u64) -> VaultResult<u64> {
    validate!(
        n_shares.cast::<u128>()? <= total_shares,
        ErrorCode::InvalidVaultSharesDetected,
        "n_shares={} > total_shares={}",
        n_shares,
        total_shares
    )?;

    get_proportion_u128(vault_balance.cast()?, n_shares.cast()?, total_shares)?.cast()
}
