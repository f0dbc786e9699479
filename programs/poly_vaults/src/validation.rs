use crate::constants::MAX_BPS;
use crate::error::{ErrorCode, VaultResult};
use crate::validate;
use crate::VaultParams;
use anchor_lang::prelude::*;

pub fn validate_vault_params(params: &VaultParams) -> VaultResult {
    validate!(
        params.name != [0_u8; 32],
        ErrorCode::InvalidVaultParams,
        "vault name cannot be empty"
    )?;
    validate!(
        params.entry_fee <= MAX_BPS,
        ErrorCode::InvalidVaultParams,
        "entry fee {} bps > {} bps",
        params.entry_fee,
        MAX_BPS
    )?;
    validate!(
        params.profit_share <= MAX_BPS,
        ErrorCode::InvalidVaultParams,
        "profit share {} bps > {} bps",
        params.profit_share,
        MAX_BPS
    )?;
    validate!(
        params.deposit_end_ts < params.trading_end_ts,
        ErrorCode::InvalidVaultParams,
        "deposit end ts {} must be before trading end ts {}",
        params.deposit_end_ts,
        params.trading_end_ts
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_DAY;

    fn params() -> VaultParams {
        let mut name = [0_u8; 32];
        name[..10].copy_from_slice(b"Test Vault");
        VaultParams {
            name,
            symbol: [0_u8; 16],
            entry_fee: 0,
            profit_share: 2000,
            deposit_end_ts: ONE_DAY,
            trading_end_ts: 2 * ONE_DAY,
            dead_shares: 0,
        }
    }

    #[test]
    fn valid_params() {
        assert_eq!(validate_vault_params(&params()), Ok(()));
        assert_eq!(
            validate_vault_params(&VaultParams {
                entry_fee: 10_000,
                profit_share: 10_000,
                ..params()
            }),
            Ok(())
        );
    }

    #[test]
    fn fees_capped_at_full_rate() {
        assert_eq!(
            validate_vault_params(&VaultParams {
                entry_fee: 10_001,
                ..params()
            }),
            Err(ErrorCode::InvalidVaultParams)
        );
        assert_eq!(
            validate_vault_params(&VaultParams {
                profit_share: 10_001,
                ..params()
            }),
            Err(ErrorCode::InvalidVaultParams)
        );
    }

    #[test]
    fn deposit_window_closes_before_trading_window() {
        assert_eq!(
            validate_vault_params(&VaultParams {
                deposit_end_ts: 2 * ONE_DAY,
                ..params()
            }),
            Err(ErrorCode::InvalidVaultParams)
        );
        assert_eq!(
            validate_vault_params(&VaultParams {
                deposit_end_ts: 3 * ONE_DAY,
                ..params()
            }),
            Err(ErrorCode::InvalidVaultParams)
        );
    }

    #[test]
    fn name_required() {
        assert_eq!(
            validate_vault_params(&VaultParams {
                name: [0_u8; 32],
                ..params()
            }),
            Err(ErrorCode::InvalidVaultParams)
        );
    }
}
