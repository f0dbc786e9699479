use anchor_lang::prelude::*;

pub type VaultResult<T = ()> = std::result::Result<T, ErrorCode>;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Default")]
    Default,
    #[msg("Vault Math Error")]
    MathError,
    #[msg("Casting Failure")]
    CastingFailure,
    #[msg("InvalidVaultParams")]
    InvalidVaultParams,
    #[msg("InvalidVaultPhase")]
    InvalidVaultPhase,
    #[msg("CannotDepositAfterDepositPeriod")]
    CannotDepositAfterDepositPeriod,
    #[msg("CannotRedeemBeforeTradingPeriodEnd")]
    CannotRedeemBeforeTradingPeriodEnd,
    #[msg("InvalidVaultDepositSize")]
    InvalidVaultDepositSize,
    #[msg("InvalidVaultRedeemSize")]
    InvalidVaultRedeemSize,
    #[msg("InvalidReceiver")]
    InvalidReceiver,
    #[msg("InvalidShareOwner")]
    InvalidShareOwner,
    #[msg("InsufficientVaultShares")]
    InsufficientVaultShares,
    #[msg("InsufficientShareAllowance")]
    InsufficientShareAllowance,
    #[msg("InvalidVaultSharesDetected")]
    InvalidVaultSharesDetected,
    #[msg("InvalidVaultForNewDepositors")]
    InvalidVaultForNewDepositors,
    #[msg("InvalidPositionAccount")]
    InvalidPositionAccount,
    #[msg("DuplicatePositionAccount")]
    DuplicatePositionAccount,
    #[msg("MissingPositionAccounts")]
    MissingPositionAccounts,
    #[msg("TooManyPositionAccounts")]
    TooManyPositionAccounts,
}
