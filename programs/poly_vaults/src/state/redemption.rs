use crate::error::{ErrorCode, VaultResult};
use crate::math::shares::shares_to_vault_amount;
use crate::validate;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::TokenAccount;

/// Owner side of a share token account, as seen by a redemption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharesHolder {
    pub owner: Pubkey,
    pub balance: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl SharesHolder {
    pub fn new(owner: Pubkey, balance: u64) -> Self {
        Self {
            owner,
            balance,
            delegate: None,
            delegated_amount: 0,
        }
    }

    pub fn with_delegate(mut self, delegate: Pubkey, delegated_amount: u64) -> Self {
        self.delegate = Some(delegate);
        self.delegated_amount = delegated_amount;
        self
    }

    /// The owner may always burn. Anyone else needs a delegation covering `shares`.
    pub fn validate_authority(&self, authority: &Pubkey, shares: u64) -> VaultResult {
        if self.owner == *authority {
            return Ok(());
        }

        validate!(
            self.delegate == Some(*authority) && self.delegated_amount >= shares,
            ErrorCode::InsufficientShareAllowance,
            "authority {} is not the share owner and is delegated {} < {} shares",
            authority,
            if self.delegate == Some(*authority) {
                self.delegated_amount
            } else {
                0
            },
            shares
        )
    }
}

impl From<&TokenAccount> for SharesHolder {
    fn from(account: &TokenAccount) -> Self {
        let holder = SharesHolder::new(account.owner, account.amount);
        match account.delegate {
            COption::Some(delegate) => holder.with_delegate(delegate, account.delegated_amount),
            COption::None => holder,
        }
    }
}

/// Result of booking a redemption. Principal and positions are both priced against `total_shares`
/// taken before the burn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redemption {
    pub shares: u64,
    pub total_shares: u128,
    /// owed to the manager by this call, nonzero only for the call that settled profit
    pub manager_profit_payment: u64,
    /// principal balance after the manager profit payment
    pub vault_amount: u64,
    /// principal owed to the receiver
    pub amount: u64,
}

impl Redemption {
    pub fn position_amount(&self, position_balance: u64) -> VaultResult<u64> {
        shares_to_vault_amount(self.shares, self.total_shares, position_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_can_always_redeem() {
        let owner = Pubkey::new_unique();
        let holder = SharesHolder::new(owner, 100);
        assert_eq!(holder.validate_authority(&owner, 100), Ok(()));
    }

    #[test]
    fn delegate_limited_to_allowance() {
        let owner = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();
        let holder = SharesHolder::new(owner, 100).with_delegate(delegate, 40);

        assert_eq!(holder.validate_authority(&delegate, 40), Ok(()));
        assert_eq!(
            holder.validate_authority(&delegate, 41),
            Err(ErrorCode::InsufficientShareAllowance)
        );
        assert_eq!(
            holder.validate_authority(&Pubkey::new_unique(), 1),
            Err(ErrorCode::InsufficientShareAllowance)
        );
    }

    #[test]
    fn redemption_amounts() {
        let redemption = Redemption {
            shares: 60,
            total_shares: 100,
            ..Redemption::default()
        };
        assert_eq!(redemption.position_amount(30).unwrap(), 18);
        assert_eq!(redemption.position_amount(0).unwrap(), 0);

        let last = Redemption {
            shares: 40,
            total_shares: 40,
            ..Redemption::default()
        };
        assert_eq!(last.position_amount(12).unwrap(), 12);
    }
}
