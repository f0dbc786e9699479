use crate::constants::MAX_POSITION_ACCOUNTS;
use crate::error::{ErrorCode, VaultResult};
use crate::events::{
    PositionRedeemRecord, ProfitSettlementRecord, VaultDepositorAction, VaultDepositorRecord,
};
use crate::math::casting::Cast;
use crate::math::fees::{calculate_entry_fee, calculate_profit_share};
use crate::math::safe_math::SafeMath;
use crate::math::shares::{shares_to_vault_amount, vault_amount_to_shares};
use crate::state::redemption::{Redemption, SharesHolder};
use crate::state::VaultPhase;
use crate::{validate, Size};
use anchor_lang::prelude::*;
use drift_macros::assert_no_slop;
use static_assertions::const_assert_eq;

#[assert_no_slop]
#[account(zero_copy(unsafe))]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Vault {
    /// The name of the vault. Vault pubkey is derived from this name.
    pub name: [u8; 32],
    /// Symbol of the vault's share token
    pub symbol: [u8; 16],
    /// The vault's pubkey. It is a pda of name and also the authority over all vault token accounts
    pub pubkey: Pubkey,
    /// The manager trades on behalf of the vault and receives entry fees and profit share
    pub manager: Pubkey,
    /// The principal asset mint
    pub mint: Pubkey,
    /// The vault's principal token account
    pub token_account: Pubkey,
    /// The mint for vault shares, the vault is the mint authority
    pub shares_mint: Pubkey,
    /// The venue authority delegated to move the vault's tokens while trading
    pub venue: Pubkey,
    /// Deposits are accepted strictly before this ts
    pub deposit_end_ts: i64,
    /// Redemptions are accepted from this ts on
    pub trading_end_ts: i64,
    /// lifetime deposits net of entry fee
    pub total_deposited_amount: u64,
    /// lifetime entry fees paid to the manager
    pub total_entry_fees: u64,
    /// manager's cut of the trading profit, set once at settlement
    pub manager_profit: u64,
    /// principal balance observed at settlement
    pub settlement_vault_amount: u64,
    /// lifetime principal paid out to redeemers
    pub total_withdraws: u64,
    /// shares reserved on the first deposit to keep the initial share price from being manipulated
    pub dead_shares: u64,
    /// dead shares actually reserved. counted in the total share supply but never minted
    pub reserved_shares: u64,
    /// entry fee in bps
    pub entry_fee: u16,
    /// manager's share of trading profit in bps
    pub profit_share: u16,
    /// number of position token accounts registered for the vault
    pub position_count: u16,
    /// true once the profit settlement ran, never reset
    pub is_profit_processed: bool,
    /// The bump for the vault pda
    pub bump: u8,
    pub padding: [u64; 8],
}

impl Size for Vault {
    const SIZE: usize = 384 + 8;
}

const_assert_eq!(Vault::SIZE, std::mem::size_of::<Vault>() + 8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepositAmounts {
    pub entry_fee: u64,
    pub net_amount: u64,
    pub shares: u64,
    /// dead shares reserved by this deposit, only nonzero on the first one
    pub reserved_shares: u64,
}

impl Vault {
    pub fn get_vault_signer_seeds<'a>(name: &'a [u8], bump: &'a u8) -> [&'a [u8]; 3] {
        [b"vault".as_ref(), name, bytemuck::bytes_of(bump)]
    }

    pub fn phase(&self, now: i64) -> VaultPhase {
        VaultPhase::at(now, self.deposit_end_ts, self.trading_end_ts)
    }

    pub fn validate_phase(&self, expected: VaultPhase, now: i64) -> VaultResult {
        let phase = self.phase(now);
        let error_code = match expected {
            VaultPhase::Deposit => ErrorCode::CannotDepositAfterDepositPeriod,
            VaultPhase::Trading => ErrorCode::InvalidVaultPhase,
            VaultPhase::Withdrawal => ErrorCode::CannotRedeemBeforeTradingPeriodEnd,
        };

        validate!(
            phase == expected,
            error_code,
            "vault is in {:?} phase, expected {:?} (now={} deposit_end_ts={} trading_end_ts={})",
            phase,
            expected,
            now,
            self.deposit_end_ts,
            self.trading_end_ts
        )
    }

    /// Share supply used for all proportional math: minted shares plus the reserved dead shares.
    pub fn effective_total_shares(&self, shares_supply: u64) -> VaultResult<u128> {
        shares_supply
            .cast::<u128>()?
            .safe_add(self.reserved_shares.cast()?)
    }

    /// Principal a holder of `shares` gets back from `vault_balance`. Redemptions pass the balance net of the manager payment.
    pub fn convert_to_assets(
        &self,
        shares: u64,
        shares_supply: u64,
        vault_balance: u64,
    ) -> VaultResult<u64> {
        let total_shares = self.effective_total_shares(shares_supply)?;
        if total_shares == 0 {
            return Ok(0);
        }

        shares_to_vault_amount(shares, total_shares, vault_balance)
    }

    pub fn preview_deposit(
        &self,
        amount: u64,
        shares_supply: u64,
        vault_balance: u64,
    ) -> VaultResult<DepositAmounts> {
        let entry_fee = calculate_entry_fee(amount, self.entry_fee)?;
        let net_amount = amount.safe_sub(entry_fee)?;

        validate!(
            net_amount > 0,
            ErrorCode::InvalidVaultDepositSize,
            "deposit of {} leaves nothing after entry fee of {}",
            amount,
            entry_fee
        )?;

        let total_shares = self.effective_total_shares(shares_supply)?;
        let reserved_shares = if total_shares == 0 {
            self.dead_shares
        } else {
            0
        };

        let n_shares = vault_amount_to_shares(net_amount, total_shares, vault_balance)?;

        validate!(
            n_shares > reserved_shares,
            ErrorCode::InvalidVaultDepositSize,
            "deposit of {} mints {} shares, must exceed reserved shares {}",
            net_amount,
            n_shares,
            reserved_shares
        )?;

        Ok(DepositAmounts {
            entry_fee,
            net_amount,
            shares: n_shares.safe_sub(reserved_shares)?,
            reserved_shares,
        })
    }

    /// Books a deposit. `vault_balance` is the vault's principal balance before the deposit lands.
    pub fn deposit(
        &mut self,
        amount: u64,
        depositor: Pubkey,
        receiver: Pubkey,
        shares_supply: u64,
        vault_balance: u64,
        now: i64,
    ) -> VaultResult<DepositAmounts> {
        self.validate_phase(VaultPhase::Deposit, now)?;

        validate!(
            amount > 0,
            ErrorCode::InvalidVaultDepositSize,
            "deposit amount must be positive"
        )?;
        validate!(
            receiver != Pubkey::default(),
            ErrorCode::InvalidReceiver,
            "deposit receiver cannot be the default pubkey"
        )?;

        let total_shares_before = self.effective_total_shares(shares_supply)?;
        let deposit_amounts = self.preview_deposit(amount, shares_supply, vault_balance)?;

        let total_deposited_amount = self
            .total_deposited_amount
            .safe_add(deposit_amounts.net_amount)?;
        let total_entry_fees = self.total_entry_fees.safe_add(deposit_amounts.entry_fee)?;
        let reserved_shares = self
            .reserved_shares
            .safe_add(deposit_amounts.reserved_shares)?;

        self.total_deposited_amount = total_deposited_amount;
        self.total_entry_fees = total_entry_fees;
        self.reserved_shares = reserved_shares;

        emit!(VaultDepositorRecord {
            ts: now,
            vault: self.pubkey,
            depositor_authority: depositor,
            receiver,
            action: VaultDepositorAction::Deposit,
            amount,
            entry_fee: deposit_amounts.entry_fee,
            shares: deposit_amounts.shares,
            total_shares_before,
            vault_amount_before: vault_balance,
        });

        Ok(deposit_amounts)
    }

    /// Returns `(profit, manager_profit)` for a principal balance of `vault_balance`. Losses yield no manager profit.
    pub fn calculate_manager_profit(&self, vault_balance: u64) -> VaultResult<(u64, u64)> {
        let profit = vault_balance.saturating_sub(self.total_deposited_amount);
        let manager_profit = calculate_profit_share(profit, self.profit_share)?;
        Ok((profit, manager_profit))
    }

    /// Settles trading profit once. Returns the amount owed to the manager, 0 on every later call.
    pub fn settle_profit(&mut self, vault_balance: u64, now: i64) -> VaultResult<u64> {
        self.validate_phase(VaultPhase::Withdrawal, now)?;

        if self.is_profit_processed {
            return Ok(0);
        }

        let (profit, manager_profit) = self.calculate_manager_profit(vault_balance)?;

        self.is_profit_processed = true;
        self.manager_profit = manager_profit;
        self.settlement_vault_amount = vault_balance;

        msg!(
            "settled vault profit={} manager_profit={} vault_amount={}",
            profit,
            manager_profit,
            vault_balance
        );

        emit!(ProfitSettlementRecord {
            ts: now,
            vault: self.pubkey,
            vault_amount: vault_balance,
            total_deposited_amount: self.total_deposited_amount,
            profit,
            profit_share: self.profit_share,
            manager_profit,
        });

        Ok(manager_profit)
    }

    pub fn validate_redeem(
        &self,
        shares: u64,
        holder: &SharesHolder,
        authority: &Pubkey,
        receiver: &Pubkey,
        now: i64,
    ) -> VaultResult {
        self.validate_phase(VaultPhase::Withdrawal, now)?;

        validate!(
            shares > 0,
            ErrorCode::InvalidVaultRedeemSize,
            "must redeem a positive number of shares"
        )?;
        validate!(
            *receiver != Pubkey::default(),
            ErrorCode::InvalidReceiver,
            "redeem receiver cannot be the default pubkey"
        )?;
        validate!(
            holder.owner != Pubkey::default(),
            ErrorCode::InvalidShareOwner,
            "share owner cannot be the default pubkey"
        )?;
        validate!(
            shares <= holder.balance,
            ErrorCode::InsufficientVaultShares,
            "shares={} > owner balance={}",
            shares,
            holder.balance
        )?;

        holder.validate_authority(authority, shares)
    }

    /// Redeems `shares` against the post settlement principal balance, settling profit first if needed.
    /// `shares_supply` and `vault_balance` are read before any burn or transfer in this call.
    #[allow(clippy::too_many_arguments)]
    pub fn redeem(
        &mut self,
        shares: u64,
        holder: &SharesHolder,
        authority: &Pubkey,
        receiver: Pubkey,
        shares_supply: u64,
        vault_balance: u64,
        action: VaultDepositorAction,
        now: i64,
    ) -> VaultResult<Redemption> {
        self.validate_redeem(shares, holder, authority, &receiver, now)?;

        let total_shares = self.effective_total_shares(shares_supply)?;

        let manager_profit_payment = if self.is_profit_processed {
            0
        } else {
            self.calculate_manager_profit(vault_balance)?.1
        };

        let vault_amount = vault_balance.safe_sub(manager_profit_payment)?;
        let redemption = Redemption {
            shares,
            total_shares,
            manager_profit_payment,
            vault_amount,
            amount: self.convert_to_assets(shares, shares_supply, vault_amount)?,
        };
        let total_withdraws = self.total_withdraws.safe_add(redemption.amount)?;

        let settled = self.settle_profit(vault_balance, now)?;
        validate!(
            settled == manager_profit_payment,
            ErrorCode::InvalidVaultSharesDetected,
            "settled manager profit {} != expected {}",
            settled,
            manager_profit_payment
        )?;

        self.total_withdraws = total_withdraws;

        emit!(VaultDepositorRecord {
            ts: now,
            vault: self.pubkey,
            depositor_authority: holder.owner,
            receiver,
            action,
            amount: redemption.amount,
            entry_fee: 0,
            shares,
            total_shares_before: total_shares,
            vault_amount_before: vault_amount,
        });

        Ok(redemption)
    }

    /// Share of one position token account owed to a redeemer, against that account's balance at call time.
    pub fn redeem_position(
        &self,
        redemption: &Redemption,
        position_mint: Pubkey,
        position_balance: u64,
        receiver: Pubkey,
        now: i64,
    ) -> VaultResult<u64> {
        let amount = redemption.position_amount(position_balance)?;

        emit!(PositionRedeemRecord {
            ts: now,
            vault: self.pubkey,
            receiver,
            position_mint,
            amount,
            position_amount_before: position_balance,
            shares: redemption.shares,
            total_shares_before: redemption.total_shares,
        });

        Ok(amount)
    }

    /// Registers a new position token account. Positions can't be added once redemptions may have begun.
    pub fn register_position_account(&mut self, position_mint: &Pubkey, now: i64) -> VaultResult {
        validate!(
            self.phase(now) != VaultPhase::Withdrawal,
            ErrorCode::InvalidVaultPhase,
            "cannot register position accounts after trading ends"
        )?;
        validate!(
            *position_mint != self.mint && *position_mint != self.shares_mint,
            ErrorCode::InvalidPositionAccount,
            "position mint {} cannot be the principal or share mint",
            position_mint
        )?;
        validate!(
            self.position_count < MAX_POSITION_ACCOUNTS,
            ErrorCode::TooManyPositionAccounts,
            "vault already has {} position accounts",
            self.position_count
        )?;

        self.position_count = self.position_count.safe_add(1)?;

        Ok(())
    }
}
