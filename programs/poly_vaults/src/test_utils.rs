use std::collections::HashMap;

use crate::error::VaultResult;
use crate::events::VaultDepositorAction;
use crate::state::{validate_position_mints, DepositAmounts, Redemption, SharesHolder, Vault};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token::state::{Account as SplTokenAccount, AccountState};
use anchor_spl::token::TokenAccount;

pub const DEPOSIT_END_TS: i64 = 100;
pub const TRADING_END_TS: i64 = 200;

pub fn create_token_account(
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
    delegate: Option<(Pubkey, u64)>,
) -> TokenAccount {
    let (delegate, delegated_amount) = match delegate {
        Some((delegate, delegated_amount)) => (COption::Some(delegate), delegated_amount),
        None => (COption::None, 0),
    };

    let account = SplTokenAccount {
        mint,
        owner,
        amount,
        delegate,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount,
        close_authority: COption::None,
    };

    let mut data = [0_u8; SplTokenAccount::LEN];
    SplTokenAccount::pack(account, &mut data).unwrap();
    TokenAccount::try_deserialize_unchecked(&mut &data[..]).unwrap()
}

pub fn create_vault(entry_fee: u16, profit_share: u16) -> Vault {
    let mut name = [0_u8; 32];
    name[..4].copy_from_slice(b"test");

    Vault {
        name,
        pubkey: Pubkey::new_unique(),
        manager: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        token_account: Pubkey::new_unique(),
        shares_mint: Pubkey::new_unique(),
        venue: Pubkey::new_unique(),
        deposit_end_ts: DEPOSIT_END_TS,
        trading_end_ts: TRADING_END_TS,
        entry_fee,
        profit_share,
        ..Vault::default()
    }
}

/// Token ledger around a [`Vault`] that applies the same transfers, mints and burns the
/// instruction handlers issue, so scenarios can check balances end to end.
#[derive(Default)]
pub struct TestVault {
    pub vault: Vault,
    pub now: i64,
    /// principal held by the vault token account
    pub vault_balance: u64,
    pub shares_supply: u64,
    pub principal: HashMap<Pubkey, u64>,
    pub shares: HashMap<Pubkey, u64>,
    /// owner -> (delegate, remaining allowance)
    pub share_delegates: HashMap<Pubkey, (Pubkey, u64)>,
    /// position mint -> vault position account balance, in registration order
    pub vault_positions: Vec<(Pubkey, u64)>,
    /// (owner, position mint) -> balance
    pub positions: HashMap<(Pubkey, Pubkey), u64>,
}

impl TestVault {
    pub fn new(entry_fee: u16, profit_share: u16) -> Self {
        TestVault {
            vault: create_vault(entry_fee, profit_share),
            ..TestVault::default()
        }
    }

    pub fn manager(&self) -> Pubkey {
        self.vault.manager
    }

    pub fn warp(&mut self, now: i64) {
        self.now = now;
    }

    pub fn fund(&mut self, user: &Pubkey, amount: u64) {
        *self.principal.entry(*user).or_default() += amount;
    }

    pub fn principal_of(&self, user: &Pubkey) -> u64 {
        self.principal.get(user).copied().unwrap_or(0)
    }

    pub fn shares_of(&self, user: &Pubkey) -> u64 {
        self.shares.get(user).copied().unwrap_or(0)
    }

    pub fn position_of(&self, user: &Pubkey, mint: &Pubkey) -> u64 {
        self.positions.get(&(*user, *mint)).copied().unwrap_or(0)
    }

    pub fn vault_position(&self, mint: &Pubkey) -> u64 {
        self.vault_positions
            .iter()
            .find(|(position_mint, _)| position_mint == mint)
            .map(|(_, balance)| *balance)
            .unwrap_or(0)
    }

    /// The venue moving principal in or out of the vault while trading.
    pub fn set_vault_balance(&mut self, balance: u64) {
        self.vault_balance = balance;
    }

    pub fn set_vault_position(&mut self, mint: &Pubkey, balance: u64) {
        let position = self
            .vault_positions
            .iter_mut()
            .find(|(position_mint, _)| position_mint == mint)
            .unwrap();
        position.1 = balance;
    }

    pub fn approve_shares(&mut self, owner: &Pubkey, delegate: &Pubkey, amount: u64) {
        self.share_delegates.insert(*owner, (*delegate, amount));
    }

    pub fn register_position(&mut self, mint: &Pubkey) -> VaultResult {
        self.vault.register_position_account(mint, self.now)?;
        self.vault_positions.push((*mint, 0));
        Ok(())
    }

    pub fn deposit(
        &mut self,
        authority: &Pubkey,
        receiver: &Pubkey,
        amount: u64,
    ) -> VaultResult<DepositAmounts> {
        let deposit_amounts = self.vault.deposit(
            amount,
            *authority,
            *receiver,
            self.shares_supply,
            self.vault_balance,
            self.now,
        )?;

        let balance = self.principal.entry(*authority).or_default();
        *balance = balance.checked_sub(amount).unwrap();

        let manager = self.manager();
        self.fund(&manager, deposit_amounts.entry_fee);
        self.vault_balance += deposit_amounts.net_amount;

        *self.shares.entry(*receiver).or_default() += deposit_amounts.shares;
        self.shares_supply += deposit_amounts.shares;

        Ok(deposit_amounts)
    }

    fn shares_holder(&self, owner: &Pubkey) -> SharesHolder {
        let holder = SharesHolder::new(*owner, self.shares_of(owner));
        match self.share_delegates.get(owner) {
            Some((delegate, allowance)) => holder.with_delegate(*delegate, *allowance),
            None => holder,
        }
    }

    pub fn redeem(
        &mut self,
        authority: &Pubkey,
        owner: &Pubkey,
        receiver: &Pubkey,
        shares: u64,
    ) -> VaultResult<Redemption> {
        let redemption = self.vault.redeem(
            shares,
            &self.shares_holder(owner),
            authority,
            *receiver,
            self.shares_supply,
            self.vault_balance,
            VaultDepositorAction::Redeem,
            self.now,
        )?;

        self.pay_out(&redemption, authority, owner, receiver);

        Ok(redemption)
    }

    pub fn multi_redeem(
        &mut self,
        authority: &Pubkey,
        owner: &Pubkey,
        receiver: &Pubkey,
        shares: u64,
        position_mints: &[Pubkey],
    ) -> VaultResult<(Redemption, Vec<u64>)> {
        let holder = self.shares_holder(owner);
        self.vault
            .validate_redeem(shares, &holder, authority, receiver, self.now)?;
        validate_position_mints(position_mints, self.vault.position_count)?;

        let redemption = self.vault.redeem(
            shares,
            &holder,
            authority,
            *receiver,
            self.shares_supply,
            self.vault_balance,
            VaultDepositorAction::MultiRedeem,
            self.now,
        )?;

        let mut position_amounts = Vec::with_capacity(position_mints.len());
        for mint in position_mints {
            position_amounts.push(self.vault.redeem_position(
                &redemption,
                *mint,
                self.vault_position(mint),
                *receiver,
                self.now,
            )?);
        }

        self.pay_out(&redemption, authority, owner, receiver);

        for (mint, amount) in position_mints.iter().zip(position_amounts.iter()) {
            let balance = self.vault_position(mint);
            self.set_vault_position(mint, balance - amount);
            *self.positions.entry((*receiver, *mint)).or_default() += amount;
        }

        Ok((redemption, position_amounts))
    }

    fn pay_out(&mut self, redemption: &Redemption, authority: &Pubkey, owner: &Pubkey, receiver: &Pubkey) {
        let manager = self.manager();
        self.vault_balance -= redemption.manager_profit_payment;
        self.fund(&manager, redemption.manager_profit_payment);

        *self.shares.get_mut(owner).unwrap() -= redemption.shares;
        self.shares_supply -= redemption.shares;
        if authority != owner {
            self.share_delegates.get_mut(owner).unwrap().1 -= redemption.shares;
        }

        self.vault_balance -= redemption.amount;
        self.fund(receiver, redemption.amount);
    }
}
