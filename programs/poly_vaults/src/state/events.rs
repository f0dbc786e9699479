use anchor_lang::prelude::*;

#[event]
#[derive(Default)]
pub struct VaultDepositorRecord {
    pub ts: i64,
    pub vault: Pubkey,
    /// owner of the shares minted or burned
    pub depositor_authority: Pubkey,
    /// receives shares on deposit, principal (and positions) on redeem
    pub receiver: Pubkey,
    pub action: VaultDepositorAction,
    /// principal moved in (deposit, before fee) or out (redeem)
    pub amount: u64,
    pub entry_fee: u64,
    pub shares: u64,

    pub total_shares_before: u128,
    pub vault_amount_before: u64,
}

#[derive(Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq, Debug)]
pub enum VaultDepositorAction {
    Deposit,
    Redeem,
    MultiRedeem,
}

impl Default for VaultDepositorAction {
    fn default() -> Self {
        VaultDepositorAction::Deposit
    }
}

#[event]
#[derive(Default)]
pub struct ProfitSettlementRecord {
    pub ts: i64,
    pub vault: Pubkey,
    pub vault_amount: u64,
    pub total_deposited_amount: u64,
    pub profit: u64,
    pub profit_share: u16,
    pub manager_profit: u64,
}

#[event]
#[derive(Default)]
pub struct PositionRedeemRecord {
    pub ts: i64,
    pub vault: Pubkey,
    pub receiver: Pubkey,
    pub position_mint: Pubkey,
    pub amount: u64,
    pub position_amount_before: u64,
    pub shares: u64,
    pub total_shares_before: u128,
}
