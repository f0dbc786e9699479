/// Lifecycle phase of a vault, derived from the clock and the two configured boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VaultPhase {
    /// `now < deposit_end_ts`
    Deposit,
    /// `deposit_end_ts <= now < trading_end_ts`
    Trading,
    /// `now >= trading_end_ts`
    Withdrawal,
}

impl VaultPhase {
    pub fn at(now: i64, deposit_end_ts: i64, trading_end_ts: i64) -> VaultPhase {
        if now < deposit_end_ts {
            VaultPhase::Deposit
        } else if now < trading_end_ts {
            VaultPhase::Trading
        } else {
            VaultPhase::Withdrawal
        }
    }
}
