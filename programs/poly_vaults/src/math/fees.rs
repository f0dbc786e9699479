use crate::constants::BPS_PRECISION;
use crate::error::VaultResult;
use crate::math::casting::Cast;
use crate::math::safe_math::SafeMath;

/// Entry fee charged on a deposit of `amount`, rounded up so the manager is never short of the nominal rate.
pub fn calculate_entry_fee(amount: u64, entry_fee_bps: u16) -> VaultResult<u64> {
    if entry_fee_bps == 0 {
        return Ok(0);
    }

    amount
        .cast::<u128>()?
        .safe_mul(entry_fee_bps.cast()?)?
        .safe_div_ceil(BPS_PRECISION.cast()?)?
        .cast()
}

/// Manager's cut of `profit`, rounded down in favor of depositors.
pub fn calculate_profit_share(profit: u64, profit_share_bps: u16) -> VaultResult<u64> {
    profit
        .cast::<u128>()?
        .safe_mul(profit_share_bps.cast()?)?
        .safe_div(BPS_PRECISION.cast()?)?
        .cast()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_fee_rounds_up() {
        // 1 bps of 1 unit is 0.0001, charged as 1
        assert_eq!(calculate_entry_fee(1, 1).unwrap(), 1);
        // 1% of 150 is exactly 1.5, charged as 2
        assert_eq!(calculate_entry_fee(150, 100).unwrap(), 2);
        // exact results are not bumped
        assert_eq!(calculate_entry_fee(100_000_000, 100).unwrap(), 1_000_000);
        assert_eq!(calculate_entry_fee(100_000_001, 100).unwrap(), 1_000_001);
    }

    #[test]
    fn entry_fee_zero_rate() {
        assert_eq!(calculate_entry_fee(100_000_000, 0).unwrap(), 0);
        assert_eq!(calculate_entry_fee(u64::MAX, 0).unwrap(), 0);
    }

    #[test]
    fn entry_fee_full_rate_takes_everything() {
        assert_eq!(calculate_entry_fee(12_345, 10_000).unwrap(), 12_345);
        assert_eq!(calculate_entry_fee(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn profit_share_rounds_down() {
        assert_eq!(calculate_profit_share(50, 2000).unwrap(), 10);
        // 20% of 49 is 9.8
        assert_eq!(calculate_profit_share(49, 2000).unwrap(), 9);
        assert_eq!(calculate_profit_share(4, 2000).unwrap(), 0);
        assert_eq!(calculate_profit_share(50_000_000, 0).unwrap(), 0);
        assert_eq!(calculate_profit_share(50_000_000, 10_000).unwrap(), 50_000_000);
    }
}
