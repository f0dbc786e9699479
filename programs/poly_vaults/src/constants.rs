// TIME
pub const ONE_HOUR: i64 = 60 * 60;
pub const ONE_DAY: i64 = ONE_HOUR * 24;

// FEES
pub const BPS_PRECISION: u64 = 10_000; // expo -4
pub const MAX_BPS: u16 = 10_000;

/// Upper bound on registered position accounts; a multi redeem must fit every pair in one transaction.
pub const MAX_POSITION_ACCOUNTS: u16 = 12;
