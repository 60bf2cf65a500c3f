//! Program constants

/// Denominator for basis-point rates (100% = 10_000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Withdraw method conversion rates are scaled by this factor
/// (rate = 10_000 means 1:1)
pub const RATE_SCALE: u64 = 10_000;

/// Seconds in one accrual-interval hour
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Maximum byte length of plan / method names
pub const MAX_PLAN_NAME_LEN: usize = 32;

/// Longest accrual interval a plan may use (one year)
pub const MAX_INTERVAL_HOURS: u32 = 8_760;

/// Percent plans are capped at 1000% per cycle
pub const MAX_PERCENT_RATE_BPS: u64 = 100_000;

/// Payout-day mask accepting every weekday (bit 0 = Sunday)
pub const ALL_DAYS: u8 = 0b0111_1111;

/// Default payout-day mask: Monday through Friday
pub const WEEKDAYS_ONLY: u8 = 0b0011_1110;
