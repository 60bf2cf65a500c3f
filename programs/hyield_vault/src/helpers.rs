//! Pure business logic helpers — no Anchor Context dependency.
//!
//! Every public function in this module is testable with `cargo test`.
//! Instruction handlers delegate arithmetic / validation here so that
//! coverage reflects actual domain-level correctness.

use crate::constants::{
    BPS_DENOMINATOR, MAX_INTERVAL_HOURS, MAX_PERCENT_RATE_BPS, MAX_PLAN_NAME_LEN, RATE_SCALE,
    SECONDS_PER_HOUR,
};
use crate::state::InterestType;

// =========================================================================
// Cycle interest arithmetic
// =========================================================================

/// Interest credited for one accrual cycle.
///
/// Percent: `principal * rate / 10_000` (rate in basis points).
/// Fixed: the flat `rate` value.
///
/// Returns `None` on overflow.
pub fn cycle_interest(principal: u64, rate: u64, interest_type: InterestType) -> Option<u64> {
    match interest_type {
        InterestType::Percent => {
            let scaled = (principal as u128).checked_mul(rate as u128)?;
            u64::try_from(scaled / BPS_DENOMINATOR as u128).ok()
        }
        InterestType::Fixed => Some(rate),
    }
}

/// Everything a settled cycle changes, computed in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Interest credited to the interest wallet this cycle
    pub interest: u64,
    /// Principal used for the next cycle (grows while compounding)
    pub new_principal: u64,
    pub new_rem_compound: u32,
    /// Unchanged for lifetime investments
    pub new_rem_repeats: u32,
    /// Remaining repeats hit zero on a finite investment
    pub completed: bool,
    /// Initial principal owed back to the deposit wallet, 0 unless
    /// completing with capital-back
    pub capital_return: u64,
}

/// Inputs for settling one cycle, snapshotted from the investment row.
#[derive(Clone, Copy, Debug)]
pub struct CycleInput {
    pub principal: u64,
    pub initial_amount: u64,
    pub rate: u64,
    pub interest_type: InterestType,
    pub rem_repeats: u32,
    pub lifetime: bool,
    pub rem_compound: u32,
    pub capital_back: bool,
}

/// Settle exactly one due accrual cycle.
///
/// This cycle's interest is computed from the current principal; when
/// compound cycles remain the interest also folds into the principal
/// used by the *next* cycle. Finite investments decrement their repeat
/// counter and complete at zero, returning the initial principal when
/// capital-back was snapshotted.
///
/// Returns `None` on overflow or when called with `rem_repeats == 0`
/// on a finite investment (already exhausted).
pub fn settle_cycle(input: CycleInput) -> Option<CycleOutcome> {
    if !input.lifetime && input.rem_repeats == 0 {
        return None;
    }

    let interest = cycle_interest(input.principal, input.rate, input.interest_type)?;

    let (new_principal, new_rem_compound) = if input.rem_compound > 0 {
        (input.principal.checked_add(interest)?, input.rem_compound - 1)
    } else {
        (input.principal, 0)
    };

    let new_rem_repeats = if input.lifetime {
        input.rem_repeats
    } else {
        input.rem_repeats - 1
    };

    let completed = !input.lifetime && new_rem_repeats == 0;
    let capital_return = if completed && input.capital_back {
        input.initial_amount
    } else {
        0
    };

    Some(CycleOutcome {
        interest,
        new_principal,
        new_rem_compound,
        new_rem_repeats,
        completed,
        capital_return,
    })
}

// =========================================================================
// Schedule arithmetic
// =========================================================================

/// Seconds for a plan interval expressed in hours.
pub fn interval_seconds(interval_hours: u32) -> Option<i64> {
    (interval_hours as i64).checked_mul(SECONDS_PER_HOUR)
}

/// Advance the due timestamp by one interval from the *previous* due
/// time, not from `now`. Overdue cycles therefore stay claimable and a
/// stalled crank catches up one cycle per invocation.
pub fn advance_due(next_due: i64, interval_secs: i64) -> Option<i64> {
    next_due.checked_add(interval_secs)
}

/// Whether an accrual cycle is claimable.
pub fn is_due(next_due: i64, now: i64) -> bool {
    now >= next_due
}

// =========================================================================
// Wallet balance arithmetic
// =========================================================================

/// Post-balance after a credit. `None` on overflow.
pub fn apply_credit(balance: u64, amount: u64) -> Option<u64> {
    balance.checked_add(amount)
}

/// Post-balance after a debit. `None` when the balance cannot cover it.
pub fn apply_debit(balance: u64, amount: u64) -> Option<u64> {
    balance.checked_sub(amount)
}

// =========================================================================
// Withdrawal charge arithmetic
// =========================================================================

/// Total charge for a withdrawal: `fixed + amount * percent_bps / 10_000`.
///
/// Returns `None` on overflow.
pub fn withdrawal_charge(amount: u64, fixed_charge: u64, percent_bps: u16) -> Option<u64> {
    let percent_part = (amount as u128).checked_mul(percent_bps as u128)? / BPS_DENOMINATOR as u128;
    fixed_charge.checked_add(u64::try_from(percent_part).ok()?)
}

/// Amount owed to the user after charges. `None` when charges eat the
/// whole amount (such a request is refused, not truncated to zero).
pub fn withdrawal_payable(amount: u64, charge: u64) -> Option<u64> {
    match amount.checked_sub(charge) {
        Some(payable) if payable > 0 => Some(payable),
        _ => None,
    }
}

/// Convert a payable amount into the method currency using its scaled
/// rate (`RATE_SCALE` = 1:1). Returns `None` on overflow.
pub fn convert_payout(payable: u64, rate: u64) -> Option<u64> {
    let converted = (payable as u128).checked_mul(rate as u128)? / RATE_SCALE as u128;
    u64::try_from(converted).ok()
}

// =========================================================================
// Payout-day rule
// =========================================================================

/// Day of week for a unix timestamp, 0 = Sunday .. 6 = Saturday.
pub fn weekday(timestamp: i64) -> u8 {
    // 1970-01-01 was a Thursday (day 4)
    let days = timestamp.div_euclid(86_400);
    ((days + 4).rem_euclid(7)) as u8
}

/// Whether a withdrawal request is accepted at `now`.
///
/// `payout_days` is a weekday bitmask (bit 0 = Sunday); when
/// `holiday_withdrawals` is set the mask is ignored.
pub fn is_payout_day(now: i64, payout_days: u8, holiday_withdrawals: bool) -> bool {
    holiday_withdrawals || payout_days & (1 << weekday(now)) != 0
}

// =========================================================================
// Parameter validation (pure)
// =========================================================================

/// Validate plan parameters without requiring Anchor context.
/// Returns `Ok(())` or a string describing the violation.
pub fn validate_plan_params(
    name_len: usize,
    min_amount: u64,
    max_amount: u64,
    rate: u64,
    interest_type: u8,
    interval_hours: u32,
    capital_back: bool,
    hold_capital: bool,
) -> Result<(), &'static str> {
    if name_len > MAX_PLAN_NAME_LEN {
        return Err("name_too_long");
    }
    if min_amount == 0 || min_amount > max_amount {
        return Err("invalid_plan_bounds");
    }
    if interval_hours == 0 || interval_hours > MAX_INTERVAL_HOURS {
        return Err("invalid_interval");
    }
    let parsed = InterestType::try_from(interest_type).map_err(|_| "invalid_interest_type")?;
    if parsed == InterestType::Percent && rate > MAX_PERCENT_RATE_BPS {
        return Err("invalid_rate");
    }
    if capital_back && hold_capital {
        return Err("conflicting_capital_flags");
    }
    Ok(())
}

/// Validate withdraw method parameters.
pub fn validate_method_params(
    name_len: usize,
    min_amount: u64,
    max_amount: u64,
    percent_charge: u16,
    rate: u64,
) -> Result<(), &'static str> {
    if name_len > MAX_PLAN_NAME_LEN {
        return Err("name_too_long");
    }
    if min_amount == 0 || min_amount > max_amount {
        return Err("invalid_method_limits");
    }
    if percent_charge as u64 > BPS_DENOMINATOR {
        return Err("invalid_method_limits");
    }
    if rate == 0 {
        return Err("invalid_method_limits");
    }
    Ok(())
}

/// Validate an investment amount against plan bounds.
pub fn validate_invest_amount(amount: u64, min_amount: u64, max_amount: u64) -> bool {
    amount >= min_amount && amount <= max_amount
}
