//! Program error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum HyieldError {
    #[msg("Platform is not accepting operations")]
    PlatformInactive,

    #[msg("Plan is not accepting new investments")]
    PlanInactive,

    #[msg("Plan bounds are invalid (require 0 < min <= max)")]
    InvalidPlanBounds,

    #[msg("Accrual interval is out of range")]
    InvalidInterval,

    #[msg("Percent rate exceeds the allowed maximum")]
    InvalidRate,

    #[msg("Capital-back and hold-capital cannot both be set")]
    ConflictingCapitalFlags,

    #[msg("Name exceeds the maximum length")]
    NameTooLong,

    #[msg("Unknown interest type")]
    InvalidInterestType,

    #[msg("Unknown wallet kind")]
    InvalidWalletKind,

    #[msg("Amount is outside the allowed range")]
    InvalidAmount,

    #[msg("Wallet balance is insufficient")]
    InsufficientBalance,

    #[msg("Sequential id does not match the expected counter")]
    IdMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Investment is not in a valid state for this operation")]
    InvestmentNotActive,

    #[msg("No accrual cycle is due yet")]
    AccrualNotDue,

    #[msg("Withdraw method is not accepting requests")]
    MethodInactive,

    #[msg("Withdraw method limits are invalid")]
    InvalidMethodLimits,

    #[msg("Charges meet or exceed the withdrawal amount")]
    ChargeExceedsAmount,

    #[msg("Withdrawals are not accepted today; retry on the next working day")]
    NonPayoutDay,

    #[msg("Withdrawal is not pending")]
    WithdrawalNotPending,

    #[msg("Treasury balance cannot cover this amount")]
    TreasuryInsufficient,
}
