//! Program state definitions

use anchor_lang::prelude::*;

/// How a plan's rate is interpreted
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InterestType {
    /// Rate is basis points of the current principal
    #[default]
    Percent,
    /// Rate is a flat lamport amount per cycle
    Fixed,
}

impl TryFrom<u8> for InterestType {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(InterestType::Percent),
            1 => Ok(InterestType::Fixed),
            _ => Err(()),
        }
    }
}

/// Balance bucket a user holds
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WalletKind {
    /// Funds new investments; receives deposits and returned capital
    #[default]
    Deposit,
    /// Accumulates accrual payouts; withdrawable
    Interest,
}

impl TryFrom<u8> for WalletKind {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(WalletKind::Deposit),
            1 => Ok(WalletKind::Interest),
            _ => Err(()),
        }
    }
}

/// Status of an investment
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InvestmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Status of a withdrawal request
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Why a wallet balance moved; carried on ledger events
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxReason {
    Deposit,
    Invest,
    Accrual,
    CapitalReturn,
    WithdrawReserve,
    WithdrawRefund,
    CancelRefund,
}

/// Platform singleton PDA
#[account]
#[derive(Default)]
pub struct Platform {
    /// Admin authority for plans, methods and withdrawal processing
    pub authority: Pubkey,
    /// Bump seed for the treasury PDA
    pub treasury_bump: u8,
    /// Bitmask of weekdays withdrawals are accepted (bit 0 = Sunday)
    pub payout_days: u8,
    /// When set, withdrawal requests are accepted on any day
    pub holiday_withdrawals: bool,
    /// Number of plans created (next plan id)
    pub plan_count: u32,
    /// Number of withdraw methods created (next method id)
    pub method_count: u32,
    /// Lifetime sum of opened investment principal
    pub total_invested: u64,
    /// Lifetime sum of credited accrual interest
    pub total_interest_paid: u64,
    /// Lifetime sum of reserved withdrawal amounts
    pub total_withdrawn: u64,
    /// Master switch for user-facing operations
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Platform {
    pub const SIZE: usize = 8  // discriminator
        + 32  // authority
        + 1   // treasury_bump
        + 1   // payout_days
        + 1   // holiday_withdrawals
        + 4   // plan_count
        + 4   // method_count
        + 8   // total_invested
        + 8   // total_interest_paid
        + 8   // total_withdrawn
        + 1   // is_active
        + 8   // created_at
        + 1   // bump
        + 32; // padding for future fields
}

/// User profile PDA
#[account]
#[derive(Default)]
pub struct UserProfile {
    /// Owner of this profile
    pub owner: Pubkey,
    /// Number of investments opened (next investment id)
    pub investment_count: u32,
    /// Number of withdrawal requests made (next withdrawal id)
    pub withdrawal_count: u32,
    /// Bump seed for PDA
    pub bump: u8,
}

impl UserProfile {
    pub const SIZE: usize = 8  // discriminator
        + 32  // owner
        + 4   // investment_count
        + 4   // withdrawal_count
        + 1;  // bump
}

/// Wallet PDA - one balance bucket per (owner, kind)
#[account]
#[derive(Default)]
pub struct Wallet {
    /// Owner of this wallet
    pub owner: Pubkey,
    /// Deposit or Interest bucket
    pub kind: WalletKind,
    /// Current balance in lamports
    pub balance: u64,
    /// Number of ledger entries recorded against this wallet
    pub tx_count: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Wallet {
    pub const SIZE: usize = 8  // discriminator
        + 32  // owner
        + 1   // kind
        + 8   // balance
        + 8   // tx_count
        + 1;  // bump
}

/// Investment plan PDA - created and edited by the authority only
#[account]
#[derive(Default)]
pub struct Plan {
    /// Sequential plan id (PDA seed)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Minimum investment amount in lamports
    pub min_amount: u64,
    /// Maximum investment amount in lamports
    pub max_amount: u64,
    /// Basis points (Percent) or flat lamports per cycle (Fixed)
    pub rate: u64,
    /// How `rate` is interpreted
    pub interest_type: InterestType,
    /// Hours between accrual cycles
    pub interval_hours: u32,
    /// Number of accrual cycles; 0 = lifetime
    pub repeat_count: u32,
    /// Cycles whose interest folds into the principal
    pub compound_times: u32,
    /// Return the original principal on completion
    pub capital_back: bool,
    /// Platform keeps the principal on completion
    pub hold_capital: bool,
    /// Whether new investments are accepted
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Plan {
    pub const SIZE: usize = 8  // discriminator
        + 4   // id
        + 4 + crate::constants::MAX_PLAN_NAME_LEN  // name
        + 8   // min_amount
        + 8   // max_amount
        + 8   // rate
        + 1   // interest_type
        + 4   // interval_hours
        + 4   // repeat_count
        + 4   // compound_times
        + 1   // capital_back
        + 1   // hold_capital
        + 1   // is_active
        + 8   // created_at
        + 1   // bump
        + 32; // padding for future fields
}

/// Investment PDA - snapshots plan terms at creation time
#[account]
#[derive(Default)]
pub struct Investment {
    /// Owner of this investment
    pub owner: Pubkey,
    /// Plan the terms were snapshotted from
    pub plan: Pubkey,
    /// Per-user sequential id (PDA seed)
    pub id: u32,
    /// Principal at creation; returned on capital-back completion
    pub initial_amount: u64,
    /// Current principal; grows while compound cycles remain
    pub principal: u64,
    /// Snapshotted rate
    pub rate: u64,
    /// Snapshotted interest type
    pub interest_type: InterestType,
    /// Snapshotted interval in seconds
    pub interval_secs: i64,
    /// Accrual cycles left; unused when `lifetime`
    pub rem_repeats: u32,
    /// Plan had repeat_count == 0
    pub lifetime: bool,
    /// Compound cycles left
    pub rem_compound: u32,
    /// Snapshotted capital-back flag
    pub capital_back: bool,
    /// Cumulative interest credited
    pub paid_interest: u64,
    /// Current status
    pub status: InvestmentStatus,
    /// Creation timestamp
    pub created_at: i64,
    /// Timestamp of the last settled cycle
    pub last_accrual: i64,
    /// Next cycle becomes due at this timestamp
    pub next_due: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Investment {
    pub const SIZE: usize = 8  // discriminator
        + 32  // owner
        + 32  // plan
        + 4   // id
        + 8   // initial_amount
        + 8   // principal
        + 8   // rate
        + 1   // interest_type
        + 8   // interval_secs
        + 4   // rem_repeats
        + 1   // lifetime
        + 4   // rem_compound
        + 1   // capital_back
        + 8   // paid_interest
        + 1   // status
        + 8   // created_at
        + 8   // last_accrual
        + 8   // next_due
        + 1   // bump
        + 32; // padding for future fields
}

/// Withdraw method PDA - external payout channel terms
#[account]
#[derive(Default)]
pub struct WithdrawMethod {
    /// Sequential method id (PDA seed)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Minimum withdrawal amount in lamports
    pub min_amount: u64,
    /// Maximum withdrawal amount in lamports
    pub max_amount: u64,
    /// Flat charge in lamports
    pub fixed_charge: u64,
    /// Percent charge in basis points of the amount
    pub percent_charge: u16,
    /// Conversion rate to the method currency, scaled by RATE_SCALE
    pub rate: u64,
    /// Whether new requests are accepted
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl WithdrawMethod {
    pub const SIZE: usize = 8  // discriminator
        + 4   // id
        + 4 + crate::constants::MAX_PLAN_NAME_LEN  // name
        + 8   // min_amount
        + 8   // max_amount
        + 8   // fixed_charge
        + 2   // percent_charge
        + 8   // rate
        + 1   // is_active
        + 8   // created_at
        + 1   // bump
        + 16; // padding for future fields
}

/// Withdrawal request PDA
#[account]
#[derive(Default)]
pub struct Withdrawal {
    /// Owner of this request
    pub owner: Pubkey,
    /// Method the charges were computed from
    pub method: Pubkey,
    /// Per-user sequential id (PDA seed)
    pub id: u32,
    /// Amount reserved from the interest wallet
    pub amount: u64,
    /// fixed_charge + percent_charge applied to amount
    pub charge: u64,
    /// (amount - charge) converted to the method currency
    pub final_amount: u64,
    /// Current status
    pub status: WithdrawalStatus,
    /// Request timestamp
    pub requested_at: i64,
    /// Approval/rejection timestamp; 0 while pending
    pub processed_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Withdrawal {
    pub const SIZE: usize = 8  // discriminator
        + 32  // owner
        + 32  // method
        + 4   // id
        + 8   // amount
        + 8   // charge
        + 8   // final_amount
        + 1   // status
        + 8   // requested_at
        + 8   // processed_at
        + 1   // bump
        + 16; // padding for future fields
}
