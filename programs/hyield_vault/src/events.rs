//! Program events for indexer visibility
//!
//! The wallet ledger's append-only audit trail is the event stream:
//! every balance mutation emits a credit/debit event carrying the
//! post-balance and the wallet's transaction index, so off-chain
//! indexers can rebuild each user's statement without parsing account
//! data.

use anchor_lang::prelude::*;

use crate::state::{TxReason, WalletKind};

/// Emitted when the platform singleton is created
#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
    pub payout_days: u8,
    pub holiday_withdrawals: bool,
}

/// Emitted when a user profile and wallet pair is initialized
#[event]
pub struct ProfileInitialized {
    pub owner: Pubkey,
}

/// Ledger entry: a wallet balance increased
#[event]
pub struct WalletCredited {
    pub owner: Pubkey,
    pub kind: WalletKind,
    pub amount: u64,
    pub post_balance: u64,
    pub tx_index: u64,
    pub reason: TxReason,
}

/// Ledger entry: a wallet balance decreased
#[event]
pub struct WalletDebited {
    pub owner: Pubkey,
    pub kind: WalletKind,
    pub amount: u64,
    pub post_balance: u64,
    pub tx_index: u64,
    pub reason: TxReason,
}

/// Emitted when lamports arrive in the treasury
#[event]
pub struct DepositReceived {
    pub owner: Pubkey,
    pub amount: u64,
}

/// Emitted when the authority creates a plan
#[event]
pub struct PlanCreated {
    pub plan: Pubkey,
    pub plan_id: u32,
    pub min_amount: u64,
    pub max_amount: u64,
    pub rate: u64,
    pub interval_hours: u32,
    pub repeat_count: u32,
}

/// Emitted when the authority edits a plan
#[event]
pub struct PlanUpdated {
    pub plan: Pubkey,
    pub plan_id: u32,
    pub is_active: bool,
}

/// Emitted when a user opens an investment
#[event]
pub struct InvestmentOpened {
    pub owner: Pubkey,
    pub investment: Pubkey,
    pub plan: Pubkey,
    pub investment_id: u32,
    pub amount: u64,
    pub funding_wallet: WalletKind,
    pub next_due: i64,
}

/// Emitted once per settled accrual cycle
#[event]
pub struct InterestAccrued {
    pub owner: Pubkey,
    pub investment: Pubkey,
    pub interest: u64,
    pub principal: u64,
    pub rem_repeats: u32,
    pub next_due: i64,
    pub caller: Pubkey,
}

/// Emitted when a finite investment settles its last cycle
#[event]
pub struct InvestmentCompleted {
    pub owner: Pubkey,
    pub investment: Pubkey,
    pub total_interest: u64,
}

/// Emitted when completion returns the original principal
#[event]
pub struct CapitalReturned {
    pub owner: Pubkey,
    pub investment: Pubkey,
    pub amount: u64,
}

/// Emitted when the authority cancels an investment
#[event]
pub struct InvestmentCancelled {
    pub owner: Pubkey,
    pub investment: Pubkey,
    pub refunded: u64,
}

/// Emitted when the authority creates a withdraw method
#[event]
pub struct WithdrawMethodCreated {
    pub method: Pubkey,
    pub method_id: u32,
    pub min_amount: u64,
    pub max_amount: u64,
    pub fixed_charge: u64,
    pub percent_charge: u16,
    pub rate: u64,
}

/// Emitted when a user reserves funds for an external payout
#[event]
pub struct WithdrawalRequested {
    pub owner: Pubkey,
    pub withdrawal: Pubkey,
    pub method: Pubkey,
    pub amount: u64,
    pub charge: u64,
    pub final_amount: u64,
}

/// Emitted when the authority approves a pending withdrawal
#[event]
pub struct WithdrawalApproved {
    pub owner: Pubkey,
    pub withdrawal: Pubkey,
    pub final_amount: u64,
}

/// Emitted when the authority rejects a pending withdrawal and the
/// reservation is credited back
#[event]
pub struct WithdrawalRejected {
    pub owner: Pubkey,
    pub withdrawal: Pubkey,
    pub refunded: u64,
}

/// Emitted when the authority sweeps treasury lamports
#[event]
pub struct TreasuryCollected {
    pub authority: Pubkey,
    pub amount: u64,
}
