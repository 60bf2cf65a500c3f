//! Approve withdrawal instruction (authority only)
//!
//! Terminal transition Pending -> Approved. The payout itself happens
//! through the external channel the method describes; the reservation
//! already left the wallet at request time, so no balance changes here.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::state::{Platform, Withdrawal, WithdrawalStatus};

#[derive(Accounts)]
pub struct ApproveWithdrawal<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [b"withdrawal", withdrawal.owner.as_ref(), &withdrawal.id.to_le_bytes()],
        bump = withdrawal.bump,
        constraint = withdrawal.status == WithdrawalStatus::Pending
            @ HyieldError::WithdrawalNotPending
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    pub authority: Signer<'info>,
}

pub fn process_approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.status = WithdrawalStatus::Approved;
    withdrawal.processed_at = Clock::get()?.unix_timestamp;

    emit!(crate::events::WithdrawalApproved {
        owner: withdrawal.owner,
        withdrawal: withdrawal.key(),
        final_amount: withdrawal.final_amount,
    });

    msg!("Withdrawal {} approved", withdrawal.id);
    Ok(())
}
