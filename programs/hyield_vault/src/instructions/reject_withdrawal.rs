//! Reject withdrawal instruction (authority only)
//!
//! Terminal transition Pending -> Rejected. The full reserved amount is
//! credited back, restoring the interest wallet to its pre-request
//! balance.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{Platform, TxReason, Wallet, WalletKind, Withdrawal, WithdrawalStatus};

#[derive(Accounts)]
pub struct RejectWithdrawal<'info> {
    #[account(
        mut,
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

    #[account(
        mut,
        seeds = [b"wallet", withdrawal.owner.as_ref(), &[WalletKind::Interest as u8]],
        bump = interest_wallet.bump
    )]
    pub interest_wallet: Account<'info, Wallet>,

    pub authority: Signer<'info>,
}

pub fn process_reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
    let withdrawal = &mut ctx.accounts.withdrawal;
    let refunded = withdrawal.amount;

    withdrawal.status = WithdrawalStatus::Rejected;
    withdrawal.processed_at = Clock::get()?.unix_timestamp;

    let wallet = &mut ctx.accounts.interest_wallet;
    wallet.balance = helpers::apply_credit(wallet.balance, refunded).ok_or(HyieldError::Overflow)?;
    wallet.tx_count = wallet.tx_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    let platform = &mut ctx.accounts.platform;
    platform.total_withdrawn = platform
        .total_withdrawn
        .checked_sub(refunded)
        .ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WalletCredited {
        owner: wallet.owner,
        kind: WalletKind::Interest,
        amount: refunded,
        post_balance: wallet.balance,
        tx_index: wallet.tx_count,
        reason: TxReason::WithdrawRefund,
    });
    emit!(crate::events::WithdrawalRejected {
        owner: withdrawal.owner,
        withdrawal: withdrawal.key(),
        refunded,
    });

    msg!("Withdrawal {} rejected, refunded {}", withdrawal.id, refunded);
    Ok(())
}
