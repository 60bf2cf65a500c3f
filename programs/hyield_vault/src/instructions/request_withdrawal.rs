//! Request withdrawal instruction - reserve interest-wallet funds
//!
//! The reserved amount is debited immediately; approval pays out
//! externally, rejection credits the reservation back.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{
    Platform, TxReason, UserProfile, Wallet, WalletKind, Withdrawal, WithdrawalStatus,
    WithdrawMethod,
};

#[derive(Accounts)]
#[instruction(withdrawal_id: u32)]
pub struct RequestWithdrawal<'info> {
    #[account(
        mut,
        seeds = [b"platform"],
        bump = platform.bump,
        constraint = platform.is_active @ HyieldError::PlatformInactive
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [b"withdraw-method", &method.id.to_le_bytes()],
        bump = method.bump,
        constraint = method.is_active @ HyieldError::MethodInactive
    )]
    pub method: Account<'info, WithdrawMethod>,

    #[account(
        mut,
        has_one = owner,
        seeds = [b"user-profile", owner.key().as_ref()],
        bump = user_profile.bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    #[account(
        mut,
        has_one = owner,
        seeds = [b"wallet", owner.key().as_ref(), &[WalletKind::Interest as u8]],
        bump = interest_wallet.bump
    )]
    pub interest_wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = owner,
        space = Withdrawal::SIZE,
        seeds = [b"withdrawal", owner.key().as_ref(), &withdrawal_id.to_le_bytes()],
        bump
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_request_withdrawal(
    ctx: Context<RequestWithdrawal>,
    withdrawal_id: u32,
    amount: u64,
) -> Result<()> {
    let profile = &mut ctx.accounts.user_profile;
    require!(withdrawal_id == profile.withdrawal_count, HyieldError::IdMismatch);

    let platform = &mut ctx.accounts.platform;
    let now = Clock::get()?.unix_timestamp;
    require!(
        helpers::is_payout_day(now, platform.payout_days, platform.holiday_withdrawals),
        HyieldError::NonPayoutDay
    );

    let method = &ctx.accounts.method;
    require!(
        amount >= method.min_amount && amount <= method.max_amount,
        HyieldError::InvalidAmount
    );

    let charge = helpers::withdrawal_charge(amount, method.fixed_charge, method.percent_charge)
        .ok_or(HyieldError::Overflow)?;
    let payable =
        helpers::withdrawal_payable(amount, charge).ok_or(HyieldError::ChargeExceedsAmount)?;
    let final_amount = helpers::convert_payout(payable, method.rate).ok_or(HyieldError::Overflow)?;

    // Reserve the funds up front
    let wallet = &mut ctx.accounts.interest_wallet;
    wallet.balance =
        helpers::apply_debit(wallet.balance, amount).ok_or(HyieldError::InsufficientBalance)?;
    wallet.tx_count = wallet.tx_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.owner = ctx.accounts.owner.key();
    withdrawal.method = method.key();
    withdrawal.id = withdrawal_id;
    withdrawal.amount = amount;
    withdrawal.charge = charge;
    withdrawal.final_amount = final_amount;
    withdrawal.status = WithdrawalStatus::Pending;
    withdrawal.requested_at = now;
    withdrawal.processed_at = 0;
    withdrawal.bump = ctx.bumps.withdrawal;

    profile.withdrawal_count = profile
        .withdrawal_count
        .checked_add(1)
        .ok_or(HyieldError::Overflow)?;
    platform.total_withdrawn = platform
        .total_withdrawn
        .checked_add(amount)
        .ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WalletDebited {
        owner: wallet.owner,
        kind: WalletKind::Interest,
        amount,
        post_balance: wallet.balance,
        tx_index: wallet.tx_count,
        reason: TxReason::WithdrawReserve,
    });
    emit!(crate::events::WithdrawalRequested {
        owner: withdrawal.owner,
        withdrawal: withdrawal.key(),
        method: withdrawal.method,
        amount,
        charge,
        final_amount,
    });

    msg!(
        "Withdrawal {} requested: amount={}, charge={}, payable={}",
        withdrawal_id,
        amount,
        charge,
        final_amount
    );
    Ok(())
}
