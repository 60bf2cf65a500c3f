//! Invest instruction - open an investment against a plan
//!
//! Plan terms are snapshotted onto the investment so later plan edits
//! never change an open position.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{
    Investment, InvestmentStatus, Plan, Platform, TxReason, UserProfile, Wallet, WalletKind,
};

#[derive(Accounts)]
#[instruction(investment_id: u32, amount: u64, wallet_kind: u8)]
pub struct Invest<'info> {
    #[account(
        mut,
        seeds = [b"platform"],
        bump = platform.bump,
        constraint = platform.is_active @ HyieldError::PlatformInactive
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [b"plan", &plan.id.to_le_bytes()],
        bump = plan.bump,
        constraint = plan.is_active @ HyieldError::PlanInactive
    )]
    pub plan: Account<'info, Plan>,

    #[account(
        mut,
        has_one = owner,
        seeds = [b"user-profile", owner.key().as_ref()],
        bump = user_profile.bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    /// Wallet the principal is debited from (deposit or interest)
    #[account(
        mut,
        has_one = owner,
        seeds = [b"wallet", owner.key().as_ref(), &[wallet_kind]],
        bump = funding_wallet.bump
    )]
    pub funding_wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = owner,
        space = Investment::SIZE,
        seeds = [b"investment", owner.key().as_ref(), &investment_id.to_le_bytes()],
        bump
    )]
    pub investment: Account<'info, Investment>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_invest(
    ctx: Context<Invest>,
    investment_id: u32,
    amount: u64,
    wallet_kind: u8,
) -> Result<()> {
    let kind = WalletKind::try_from(wallet_kind).map_err(|_| HyieldError::InvalidWalletKind)?;
    let profile = &mut ctx.accounts.user_profile;
    require!(investment_id == profile.investment_count, HyieldError::IdMismatch);

    let plan = &ctx.accounts.plan;
    require!(
        helpers::validate_invest_amount(amount, plan.min_amount, plan.max_amount),
        HyieldError::InvalidAmount
    );

    // Reserve the principal before the investment exists
    let wallet = &mut ctx.accounts.funding_wallet;
    wallet.balance =
        helpers::apply_debit(wallet.balance, amount).ok_or(HyieldError::InsufficientBalance)?;
    wallet.tx_count = wallet.tx_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    let now = Clock::get()?.unix_timestamp;
    let interval_secs =
        helpers::interval_seconds(plan.interval_hours).ok_or(HyieldError::Overflow)?;
    let next_due = now.checked_add(interval_secs).ok_or(HyieldError::Overflow)?;

    let investment = &mut ctx.accounts.investment;
    investment.owner = ctx.accounts.owner.key();
    investment.plan = plan.key();
    investment.id = investment_id;
    investment.initial_amount = amount;
    investment.principal = amount;
    investment.rate = plan.rate;
    investment.interest_type = plan.interest_type;
    investment.interval_secs = interval_secs;
    investment.rem_repeats = plan.repeat_count;
    investment.lifetime = plan.repeat_count == 0;
    investment.rem_compound = plan.compound_times;
    investment.capital_back = plan.capital_back;
    investment.paid_interest = 0;
    investment.status = InvestmentStatus::Active;
    investment.created_at = now;
    investment.last_accrual = now;
    investment.next_due = next_due;
    investment.bump = ctx.bumps.investment;

    profile.investment_count = profile
        .investment_count
        .checked_add(1)
        .ok_or(HyieldError::Overflow)?;

    let platform = &mut ctx.accounts.platform;
    platform.total_invested = platform
        .total_invested
        .checked_add(amount)
        .ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WalletDebited {
        owner: wallet.owner,
        kind,
        amount,
        post_balance: wallet.balance,
        tx_index: wallet.tx_count,
        reason: TxReason::Invest,
    });
    emit!(crate::events::InvestmentOpened {
        owner: investment.owner,
        investment: investment.key(),
        plan: investment.plan,
        investment_id,
        amount,
        funding_wallet: kind,
        next_due,
    });

    msg!(
        "Investment {} opened: principal={}, next_due={}",
        investment_id,
        amount,
        next_due
    );
    Ok(())
}
