//! Accrual crank - settle one due cycle for one investment
//!
//! Permissionless: any caller may settle a due cycle. The claim gate is
//! `status == Active && next_due <= now` combined with the runtime's
//! exclusive write lock on the investment account, so a cycle can never
//! settle twice. Overdue cycles are recovered one per crank because the
//! schedule advances from the previous due time rather than from `now`.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers::{self, CycleInput};
use crate::state::{Investment, InvestmentStatus, Platform, TxReason, Wallet, WalletKind};

#[derive(Accounts)]
pub struct RunAccrual<'info> {
    #[account(
        mut,
        seeds = [b"platform"],
        bump = platform.bump
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [b"investment", investment.owner.as_ref(), &investment.id.to_le_bytes()],
        bump = investment.bump,
        constraint = investment.status == InvestmentStatus::Active
            @ HyieldError::InvestmentNotActive
    )]
    pub investment: Account<'info, Investment>,

    /// Receives this cycle's interest
    #[account(
        mut,
        seeds = [b"wallet", investment.owner.as_ref(), &[WalletKind::Interest as u8]],
        bump = interest_wallet.bump
    )]
    pub interest_wallet: Account<'info, Wallet>,

    /// Receives the returned principal on capital-back completion
    #[account(
        mut,
        seeds = [b"wallet", investment.owner.as_ref(), &[WalletKind::Deposit as u8]],
        bump = deposit_wallet.bump
    )]
    pub deposit_wallet: Account<'info, Wallet>,

    pub caller: Signer<'info>,
}

pub fn process_run_accrual(ctx: Context<RunAccrual>) -> Result<()> {
    let investment = &mut ctx.accounts.investment;
    let now = Clock::get()?.unix_timestamp;

    require!(
        helpers::is_due(investment.next_due, now),
        HyieldError::AccrualNotDue
    );

    let outcome = helpers::settle_cycle(CycleInput {
        principal: investment.principal,
        initial_amount: investment.initial_amount,
        rate: investment.rate,
        interest_type: investment.interest_type,
        rem_repeats: investment.rem_repeats,
        lifetime: investment.lifetime,
        rem_compound: investment.rem_compound,
        capital_back: investment.capital_back,
    })
    .ok_or(HyieldError::Overflow)?;

    // Credit interest before the schedule advances: a failed credit
    // leaves next_due untouched so the cycle is retried.
    let interest_wallet = &mut ctx.accounts.interest_wallet;
    interest_wallet.balance = helpers::apply_credit(interest_wallet.balance, outcome.interest)
        .ok_or(HyieldError::Overflow)?;
    interest_wallet.tx_count = interest_wallet
        .tx_count
        .checked_add(1)
        .ok_or(HyieldError::Overflow)?;

    investment.principal = outcome.new_principal;
    investment.rem_compound = outcome.new_rem_compound;
    investment.rem_repeats = outcome.new_rem_repeats;
    investment.paid_interest = investment
        .paid_interest
        .checked_add(outcome.interest)
        .ok_or(HyieldError::Overflow)?;
    investment.next_due = helpers::advance_due(investment.next_due, investment.interval_secs)
        .ok_or(HyieldError::Overflow)?;
    investment.last_accrual = now;

    let platform = &mut ctx.accounts.platform;
    platform.total_interest_paid = platform
        .total_interest_paid
        .checked_add(outcome.interest)
        .ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WalletCredited {
        owner: interest_wallet.owner,
        kind: WalletKind::Interest,
        amount: outcome.interest,
        post_balance: interest_wallet.balance,
        tx_index: interest_wallet.tx_count,
        reason: TxReason::Accrual,
    });
    emit!(crate::events::InterestAccrued {
        owner: investment.owner,
        investment: investment.key(),
        interest: outcome.interest,
        principal: investment.principal,
        rem_repeats: investment.rem_repeats,
        next_due: investment.next_due,
        caller: ctx.accounts.caller.key(),
    });

    if outcome.completed {
        investment.status = InvestmentStatus::Completed;

        if outcome.capital_return > 0 {
            let deposit_wallet = &mut ctx.accounts.deposit_wallet;
            deposit_wallet.balance =
                helpers::apply_credit(deposit_wallet.balance, outcome.capital_return)
                    .ok_or(HyieldError::Overflow)?;
            deposit_wallet.tx_count = deposit_wallet
                .tx_count
                .checked_add(1)
                .ok_or(HyieldError::Overflow)?;

            emit!(crate::events::WalletCredited {
                owner: deposit_wallet.owner,
                kind: WalletKind::Deposit,
                amount: outcome.capital_return,
                post_balance: deposit_wallet.balance,
                tx_index: deposit_wallet.tx_count,
                reason: TxReason::CapitalReturn,
            });
            emit!(crate::events::CapitalReturned {
                owner: investment.owner,
                investment: investment.key(),
                amount: outcome.capital_return,
            });
        }

        emit!(crate::events::InvestmentCompleted {
            owner: investment.owner,
            investment: investment.key(),
            total_interest: investment.paid_interest,
        });
        msg!("Investment {} completed", investment.id);
    }

    msg!(
        "Accrual settled: interest={}, rem_repeats={}, next_due={}",
        outcome.interest,
        investment.rem_repeats,
        investment.next_due
    );
    Ok(())
}
