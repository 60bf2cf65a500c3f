//! Cancel investment instruction (authority only)
//!
//! Marks an active investment cancelled and refunds its current
//! principal to the owner's deposit wallet.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{Investment, InvestmentStatus, Platform, TxReason, Wallet, WalletKind};

#[derive(Accounts)]
pub struct CancelInvestment<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
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

    #[account(
        mut,
        seeds = [b"wallet", investment.owner.as_ref(), &[WalletKind::Deposit as u8]],
        bump = deposit_wallet.bump
    )]
    pub deposit_wallet: Account<'info, Wallet>,

    pub authority: Signer<'info>,
}

pub fn process_cancel_investment(ctx: Context<CancelInvestment>) -> Result<()> {
    let investment = &mut ctx.accounts.investment;
    let refunded = investment.principal;

    investment.status = InvestmentStatus::Cancelled;

    let wallet = &mut ctx.accounts.deposit_wallet;
    wallet.balance = helpers::apply_credit(wallet.balance, refunded).ok_or(HyieldError::Overflow)?;
    wallet.tx_count = wallet.tx_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WalletCredited {
        owner: wallet.owner,
        kind: WalletKind::Deposit,
        amount: refunded,
        post_balance: wallet.balance,
        tx_index: wallet.tx_count,
        reason: TxReason::CancelRefund,
    });
    emit!(crate::events::InvestmentCancelled {
        owner: investment.owner,
        investment: investment.key(),
        refunded,
    });

    msg!("Investment {} cancelled, refunded {}", investment.id, refunded);
    Ok(())
}
