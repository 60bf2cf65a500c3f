//! Deposit instruction - fund the deposit wallet with lamports

use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{Platform, TxReason, Wallet, WalletKind};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        constraint = platform.is_active @ HyieldError::PlatformInactive
    )]
    pub platform: Account<'info, Platform>,

    /// Treasury PDA receiving the lamports
    #[account(
        mut,
        seeds = [b"treasury"],
        bump = platform.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(
        mut,
        has_one = owner,
        seeds = [b"wallet", owner.key().as_ref(), &[WalletKind::Deposit as u8]],
        bump = deposit_wallet.bump
    )]
    pub deposit_wallet: Account<'info, Wallet>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, HyieldError::InvalidAmount);

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.owner.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
        },
    );
    transfer(cpi_ctx, amount)?;

    let wallet = &mut ctx.accounts.deposit_wallet;
    wallet.balance = helpers::apply_credit(wallet.balance, amount).ok_or(HyieldError::Overflow)?;
    wallet.tx_count = wallet.tx_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    emit!(crate::events::DepositReceived {
        owner: wallet.owner,
        amount,
    });
    emit!(crate::events::WalletCredited {
        owner: wallet.owner,
        kind: WalletKind::Deposit,
        amount,
        post_balance: wallet.balance,
        tx_index: wallet.tx_count,
        reason: TxReason::Deposit,
    });

    msg!("Deposit of {} credited, balance={}", amount, wallet.balance);
    Ok(())
}
