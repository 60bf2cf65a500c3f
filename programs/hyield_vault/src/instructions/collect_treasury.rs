//! Collect treasury instruction (authority only)
//!
//! Sweeps deposited lamports to the authority. External gateway
//! settlement sits outside the program boundary.

use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::error::HyieldError;
use crate::state::Platform;

#[derive(Accounts)]
pub struct CollectTreasury<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [b"treasury"],
        bump = platform.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_collect_treasury(ctx: Context<CollectTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, HyieldError::InvalidAmount);
    require!(
        ctx.accounts.treasury.lamports() >= amount,
        HyieldError::TreasuryInsufficient
    );

    let bump = ctx.accounts.platform.treasury_bump;
    let seeds: &[&[u8]] = &[b"treasury", &[bump]];
    let signer_seeds = &[seeds];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.treasury.to_account_info(),
            to: ctx.accounts.authority.to_account_info(),
        },
        signer_seeds,
    );
    transfer(cpi_ctx, amount)?;

    emit!(crate::events::TreasuryCollected {
        authority: ctx.accounts.authority.key(),
        amount,
    });

    msg!("Collected {} from treasury", amount);
    Ok(())
}
