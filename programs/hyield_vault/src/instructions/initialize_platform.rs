//! Initialize the platform singleton and treasury

use anchor_lang::prelude::*;

use crate::constants::ALL_DAYS;
use crate::error::HyieldError;
use crate::state::Platform;

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(
        init,
        payer = authority,
        space = Platform::SIZE,
        seeds = [b"platform"],
        bump
    )]
    pub platform: Account<'info, Platform>,

    /// Treasury PDA holding deposited lamports
    #[account(
        mut,
        seeds = [b"treasury"],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize_platform(
    ctx: Context<InitializePlatform>,
    payout_days: u8,
    holiday_withdrawals: bool,
) -> Result<()> {
    require!(payout_days & ALL_DAYS != 0, HyieldError::NonPayoutDay);

    let platform = &mut ctx.accounts.platform;
    platform.authority = ctx.accounts.authority.key();
    platform.treasury_bump = ctx.bumps.treasury;
    platform.payout_days = payout_days & ALL_DAYS;
    platform.holiday_withdrawals = holiday_withdrawals;
    platform.plan_count = 0;
    platform.method_count = 0;
    platform.total_invested = 0;
    platform.total_interest_paid = 0;
    platform.total_withdrawn = 0;
    platform.is_active = true;
    platform.created_at = Clock::get()?.unix_timestamp;
    platform.bump = ctx.bumps.platform;

    emit!(crate::events::PlatformInitialized {
        authority: platform.authority,
        payout_days: platform.payout_days,
        holiday_withdrawals,
    });

    msg!("Platform initialized by {}", platform.authority);
    Ok(())
}
