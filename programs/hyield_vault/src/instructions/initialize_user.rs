//! Initialize a user profile and its wallet pair

use anchor_lang::prelude::*;

use crate::state::{UserProfile, Wallet, WalletKind};

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(
        init,
        payer = owner,
        space = UserProfile::SIZE,
        seeds = [b"user-profile", owner.key().as_ref()],
        bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    #[account(
        init,
        payer = owner,
        space = Wallet::SIZE,
        seeds = [b"wallet", owner.key().as_ref(), &[WalletKind::Deposit as u8]],
        bump
    )]
    pub deposit_wallet: Account<'info, Wallet>,

    #[account(
        init,
        payer = owner,
        space = Wallet::SIZE,
        seeds = [b"wallet", owner.key().as_ref(), &[WalletKind::Interest as u8]],
        bump
    )]
    pub interest_wallet: Account<'info, Wallet>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    let profile = &mut ctx.accounts.user_profile;
    profile.owner = owner;
    profile.investment_count = 0;
    profile.withdrawal_count = 0;
    profile.bump = ctx.bumps.user_profile;

    let deposit_wallet = &mut ctx.accounts.deposit_wallet;
    deposit_wallet.owner = owner;
    deposit_wallet.kind = WalletKind::Deposit;
    deposit_wallet.balance = 0;
    deposit_wallet.tx_count = 0;
    deposit_wallet.bump = ctx.bumps.deposit_wallet;

    let interest_wallet = &mut ctx.accounts.interest_wallet;
    interest_wallet.owner = owner;
    interest_wallet.kind = WalletKind::Interest;
    interest_wallet.balance = 0;
    interest_wallet.tx_count = 0;
    interest_wallet.bump = ctx.bumps.interest_wallet;

    emit!(crate::events::ProfileInitialized { owner });

    msg!("User profile initialized for {}", owner);
    Ok(())
}
