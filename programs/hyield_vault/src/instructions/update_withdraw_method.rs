//! Update withdraw method instruction (authority only)

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::instructions::create_withdraw_method::map_method_error;
use crate::state::{Platform, WithdrawMethod};

#[derive(Accounts)]
pub struct UpdateWithdrawMethod<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [b"withdraw-method", &method.id.to_le_bytes()],
        bump = method.bump
    )]
    pub method: Account<'info, WithdrawMethod>,

    pub authority: Signer<'info>,
}

pub fn process_update_withdraw_method(
    ctx: Context<UpdateWithdrawMethod>,
    min_amount: u64,
    max_amount: u64,
    fixed_charge: u64,
    percent_charge: u16,
    rate: u64,
    is_active: bool,
) -> Result<()> {
    let method = &mut ctx.accounts.method;

    helpers::validate_method_params(
        method.name.len(),
        min_amount,
        max_amount,
        percent_charge,
        rate,
    )
    .map_err(map_method_error)?;

    method.min_amount = min_amount;
    method.max_amount = max_amount;
    method.fixed_charge = fixed_charge;
    method.percent_charge = percent_charge;
    method.rate = rate;
    method.is_active = is_active;

    msg!("Withdraw method {} updated, active={}", method.id, is_active);
    Ok(())
}
