//! Create withdraw method instruction (authority only)

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{Platform, WithdrawMethod};

#[derive(Accounts)]
#[instruction(method_id: u32)]
pub struct CreateWithdrawMethod<'info> {
    #[account(
        mut,
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = authority,
        space = WithdrawMethod::SIZE,
        seeds = [b"withdraw-method", method_id.to_le_bytes().as_ref()],
        bump
    )]
    pub method: Account<'info, WithdrawMethod>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn process_create_withdraw_method(
    ctx: Context<CreateWithdrawMethod>,
    method_id: u32,
    name: String,
    min_amount: u64,
    max_amount: u64,
    fixed_charge: u64,
    percent_charge: u16,
    rate: u64,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    require!(method_id == platform.method_count, HyieldError::IdMismatch);

    helpers::validate_method_params(name.len(), min_amount, max_amount, percent_charge, rate)
        .map_err(map_method_error)?;

    let method = &mut ctx.accounts.method;
    method.id = method_id;
    method.name = name;
    method.min_amount = min_amount;
    method.max_amount = max_amount;
    method.fixed_charge = fixed_charge;
    method.percent_charge = percent_charge;
    method.rate = rate;
    method.is_active = true;
    method.created_at = Clock::get()?.unix_timestamp;
    method.bump = ctx.bumps.method;

    platform.method_count = platform
        .method_count
        .checked_add(1)
        .ok_or(HyieldError::Overflow)?;

    emit!(crate::events::WithdrawMethodCreated {
        method: method.key(),
        method_id,
        min_amount,
        max_amount,
        fixed_charge,
        percent_charge,
        rate,
    });

    msg!("Withdraw method {} created", method_id);
    Ok(())
}

pub(crate) fn map_method_error(reason: &'static str) -> HyieldError {
    match reason {
        "name_too_long" => HyieldError::NameTooLong,
        _ => HyieldError::InvalidMethodLimits,
    }
}
