//! Create plan instruction (authority only)

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::state::{InterestType, Plan, Platform};

#[derive(Accounts)]
#[instruction(plan_id: u32)]
pub struct CreatePlan<'info> {
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
        space = Plan::SIZE,
        seeds = [b"plan", &plan_id.to_le_bytes()],
        bump
    )]
    pub plan: Account<'info, Plan>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn process_create_plan(
    ctx: Context<CreatePlan>,
    plan_id: u32,
    name: String,
    min_amount: u64,
    max_amount: u64,
    rate: u64,
    interest_type: u8,
    interval_hours: u32,
    repeat_count: u32,
    compound_times: u32,
    capital_back: bool,
    hold_capital: bool,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    require!(plan_id == platform.plan_count, HyieldError::IdMismatch);

    helpers::validate_plan_params(
        name.len(),
        min_amount,
        max_amount,
        rate,
        interest_type,
        interval_hours,
        capital_back,
        hold_capital,
    )
    .map_err(map_plan_error)?;

    let parsed_type =
        InterestType::try_from(interest_type).map_err(|_| HyieldError::InvalidInterestType)?;

    let plan = &mut ctx.accounts.plan;
    plan.id = plan_id;
    plan.name = name;
    plan.min_amount = min_amount;
    plan.max_amount = max_amount;
    plan.rate = rate;
    plan.interest_type = parsed_type;
    plan.interval_hours = interval_hours;
    plan.repeat_count = repeat_count;
    plan.compound_times = compound_times;
    plan.capital_back = capital_back;
    plan.hold_capital = hold_capital;
    plan.is_active = true;
    plan.created_at = Clock::get()?.unix_timestamp;
    plan.bump = ctx.bumps.plan;

    platform.plan_count = platform.plan_count.checked_add(1).ok_or(HyieldError::Overflow)?;

    emit!(crate::events::PlanCreated {
        plan: plan.key(),
        plan_id,
        min_amount,
        max_amount,
        rate,
        interval_hours,
        repeat_count,
    });

    msg!("Plan {} created", plan_id);
    Ok(())
}

pub(crate) fn map_plan_error(reason: &'static str) -> HyieldError {
    match reason {
        "name_too_long" => HyieldError::NameTooLong,
        "invalid_plan_bounds" => HyieldError::InvalidPlanBounds,
        "invalid_interval" => HyieldError::InvalidInterval,
        "invalid_interest_type" => HyieldError::InvalidInterestType,
        "invalid_rate" => HyieldError::InvalidRate,
        "conflicting_capital_flags" => HyieldError::ConflictingCapitalFlags,
        _ => HyieldError::InvalidPlanBounds,
    }
}
