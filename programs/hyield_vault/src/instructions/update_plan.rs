//! Update plan instruction (authority only)
//!
//! Open investments are unaffected: their terms were snapshotted at
//! creation time.

use anchor_lang::prelude::*;

use crate::error::HyieldError;
use crate::helpers;
use crate::instructions::create_plan::map_plan_error;
use crate::state::{InterestType, Plan, Platform};

#[derive(Accounts)]
pub struct UpdatePlan<'info> {
    #[account(
        seeds = [b"platform"],
        bump = platform.bump,
        has_one = authority
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [b"plan", &plan.id.to_le_bytes()],
        bump = plan.bump
    )]
    pub plan: Account<'info, Plan>,

    pub authority: Signer<'info>,
}

pub fn process_update_plan(
    ctx: Context<UpdatePlan>,
    name: String,
    min_amount: u64,
    max_amount: u64,
    rate: u64,
    interest_type: u8,
    is_active: bool,
) -> Result<()> {
    let plan = &mut ctx.accounts.plan;

    helpers::validate_plan_params(
        name.len(),
        min_amount,
        max_amount,
        rate,
        interest_type,
        plan.interval_hours,
        plan.capital_back,
        plan.hold_capital,
    )
    .map_err(map_plan_error)?;

    plan.name = name;
    plan.min_amount = min_amount;
    plan.max_amount = max_amount;
    plan.rate = rate;
    plan.interest_type =
        InterestType::try_from(interest_type).map_err(|_| HyieldError::InvalidInterestType)?;
    plan.is_active = is_active;

    emit!(crate::events::PlanUpdated {
        plan: plan.key(),
        plan_id: plan.id,
        is_active,
    });

    msg!("Plan {} updated, active={}", plan.id, is_active);
    Ok(())
}
