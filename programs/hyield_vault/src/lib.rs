//! Hyield Vault Program
//!
//! An onchain investment-plan vault. The authority publishes plans
//! (rate, interval, repeat/compound counts, capital-back); users fund a
//! deposit wallet, open plan investments, and a permissionless crank
//! settles one due accrual cycle at a time into their interest wallet.
//! Interest is withdrawable through authority-managed methods with a
//! pending/approved/rejected lifecycle.

use anchor_lang::prelude::*;

declare_id!("CF5KgXemCPw2dCpwfawrp6Ud9HdDiBEN6QNxmqvcJbLM");

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;


#[cfg(test)]
mod prop_tests;

use instructions::*;

#[program]
pub mod hyield_vault {
    use super::*;

    /// Create the platform singleton and treasury
    pub fn initialize_platform(
        ctx: Context<InitializePlatform>,
        payout_days: u8,
        holiday_withdrawals: bool,
    ) -> Result<()> {
        instructions::initialize_platform::process_initialize_platform(
            ctx,
            payout_days,
            holiday_withdrawals,
        )
    }

    /// Create a user profile with its deposit and interest wallets
    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        instructions::initialize_user::process_initialize_user(ctx)
    }

    /// Move lamports into the treasury and credit the deposit wallet
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::process_deposit(ctx, amount)
    }

    /// Publish a new investment plan (authority only)
    #[allow(clippy::too_many_arguments)]
    pub fn create_plan(
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
        instructions::create_plan::process_create_plan(
            ctx,
            plan_id,
            name,
            min_amount,
            max_amount,
            rate,
            interest_type,
            interval_hours,
            repeat_count,
            compound_times,
            capital_back,
            hold_capital,
        )
    }

    /// Edit plan terms; open investments keep their snapshot (authority only)
    #[allow(clippy::too_many_arguments)]
    pub fn update_plan(
        ctx: Context<UpdatePlan>,
        name: String,
        min_amount: u64,
        max_amount: u64,
        rate: u64,
        interest_type: u8,
        is_active: bool,
    ) -> Result<()> {
        instructions::update_plan::process_update_plan(
            ctx,
            name,
            min_amount,
            max_amount,
            rate,
            interest_type,
            is_active,
        )
    }

    /// Open an investment against a plan, funded from the chosen wallet
    pub fn invest(
        ctx: Context<Invest>,
        investment_id: u32,
        amount: u64,
        wallet_kind: u8,
    ) -> Result<()> {
        instructions::invest::process_invest(ctx, investment_id, amount, wallet_kind)
    }

    /// Settle one due accrual cycle (permissionless crank)
    pub fn run_accrual(ctx: Context<RunAccrual>) -> Result<()> {
        instructions::run_accrual::process_run_accrual(ctx)
    }

    /// Cancel an active investment and refund its principal (authority only)
    pub fn cancel_investment(ctx: Context<CancelInvestment>) -> Result<()> {
        instructions::cancel_investment::process_cancel_investment(ctx)
    }

    /// Publish a withdraw method (authority only)
    pub fn create_withdraw_method(
        ctx: Context<CreateWithdrawMethod>,
        method_id: u32,
        name: String,
        min_amount: u64,
        max_amount: u64,
        fixed_charge: u64,
        percent_charge: u16,
        rate: u64,
    ) -> Result<()> {
        instructions::create_withdraw_method::process_create_withdraw_method(
            ctx,
            method_id,
            name,
            min_amount,
            max_amount,
            fixed_charge,
            percent_charge,
            rate,
        )
    }

    /// Edit withdraw method terms (authority only)
    pub fn update_withdraw_method(
        ctx: Context<UpdateWithdrawMethod>,
        min_amount: u64,
        max_amount: u64,
        fixed_charge: u64,
        percent_charge: u16,
        rate: u64,
        is_active: bool,
    ) -> Result<()> {
        instructions::update_withdraw_method::process_update_withdraw_method(
            ctx,
            min_amount,
            max_amount,
            fixed_charge,
            percent_charge,
            rate,
            is_active,
        )
    }

    /// Reserve interest-wallet funds for an external payout
    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        withdrawal_id: u32,
        amount: u64,
    ) -> Result<()> {
        instructions::request_withdrawal::process_request_withdrawal(ctx, withdrawal_id, amount)
    }

    /// Approve a pending withdrawal; payout happens externally (authority only)
    pub fn approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
        instructions::approve_withdrawal::process_approve_withdrawal(ctx)
    }

    /// Reject a pending withdrawal and credit the reservation back (authority only)
    pub fn reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
        instructions::reject_withdrawal::process_reject_withdrawal(ctx)
    }

    /// Sweep deposited lamports out of the treasury (authority only)
    pub fn collect_treasury(ctx: Context<CollectTreasury>, amount: u64) -> Result<()> {
        instructions::collect_treasury::process_collect_treasury(ctx, amount)
    }
}
