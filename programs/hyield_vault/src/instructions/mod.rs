//! Instruction handlers

#![allow(ambiguous_glob_reexports)]

pub mod approve_withdrawal;
pub mod cancel_investment;
pub mod collect_treasury;
pub mod create_plan;
pub mod create_withdraw_method;
pub mod deposit;
pub mod initialize_platform;
pub mod initialize_user;
pub mod invest;
pub mod reject_withdrawal;
pub mod request_withdrawal;
pub mod run_accrual;
pub mod update_plan;
pub mod update_withdraw_method;

pub use approve_withdrawal::*;
pub use cancel_investment::*;
pub use collect_treasury::*;
pub use create_plan::*;
pub use create_withdraw_method::*;
pub use deposit::*;
pub use initialize_platform::*;
pub use initialize_user::*;
pub use invest::*;
pub use reject_withdrawal::*;
pub use request_withdrawal::*;
pub use run_accrual::*;
pub use update_plan::*;
pub use update_withdraw_method::*;
