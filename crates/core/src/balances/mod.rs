//! Balances module - asset container balances consumed by the balances
//! report.

mod balances_model;
mod balances_traits;

pub use balances_model::AccountBalance;
pub use balances_traits::BalanceStoreTrait;
