//! Risk profile module - per-user risk scores consumed by the risk report.

mod risk_model;
mod risk_traits;

pub use risk_model::{RiskScoreRow, UserRiskProfile};
pub use risk_traits::RiskProfileStoreTrait;
