//! Portfolio valuation module - per-day portfolio values and the
//! consecutive-run detector used by the active-users report.

mod run_detector;
mod valuation_model;
mod valuation_traits;

pub use run_detector::detect_consecutive_run;
pub use valuation_model::{
    average_portfolio_value, daily_portfolio_value, ConsecutiveRun, DailyValue,
    PortfolioComponent, PortfolioHistory, ValuationError,
};
pub use valuation_traits::ValuationHistoryTrait;

pub(crate) use valuation_model::round2;
