use chrono::NaiveDate;

use crate::users::UserRef;
use crate::valuation::{PortfolioHistory, ValuationError};

/// Trait for the upstream portfolio valuation collaborator.
///
/// Supplies the per-day valued components for a user over a date range,
/// keyed chronologically. Implementations report a user with no recorded
/// history as [`ValuationError::NoHistory`].
pub trait ValuationHistoryTrait: Send + Sync {
    fn get_history(
        &self,
        user: &UserRef,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<PortfolioHistory, ValuationError>;
}
