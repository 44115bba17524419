use chrono::NaiveDate;

use crate::quarter::{OverviewEntry, QuarterError, QuarterSummary};
use crate::users::UserRef;

/// Trait for the upstream quarter data collaborators.
///
/// Summary and overview are pure functions of (user, period, portfolio
/// creation date); both sides are computed independently so the reconciler
/// can cross-check them.
pub trait QuarterDataTrait: Send + Sync {
    /// Date the user's portfolio came into existence. Users created after the
    /// quarter end are not yet eligible and are skipped.
    fn portfolio_creation_date(
        &self,
        user: &UserRef,
        start_date: NaiveDate,
    ) -> Result<NaiveDate, QuarterError>;

    /// Whether the user has any buy transactions at all. Users without are
    /// reported as [`QuarterError::NoData`] and skipped silently.
    fn has_buy_transactions(&self, user: &UserRef) -> Result<bool, QuarterError>;

    fn summary(
        &self,
        user: &UserRef,
        start_date: NaiveDate,
        end_date: NaiveDate,
        portfolio_creation_date: NaiveDate,
    ) -> Result<QuarterSummary, QuarterError>;

    fn overview(
        &self,
        user: &UserRef,
        start_date: NaiveDate,
        end_date: NaiveDate,
        portfolio_creation_date: NaiveDate,
    ) -> Result<Vec<OverviewEntry>, QuarterError>;
}
