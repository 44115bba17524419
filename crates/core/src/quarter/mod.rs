//! Quarter reconciliation module - cross-source validation of a user's
//! quarterly summary against an independently computed overview, plus the
//! bounded fan-out that runs it across a tenant's user population.

mod fanout;
mod quarter_model;
mod quarter_traits;
mod reconciler;

pub use fanout::run_reconciliation;
pub use quarter_model::{
    OverviewEntry, QuarterChecks, QuarterError, QuarterErrorRow, QuarterReportRow,
    QuarterSummary, QuarterValidationRow,
};
pub use quarter_traits::QuarterDataTrait;
pub use reconciler::{reconcile, UserQuarterValidator};
