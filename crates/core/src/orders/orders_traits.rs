use crate::errors::Result;
use crate::orders::{Order, RecurrentOrder};
use crate::utils::time_utils::DateRange;

/// Trait for the order store.
pub trait OrderStoreTrait: Send + Sync {
    /// Orders of a tenant's users whose value date falls in the range.
    fn orders(&self, tenant_id: &str, value_date: &DateRange) -> Result<Vec<Order>>;
}

/// Trait for the recurrent-order store.
pub trait RecurrentOrderStoreTrait: Send + Sync {
    /// Recurrent orders of a tenant's users whose creation time falls in the
    /// range, optionally filtered by direct-debit and period-finished flags.
    fn recurrent_orders(
        &self,
        tenant_id: &str,
        created: &DateRange,
        direct_debit: Option<bool>,
        period_finished: Option<bool>,
    ) -> Result<Vec<RecurrentOrder>>;
}
