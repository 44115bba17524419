use crate::errors::Result;
use crate::goals::Goal;
use crate::utils::time_utils::DateRange;

/// Trait for the goal store.
pub trait GoalStoreTrait: Send + Sync {
    /// Goals of a tenant's users whose creation time falls in the range.
    fn goals(&self, tenant_id: &str, created: &DateRange) -> Result<Vec<Goal>>;
}
