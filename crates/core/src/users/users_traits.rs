use crate::errors::Result;
use crate::tenants::TenantContext;
use crate::users::UserRef;

/// Trait for listing the user populations a report runs over.
pub trait UserDirectoryTrait: Send + Sync {
    /// Users holding an investment depot with at least one executed buy order
    /// and a recorded portfolio history. Input universe for the active-users
    /// report.
    fn users_with_investments(&self, tenant: &TenantContext) -> Result<Vec<UserRef>>;

    /// Users with a recorded portfolio history. Input universe for the
    /// quarter validation report.
    fn users_with_history(&self, tenant: &TenantContext) -> Result<Vec<UserRef>>;
}
