use crate::errors::Result;
use crate::tenants::TenantContext;

/// Trait for resolving tenant configuration.
pub trait TenantConfigTrait: Send + Sync {
    fn get_tenant(&self, tenant_id: &str) -> Result<TenantContext>;
}
