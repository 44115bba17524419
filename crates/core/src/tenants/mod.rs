//! Tenants module - owning scope for jobs and data.

mod tenants_model;
mod tenants_traits;

pub use tenants_model::TenantContext;
pub use tenants_traits::TenantConfigTrait;
