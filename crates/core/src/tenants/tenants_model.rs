//! Tenant domain models.

use serde::{Deserialize, Serialize};

/// Owning scope (organization/application) all data and report jobs are
/// partitioned by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TenantContext {
    pub id: String,
    /// Human-readable label, included in quarter validation rows.
    pub name: String,
    /// Worker-pool degree for the per-user reconciliation fan-out.
    pub reconcile_concurrency: usize,
}
