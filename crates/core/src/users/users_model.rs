//! User domain models.

use serde::{Deserialize, Serialize};

/// Opaque reference to a user within a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub tenant_id: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        UserRef {
            id: id.into(),
            tenant_id: tenant_id.into(),
        }
    }
}
