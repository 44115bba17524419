//! Balance domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total value of one asset container. Serialized directly as the balances
/// report row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub container_type: String,
    pub total_value: Decimal,
}
