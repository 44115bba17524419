//! Asset domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single held asset. Serialized directly as the assets report row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub value: Decimal,
    pub quantity: Decimal,
    /// Latest unit price, when market data is available.
    pub price: Option<Decimal>,
    /// Date the market data was last refreshed.
    pub updated_at: Option<NaiveDate>,
}
