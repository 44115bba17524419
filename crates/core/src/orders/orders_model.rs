//! Order domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::format_date_long;

/// A single executed or pending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_id: String,
    /// BUY or SELL.
    pub action: String,
    pub value_date: Option<NaiveDate>,
    pub value: Decimal,
    pub status: String,
    pub rebalancing: bool,
}

/// Output row of the orders report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub user_id: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub date: Option<NaiveDate>,
    pub value: Decimal,
    pub status: String,
    pub rebalancing: bool,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            user_id: order.user_id.clone(),
            order_type: order.action.clone(),
            date: order.value_date,
            value: order.value,
            status: order.status.clone(),
            rebalancing: order.rebalancing,
        }
    }
}

/// A standing order container that periodically spawns orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentOrder {
    pub user_id: String,
    pub status: String,
    pub amount: Decimal,
    pub frequency_type: Option<String>,
    pub frequency: i32,
    pub order_start_date: Option<NaiveDate>,
    pub order_next_date: Option<NaiveDate>,
    pub order_end_date: Option<NaiveDate>,
    pub action: String,
    pub orders_created: i32,
    pub number_of_retries: i32,
    pub direct_debit: bool,
    pub created: DateTime<Utc>,
    pub mandate_id: Option<String>,
    pub direct_debit_date: Option<NaiveDate>,
    pub cancel_after_next_execution: bool,
    pub period_finished: bool,
}

/// Output row of the recurrent-orders report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentOrderRow {
    pub user_id: String,
    pub status: String,
    pub amount: Decimal,
    pub frequency_type: Option<String>,
    pub frequency: i32,
    pub order_start_date: Option<NaiveDate>,
    pub order_next_date: Option<NaiveDate>,
    pub order_end_date: Option<NaiveDate>,
    pub action: String,
    pub orders_created: i32,
    pub number_of_retries: i32,
    pub direct_debit: bool,
    pub created: String,
    pub mandate_id: Option<String>,
    pub direct_debit_date: Option<NaiveDate>,
    pub cancel_after_next_execution: bool,
}

impl From<&RecurrentOrder> for RecurrentOrderRow {
    fn from(order: &RecurrentOrder) -> Self {
        RecurrentOrderRow {
            user_id: order.user_id.clone(),
            status: order.status.clone(),
            amount: order.amount,
            frequency_type: order.frequency_type.clone(),
            frequency: order.frequency,
            order_start_date: order.order_start_date,
            order_next_date: order.order_next_date,
            order_end_date: order.order_end_date,
            action: order.action.clone(),
            orders_created: order.orders_created,
            number_of_retries: order.number_of_retries,
            direct_debit: order.direct_debit,
            created: format_date_long(order.created),
            mandate_id: order.mandate_id.clone(),
            direct_debit_date: order.direct_debit_date,
            cancel_after_next_execution: order.cancel_after_next_execution,
        }
    }
}
