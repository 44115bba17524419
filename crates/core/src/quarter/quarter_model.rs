//! Quarter reconciliation domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating a user's quarter data.
#[derive(Error, Debug)]
pub enum QuarterError {
    /// The user has no buy transactions in the lookup window - nothing to
    /// check. Skipped silently by the fan-out, never reported.
    #[error("No data to check for user {0}")]
    NoData(String),

    /// The summary carries no cash flow entry for the designated cash
    /// component, so the cash check cannot be evaluated.
    #[error("Missing cash component flow for user {0}")]
    MissingCashComponent(String),

    #[error("Quarter data provider error: {0}")]
    Provider(String),
}

/// Per-user aggregate for a quarter, computed by the summary provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuarterSummary {
    pub portfolio_start_value: Decimal,
    pub portfolio_end_value: Decimal,
    pub net_inflow_outflow: Decimal,
    /// Net cash flow per asset identifier over the quarter.
    pub flow_per_asset: HashMap<String, Decimal>,
    pub return_in_cash: Decimal,
    /// Cumulative performance as a fraction (0.05 = +5%).
    pub cumulative_performance: Decimal,
    pub interest_paid: Decimal,
    pub accrued_interest: Decimal,
    pub asset_container_id: String,
    pub last_sell_date: Option<NaiveDate>,
    pub ptf_before_last_sell: Option<Decimal>,
    pub flow_before_last_sell: Option<Decimal>,
}

/// Independently computed per-asset breakdown for the same user and period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewEntry {
    pub asset_id: String,
    pub start_total_value: Decimal,
    pub end_total_value: Decimal,
}

/// Outcome of the six reconciliation sub-checks for one user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuarterChecks {
    pub revenue_per_asset_valid: bool,
    pub cash_component_valid: bool,
    pub revenue_magnitude_valid: bool,
    pub start_values_valid: bool,
    pub end_values_valid: bool,
    pub transaction_and_revenue_valid: bool,
}

impl QuarterChecks {
    pub fn all_valid(&self) -> bool {
        self.revenue_per_asset_valid
            && self.cash_component_valid
            && self.revenue_magnitude_valid
            && self.start_values_valid
            && self.end_values_valid
            && self.transaction_and_revenue_valid
    }
}

/// Report row emitted for a user whose quarter data failed at least one
/// sub-check. Carries the full summary minus the raw per-asset flow map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuarterValidationRow {
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Tenant label the user belongs to.
    pub context: String,
    #[serde(flatten)]
    pub checks: QuarterChecks,
    pub net_inflow_outflow: Decimal,
    pub portfolio_start_value: Decimal,
    pub portfolio_end_value: Decimal,
    pub return_in_cash: Decimal,
    pub cumulative_performance: Decimal,
    pub interest_paid: Decimal,
    pub accrued_interest: Decimal,
    pub asset_container_id: String,
    pub last_sell_date: Option<String>,
    pub ptf_before_last_sell: Option<Decimal>,
    pub flow_before_last_sell: Option<Decimal>,
}

/// Report row emitted when a user's validation failed with an unexpected
/// error. The failure is isolated to the user and does not abort the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuarterErrorRow {
    pub user_id: String,
    pub error: String,
}

/// A single entry of the quarter validation report payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuarterReportRow {
    Invalid(QuarterValidationRow),
    Error(QuarterErrorRow),
}

impl QuarterReportRow {
    pub fn user_id(&self) -> &str {
        match self {
            QuarterReportRow::Invalid(row) => &row.user_id,
            QuarterReportRow::Error(row) => &row.user_id,
        }
    }
}
