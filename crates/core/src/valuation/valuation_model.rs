//! Valuation domain models and per-day value computation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while valuing a user's portfolio history.
#[derive(Error, Debug)]
pub enum ValuationError {
    /// The user has no recorded portfolio history for the period.
    #[error("No portfolio history for user {0}")]
    NoHistory(String),

    /// A held component lacks the quantity or unit price needed to value it.
    /// Hard failure for the whole user, caught at the per-user boundary.
    #[error("Portfolio component does not have expected data: {0}")]
    BrokenComponent(String),

    #[error("Valuation provider error: {0}")]
    Provider(String),
}

/// One held position on one day, priced in the normalized currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioComponent {
    pub asset_id: String,
    pub quantity: Option<Decimal>,
    pub unit_price_eur: Option<Decimal>,
}

/// Per-day valued portfolio components for a user, keyed chronologically.
pub type PortfolioHistory = BTreeMap<NaiveDate, Vec<PortfolioComponent>>;

/// (date, value) pair for one user on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Contiguous run of days whose value cleared the threshold, plus the average
/// value over the run. Empty when no qualifying run was found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsecutiveRun {
    pub days: Vec<DailyValue>,
    pub average_value: Decimal,
}

impl ConsecutiveRun {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Portfolio value for one day: sum over held components of
/// quantity x unit price, rounded to two decimals.
pub fn daily_portfolio_value(
    components: &[PortfolioComponent],
) -> Result<Decimal, ValuationError> {
    let mut total = Decimal::ZERO;
    for component in components {
        let quantity = component
            .quantity
            .ok_or_else(|| ValuationError::BrokenComponent(component.asset_id.clone()))?;
        let price = component
            .unit_price_eur
            .ok_or_else(|| ValuationError::BrokenComponent(component.asset_id.clone()))?;
        total += quantity * price;
    }
    Ok(round2(total))
}

/// Average daily portfolio value over the whole history. Zero for an empty
/// history.
pub fn average_portfolio_value(history: &PortfolioHistory) -> Result<Decimal, ValuationError> {
    if history.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let mut total = Decimal::ZERO;
    for components in history.values() {
        total += daily_portfolio_value(components)?;
    }
    Ok(total / Decimal::from(history.len()))
}
