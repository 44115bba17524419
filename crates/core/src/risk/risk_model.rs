//! Risk profile domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::format_date_long;

/// Risk profile record for one user, as stored by the risk-profile service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRiskProfile {
    pub user_id: String,
    /// Score the user selected during onboarding.
    pub selected_risk_score: i32,
    /// Score the advisory engine would assign today, when available.
    pub suggested_risk_score: Option<i32>,
    pub last_modified: DateTime<Utc>,
    pub portfolio_value: Decimal,
}

/// Output row of the risk-score report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreRow {
    pub user_id: String,
    pub selected_user_risk_score: i32,
    pub suggested_user_risk_score: i32,
    pub risk_score_date_save: String,
    pub investments_portfolio_value: Decimal,
}

impl From<&UserRiskProfile> for RiskScoreRow {
    fn from(profile: &UserRiskProfile) -> Self {
        RiskScoreRow {
            user_id: profile.user_id.clone(),
            selected_user_risk_score: profile.selected_risk_score,
            // Falls back to the selected score when the advisory engine has
            // not produced a suggestion for this user.
            suggested_user_risk_score: profile
                .suggested_risk_score
                .unwrap_or(profile.selected_risk_score),
            risk_score_date_save: format_date_long(profile.last_modified),
            investments_portfolio_value: profile.portfolio_value,
        }
    }
}
