//! Risk-scores report: selected vs suggested risk score per user, optionally
//! bounded to a score window.

use std::sync::Arc;

use crate::constants::MSG_NO_RISK_SCORES;
use crate::errors::Result;
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};
use crate::risk::{RiskProfileStoreTrait, RiskScoreRow};

pub struct RiskScoresGenerator {
    risk_profiles: Arc<dyn RiskProfileStoreTrait>,
}

impl RiskScoresGenerator {
    pub fn new(risk_profiles: Arc<dyn RiskProfileStoreTrait>) -> Self {
        RiskScoresGenerator { risk_profiles }
    }
}

impl ReportGenerator for RiskScoresGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::RiskScores {
            lower_risk_score,
            upper_risk_score,
        } = &request.params
        else {
            return Err(ReportError::ParamsMismatch(ReportType::RiskScores.to_string()).into());
        };

        let profiles = self.risk_profiles.risk_profiles(
            &request.tenant.id,
            *lower_risk_score,
            *upper_risk_score,
        )?;
        if profiles.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_RISK_SCORES.to_string()));
        }

        let mut rows: Vec<RiskScoreRow> = profiles.iter().map(RiskScoreRow::from).collect();
        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
