//! Goals report: every goal created in the requested period.

use std::sync::Arc;

use crate::constants::MSG_NO_GOALS;
use crate::errors::Result;
use crate::goals::{GoalRow, GoalStoreTrait};
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};
use crate::utils::time_utils::DateRange;

pub struct GoalsGenerator {
    goals: Arc<dyn GoalStoreTrait>,
}

impl GoalsGenerator {
    pub fn new(goals: Arc<dyn GoalStoreTrait>) -> Self {
        GoalsGenerator { goals }
    }
}

impl ReportGenerator for GoalsGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::Goals {
            start_date,
            end_date,
        } = &request.params
        else {
            return Err(ReportError::ParamsMismatch(ReportType::Goals.to_string()).into());
        };

        let created = DateRange::new(*start_date, *end_date)?;
        let goals = self.goals.goals(&request.tenant.id, &created)?;
        if goals.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_GOALS.to_string()));
        }

        let mut rows: Vec<GoalRow> = goals.iter().map(GoalRow::from).collect();
        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
