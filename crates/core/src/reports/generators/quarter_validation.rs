//! Quarter validation report: reconciles every user's quarterly summary
//! against the independently computed overview and reports the users whose
//! data does not add up.

use std::sync::Arc;

use log::debug;

use crate::constants::{DEFAULT_CASH_COMPONENT_ID, MSG_ALL_QUARTER_DATA_VALID};
use crate::errors::Result;
use crate::quarter::{run_reconciliation, QuarterDataTrait, UserQuarterValidator};
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};
use crate::users::UserDirectoryTrait;
use crate::utils::time_utils::quarter_bounds;

pub struct QuarterValidationGenerator {
    users: Arc<dyn UserDirectoryTrait>,
    quarter_data: Arc<dyn QuarterDataTrait>,
}

impl QuarterValidationGenerator {
    pub fn new(
        users: Arc<dyn UserDirectoryTrait>,
        quarter_data: Arc<dyn QuarterDataTrait>,
    ) -> Self {
        QuarterValidationGenerator {
            users,
            quarter_data,
        }
    }
}

impl ReportGenerator for QuarterValidationGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::QuarterValidation { end_date } = &request.params else {
            return Err(
                ReportError::ParamsMismatch(ReportType::QuarterValidation.to_string()).into(),
            );
        };

        // The validated period runs from the enclosing quarter's first day to
        // the requested end date, which may cut the quarter short.
        let (start_date, _) = quarter_bounds(*end_date);

        let users = self.users.users_with_history(&request.tenant)?;
        debug!(
            "Quarter validation over {} users for tenant {} ({} workers)",
            users.len(),
            request.tenant.id,
            request.tenant.reconcile_concurrency
        );

        let validator = UserQuarterValidator::new(
            self.quarter_data.as_ref(),
            &request.tenant,
            DEFAULT_CASH_COMPONENT_ID,
            start_date,
            *end_date,
        );

        let rows = run_reconciliation(
            &users,
            request.tenant.reconcile_concurrency,
            |user| validator.validate(user),
        )?;

        if rows.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_ALL_QUARTER_DATA_VALID.to_string()));
        }

        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
