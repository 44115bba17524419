//! Balances report: current total value of every asset container.

use std::sync::Arc;

use crate::balances::{AccountBalance, BalanceStoreTrait};
use crate::constants::MSG_NO_BALANCES;
use crate::errors::Result;
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};

pub struct BalancesGenerator {
    balances: Arc<dyn BalanceStoreTrait>,
}

impl BalancesGenerator {
    pub fn new(balances: Arc<dyn BalanceStoreTrait>) -> Self {
        BalancesGenerator { balances }
    }
}

impl ReportGenerator for BalancesGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::Balances = &request.params else {
            return Err(ReportError::ParamsMismatch(ReportType::Balances.to_string()).into());
        };

        let mut rows: Vec<AccountBalance> = self.balances.balances(&request.tenant.id)?;
        if rows.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_BALANCES.to_string()));
        }

        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
