//! Recurrent-orders report: standing orders created in the requested period,
//! optionally filtered by direct-debit and period-finished flags.

use std::sync::Arc;

use crate::constants::MSG_NO_RECURRENT_ORDERS;
use crate::errors::Result;
use crate::orders::{RecurrentOrderRow, RecurrentOrderStoreTrait};
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};
use crate::utils::time_utils::DateRange;

pub struct RecurrentOrdersGenerator {
    recurrent_orders: Arc<dyn RecurrentOrderStoreTrait>,
}

impl RecurrentOrdersGenerator {
    pub fn new(recurrent_orders: Arc<dyn RecurrentOrderStoreTrait>) -> Self {
        RecurrentOrdersGenerator { recurrent_orders }
    }
}

impl ReportGenerator for RecurrentOrdersGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::RecurrentOrders {
            start_date,
            end_date,
            direct_debit,
            period_finished,
        } = &request.params
        else {
            return Err(
                ReportError::ParamsMismatch(ReportType::RecurrentOrders.to_string()).into(),
            );
        };

        let created = DateRange::new(*start_date, *end_date)?;
        let orders = self.recurrent_orders.recurrent_orders(
            &request.tenant.id,
            &created,
            *direct_debit,
            *period_finished,
        )?;
        if orders.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_RECURRENT_ORDERS.to_string()));
        }

        let mut rows: Vec<RecurrentOrderRow> =
            orders.iter().map(RecurrentOrderRow::from).collect();
        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
