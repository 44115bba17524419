//! Orders report: every order whose value date falls in the requested
//! period.

use std::sync::Arc;

use crate::constants::MSG_NO_ORDERS;
use crate::errors::Result;
use crate::orders::{OrderRow, OrderStoreTrait};
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};
use crate::utils::time_utils::DateRange;

pub struct OrdersGenerator {
    orders: Arc<dyn OrderStoreTrait>,
}

impl OrdersGenerator {
    pub fn new(orders: Arc<dyn OrderStoreTrait>) -> Self {
        OrdersGenerator { orders }
    }
}

impl ReportGenerator for OrdersGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::Orders {
            start_date,
            end_date,
        } = &request.params
        else {
            return Err(ReportError::ParamsMismatch(ReportType::Orders.to_string()).into());
        };

        let value_date = DateRange::new(*start_date, *end_date)?;
        let orders = self.orders.orders(&request.tenant.id, &value_date)?;
        if orders.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_ORDERS.to_string()));
        }

        let mut rows: Vec<OrderRow> = orders.iter().map(OrderRow::from).collect();
        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
