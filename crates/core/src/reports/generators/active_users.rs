//! Active-users report: users whose portfolio value stayed at or above a
//! threshold for a minimum number of consecutive days in the period.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MSG_NO_ACTIVE_USERS;
use crate::errors::Result;
use crate::reports::{ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType};
use crate::users::{UserDirectoryTrait, UserRef};
use crate::utils::time_utils::format_date_short;
use crate::valuation::{
    average_portfolio_value, daily_portfolio_value, detect_consecutive_run, DailyValue,
    PortfolioHistory, ValuationError, ValuationHistoryTrait,
};

/// Row for one qualifying user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUserRow {
    pub user_id: String,
    /// First day of the qualifying run.
    pub position_start_date: String,
    pub position_start_value: Decimal,
    /// Average daily value over the whole period, not just the run.
    pub position_average_value: Decimal,
    /// Last day with recorded history in the period.
    pub position_end_date: String,
    pub position_end_value: Decimal,
    pub consecutive_days: usize,
    pub average_value_of_consecutive_days: Decimal,
    /// First day with recorded history in the period.
    pub first_date_reported: String,
    pub position_first_date_reported: Decimal,
}

/// Row for a user whose data could not be processed. Per-record isolation:
/// one broken user never fails the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUserErrorRow {
    pub user_id: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActiveUsersReportRow {
    Qualified(ActiveUserRow),
    Error(ActiveUserErrorRow),
}

impl ActiveUsersReportRow {
    pub fn user_id(&self) -> &str {
        match self {
            ActiveUsersReportRow::Qualified(row) => &row.user_id,
            ActiveUsersReportRow::Error(row) => &row.user_id,
        }
    }
}

pub struct ActiveUsersGenerator {
    users: Arc<dyn UserDirectoryTrait>,
    valuations: Arc<dyn ValuationHistoryTrait>,
}

impl ActiveUsersGenerator {
    pub fn new(
        users: Arc<dyn UserDirectoryTrait>,
        valuations: Arc<dyn ValuationHistoryTrait>,
    ) -> Self {
        ActiveUsersGenerator { users, valuations }
    }

    /// Returns `Ok(None)` for a user whose longest admissible run falls
    /// short of the requested length.
    fn user_row(
        &self,
        user: &UserRef,
        history: &PortfolioHistory,
        consecutive_days: usize,
        amount_to_validate: Decimal,
    ) -> std::result::Result<Option<ActiveUserRow>, ValuationError> {
        let mut series = Vec::with_capacity(history.len());
        for (date, components) in history {
            series.push(DailyValue {
                date: *date,
                value: daily_portfolio_value(components)?,
            });
        }

        let run = detect_consecutive_run(&series, consecutive_days, amount_to_validate);
        if run.is_empty() {
            return Ok(None);
        }

        // Non-empty run implies non-empty history.
        let (first_date, first_components) = history
            .first_key_value()
            .ok_or_else(|| ValuationError::NoHistory(user.id.clone()))?;
        let (last_date, last_components) = history
            .last_key_value()
            .ok_or_else(|| ValuationError::NoHistory(user.id.clone()))?;
        let run_start = &run.days[0];

        Ok(Some(ActiveUserRow {
            user_id: user.id.clone(),
            position_start_date: format_date_short(run_start.date),
            position_start_value: run_start.value,
            position_average_value: crate::valuation::round2(average_portfolio_value(history)?),
            position_end_date: format_date_short(*last_date),
            position_end_value: daily_portfolio_value(last_components)?,
            consecutive_days: run.len(),
            average_value_of_consecutive_days: crate::valuation::round2(run.average_value),
            first_date_reported: format_date_short(*first_date),
            position_first_date_reported: daily_portfolio_value(first_components)?,
        }))
    }
}

impl ReportGenerator for ActiveUsersGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::ActiveUsers {
            start_date,
            end_date,
            consecutive_days,
            amount_to_validate,
        } = &request.params
        else {
            return Err(ReportError::ParamsMismatch(ReportType::ActiveUsers.to_string()).into());
        };

        let users = self.users.users_with_investments(&request.tenant)?;
        debug!(
            "Active-users report over {} users for tenant {}",
            users.len(),
            request.tenant.id
        );

        let mut rows: Vec<ActiveUsersReportRow> = Vec::new();
        for user in &users {
            let result = self
                .valuations
                .get_history(user, Some(*start_date), Some(*end_date))
                .and_then(|history| {
                    self.user_row(user, &history, *consecutive_days, *amount_to_validate)
                });
            match result {
                Ok(Some(row)) => rows.push(ActiveUsersReportRow::Qualified(row)),
                Ok(None) => {}
                Err(e) => rows.push(ActiveUsersReportRow::Error(ActiveUserErrorRow {
                    user_id: user.id.clone(),
                    error: e.to_string(),
                })),
            }
        }

        if rows.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_ACTIVE_USERS.to_string()));
        }

        rows.sort_by(|a, b| a.user_id().cmp(b.user_id()));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::tenants::TenantContext;
    use crate::valuation::PortfolioComponent;

    struct StaticUsers(Vec<UserRef>);

    impl UserDirectoryTrait for StaticUsers {
        fn users_with_investments(&self, _tenant: &TenantContext) -> Result<Vec<UserRef>> {
            Ok(self.0.clone())
        }

        fn users_with_history(&self, _tenant: &TenantContext) -> Result<Vec<UserRef>> {
            Ok(self.0.clone())
        }
    }

    struct StaticValuations {
        histories: BTreeMap<String, PortfolioHistory>,
    }

    impl ValuationHistoryTrait for StaticValuations {
        fn get_history(
            &self,
            user: &UserRef,
            _start_date: Option<NaiveDate>,
            _end_date: Option<NaiveDate>,
        ) -> std::result::Result<PortfolioHistory, ValuationError> {
            self.histories
                .get(&user.id)
                .cloned()
                .ok_or_else(|| ValuationError::NoHistory(user.id.clone()))
        }
    }

    fn tenant() -> TenantContext {
        TenantContext {
            id: "t1".to_string(),
            name: "Tenant One".to_string(),
            reconcile_concurrency: 2,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn history_of(values: &[Decimal]) -> PortfolioHistory {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                (
                    date(i as u32 + 1),
                    vec![PortfolioComponent {
                        asset_id: "ISIN-1".to_string(),
                        quantity: Some(dec!(1)),
                        unit_price_eur: Some(*value),
                    }],
                )
            })
            .collect()
    }

    fn request() -> ReportRequest {
        ReportRequest {
            tenant: tenant(),
            params: ReportParams::ActiveUsers {
                start_date: date(1),
                end_date: date(31),
                consecutive_days: 2,
                amount_to_validate: dec!(50),
            },
        }
    }

    fn generator(users: Vec<UserRef>, histories: BTreeMap<String, PortfolioHistory>) -> ActiveUsersGenerator {
        ActiveUsersGenerator::new(
            Arc::new(StaticUsers(users)),
            Arc::new(StaticValuations { histories }),
        )
    }

    fn rows_of(outcome: ReportOutcome) -> Vec<ActiveUsersReportRow> {
        match outcome {
            ReportOutcome::Ready(value) => serde_json::from_value(value).unwrap(),
            ReportOutcome::Empty(message) => panic!("unexpected empty outcome: {message}"),
        }
    }

    #[test]
    fn qualifying_user_gets_a_full_row() {
        let user = UserRef::new("u1", "t1");
        let mut histories = BTreeMap::new();
        histories.insert(
            "u1".to_string(),
            history_of(&[dec!(40), dec!(60), dec!(70), dec!(30)]),
        );
        let outcome = generator(vec![user], histories).execute(&request()).unwrap();
        let rows = rows_of(outcome);
        assert_eq!(rows.len(), 1);
        let ActiveUsersReportRow::Qualified(row) = &rows[0] else {
            panic!("expected a qualified row");
        };
        assert_eq!(row.user_id, "u1");
        assert_eq!(row.consecutive_days, 2);
        assert_eq!(row.position_start_date, "2024-01-02");
        assert_eq!(row.position_start_value, dec!(60));
        assert_eq!(row.average_value_of_consecutive_days, dec!(65));
        assert_eq!(row.first_date_reported, "2024-01-01");
        assert_eq!(row.position_first_date_reported, dec!(40));
        assert_eq!(row.position_end_date, "2024-01-04");
        assert_eq!(row.position_end_value, dec!(30));
        assert_eq!(row.position_average_value, dec!(50));
    }

    #[test]
    fn user_without_a_long_enough_run_is_skipped() {
        let user = UserRef::new("u1", "t1");
        let mut histories = BTreeMap::new();
        histories.insert("u1".to_string(), history_of(&[dec!(60), dec!(30), dec!(60)]));
        let outcome = generator(vec![user], histories).execute(&request()).unwrap();
        assert_eq!(
            outcome,
            ReportOutcome::Empty(MSG_NO_ACTIVE_USERS.to_string())
        );
    }

    #[test]
    fn missing_history_becomes_an_error_row() {
        let users = vec![UserRef::new("u1", "t1"), UserRef::new("u2", "t1")];
        let mut histories = BTreeMap::new();
        histories.insert("u2".to_string(), history_of(&[dec!(60), dec!(60)]));
        let outcome = generator(users, histories).execute(&request()).unwrap();
        let rows = rows_of(outcome);
        assert_eq!(rows.len(), 2);
        let ActiveUsersReportRow::Error(error_row) = &rows[0] else {
            panic!("expected an error row first (sorted by user id)");
        };
        assert_eq!(error_row.user_id, "u1");
        assert!(error_row.error.contains("No portfolio history"));
        assert!(matches!(&rows[1], ActiveUsersReportRow::Qualified(r) if r.user_id == "u2"));
    }

    #[test]
    fn broken_component_isolates_the_user() {
        let users = vec![UserRef::new("u1", "t1")];
        let mut broken = history_of(&[dec!(60), dec!(60)]);
        broken.get_mut(&date(1)).unwrap()[0].quantity = None;
        let mut histories = BTreeMap::new();
        histories.insert("u1".to_string(), broken);
        let outcome = generator(users, histories).execute(&request()).unwrap();
        let rows = rows_of(outcome);
        assert!(matches!(&rows[0], ActiveUsersReportRow::Error(r) if r.user_id == "u1"));
    }

    #[test]
    fn no_eligible_users_yields_empty_outcome() {
        let outcome = generator(Vec::new(), BTreeMap::new())
            .execute(&request())
            .unwrap();
        assert_eq!(
            outcome,
            ReportOutcome::Empty(MSG_NO_ACTIVE_USERS.to_string())
        );
    }

    #[test]
    fn mismatched_params_are_rejected() {
        let generator = generator(Vec::new(), BTreeMap::new());
        let request = ReportRequest {
            tenant: tenant(),
            params: ReportParams::Assets,
        };
        assert!(generator.execute(&request).is_err());
    }
}
