//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::format_date_long;

/// A user's savings goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub goal_id: String,
    pub user_id: String,
    pub name: String,
    pub goal_type: String,
    pub value: Decimal,
    pub created: DateTime<Utc>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub frequency: Option<i32>,
}

/// Output row of the goals report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
    pub user_id: String,
    pub goal_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub goal_type: String,
    pub value: Decimal,
    pub created: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub frequency: Option<i32>,
}

impl From<&Goal> for GoalRow {
    fn from(goal: &Goal) -> Self {
        GoalRow {
            user_id: goal.user_id.clone(),
            goal_id: goal.goal_id.clone(),
            name: goal.name.clone(),
            goal_type: goal.goal_type.clone(),
            value: goal.value,
            created: format_date_long(goal.created),
            start_date: goal.start_date,
            end_date: goal.end_date,
            frequency: goal.frequency,
        }
    }
}
