//! Report job domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::tenants::TenantContext;

/// Errors specific to report job handling.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Internal report not found: {0}")]
    NotFound(String),

    /// The report is still being generated or its generation failed, so
    /// there is no data to download.
    #[error("Can not download report {0}")]
    NotDownloadable(String),

    #[error("Report {0} has broken data")]
    BrokenData(String),

    #[error("No generator registered for report type {0}")]
    UnregisteredType(String),

    /// The job carries parameters of a different report type than the
    /// generator expects. Indicates a wiring bug, not bad user input.
    #[error("Report parameters do not match report type: {0}")]
    ParamsMismatch(String),
}

/// The eight fixed report kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    ActiveUsers,
    RiskScores,
    QuarterValidation,
    Goals,
    RecurrentOrders,
    Orders,
    Balances,
    Assets,
}

impl ReportType {
    /// Stable numeric code persisted by repositories and exposed to clients.
    pub fn code(&self) -> u8 {
        match self {
            ReportType::ActiveUsers => 0,
            ReportType::RiskScores => 1,
            ReportType::QuarterValidation => 2,
            ReportType::Goals => 3,
            ReportType::RecurrentOrders => 4,
            ReportType::Orders => 5,
            ReportType::Balances => 6,
            ReportType::Assets => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<ReportType> {
        match code {
            0 => Some(ReportType::ActiveUsers),
            1 => Some(ReportType::RiskScores),
            2 => Some(ReportType::QuarterValidation),
            3 => Some(ReportType::Goals),
            4 => Some(ReportType::RecurrentOrders),
            5 => Some(ReportType::Orders),
            6 => Some(ReportType::Balances),
            7 => Some(ReportType::Assets),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportType::ActiveUsers => "Active users",
            ReportType::RiskScores => "User risk scores",
            ReportType::QuarterValidation => "Quarter validation",
            ReportType::Goals => "Goals",
            ReportType::RecurrentOrders => "Recurrent orders",
            ReportType::Orders => "Orders",
            ReportType::Balances => "Balances",
            ReportType::Assets => "Assets",
        }
    }

    pub fn all() -> [ReportType; 8] {
        [
            ReportType::ActiveUsers,
            ReportType::RiskScores,
            ReportType::QuarterValidation,
            ReportType::Goals,
            ReportType::RecurrentOrders,
            ReportType::Orders,
            ReportType::Balances,
            ReportType::Assets,
        ]
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a report job. Generating is the initial state; Ready
/// and Failed are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Generating,
    Ready,
    Failed,
}

impl ReportStatus {
    pub fn code(&self) -> u8 {
        match self {
            ReportStatus::Generating => 0,
            ReportStatus::Ready => 1,
            ReportStatus::Failed => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<ReportStatus> {
        match code {
            0 => Some(ReportStatus::Generating),
            1 => Some(ReportStatus::Ready),
            2 => Some(ReportStatus::Failed),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportStatus::Generating => "Generating",
            ReportStatus::Ready => "Ready",
            ReportStatus::Failed => "Failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReportStatus::Generating)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input parameters of a report request. One variant per report type, so a
/// job's type and parameters can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "reportType", rename_all = "camelCase")]
#[serde(rename_all_fields = "camelCase")]
pub enum ReportParams {
    ActiveUsers {
        start_date: NaiveDate,
        end_date: NaiveDate,
        /// Minimum number of consecutive qualifying days.
        consecutive_days: usize,
        /// Portfolio value a day must reach to qualify.
        amount_to_validate: Decimal,
    },
    RiskScores {
        lower_risk_score: Option<i32>,
        upper_risk_score: Option<i32>,
    },
    QuarterValidation {
        end_date: NaiveDate,
    },
    Goals {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    },
    RecurrentOrders {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        direct_debit: Option<bool>,
        period_finished: Option<bool>,
    },
    Orders {
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    },
    Balances,
    Assets,
}

impl ReportParams {
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportParams::ActiveUsers { .. } => ReportType::ActiveUsers,
            ReportParams::RiskScores { .. } => ReportType::RiskScores,
            ReportParams::QuarterValidation { .. } => ReportType::QuarterValidation,
            ReportParams::Goals { .. } => ReportType::Goals,
            ReportParams::RecurrentOrders { .. } => ReportType::RecurrentOrders,
            ReportParams::Orders { .. } => ReportType::Orders,
            ReportParams::Balances => ReportType::Balances,
            ReportParams::Assets => ReportType::Assets,
        }
    }
}

/// One report generation request and its persisted result.
///
/// Created in Generating state by the triggering side, mutated exactly once
/// by the generator that processes it, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportJob {
    pub id: String,
    pub tenant_id: String,
    pub report_type: ReportType,
    pub status: ReportStatus,
    pub requested_at: DateTime<Utc>,
    pub generated_at: Option<DateTime<Utc>>,
    pub params: ReportParams,
    /// Serialized result rows on success, human-readable diagnostic on
    /// failure. Unset while generating.
    pub payload: Option<String>,
}

impl ReportJob {
    pub fn new(tenant_id: impl Into<String>, params: ReportParams) -> Self {
        ReportJob {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.into(),
            report_type: params.report_type(),
            status: ReportStatus::Generating,
            requested_at: Utc::now(),
            generated_at: None,
            params,
            payload: None,
        }
    }
}

/// Filter for the report listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportListFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub report_type: Option<ReportType>,
    pub status: Option<ReportStatus>,
}

/// Catalog entry of the report type listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportTypeInfo {
    pub code: u8,
    pub name: String,
}

/// Catalog entry of the report status listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatusInfo {
    pub code: u8,
    pub name: String,
}

/// Immutable input handed to a generator: the owning tenant plus the job's
/// typed parameters. Generators never see or mutate the job record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub tenant: TenantContext,
    pub params: ReportParams,
}

/// Result of a generator run, applied to the job by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Data was produced; the job transitions to Ready.
    Ready(serde_json::Value),
    /// The run finished but there is nothing to show; the job transitions to
    /// Failed with this type-specific message as payload.
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        for report_type in ReportType::all() {
            assert_eq!(ReportType::from_code(report_type.code()), Some(report_type));
        }
        assert_eq!(ReportType::from_code(8), None);
    }

    #[test]
    fn params_and_type_cannot_drift() {
        let params = ReportParams::QuarterValidation {
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        let job = ReportJob::new("t1", params);
        assert_eq!(job.report_type, ReportType::QuarterValidation);
        assert_eq!(job.status, ReportStatus::Generating);
        assert!(job.payload.is_none());
        assert!(job.generated_at.is_none());
    }

    #[test]
    fn status_terminality() {
        assert!(!ReportStatus::Generating.is_terminal());
        assert!(ReportStatus::Ready.is_terminal());
        assert!(ReportStatus::Failed.is_terminal());
    }
}
