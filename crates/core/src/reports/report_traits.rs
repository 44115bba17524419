use async_trait::async_trait;

use crate::errors::Result;
use crate::reports::{
    ReportJob, ReportListFilter, ReportOutcome, ReportParams, ReportRequest,
};
use crate::tenants::TenantContext;

/// Trait for report job repository operations.
#[async_trait]
pub trait ReportJobRepositoryTrait: Send + Sync {
    fn get_report_job(&self, job_id: &str) -> Result<ReportJob>;
    fn list_report_jobs(
        &self,
        tenant_id: &str,
        filter: &ReportListFilter,
    ) -> Result<Vec<ReportJob>>;
    async fn insert_report_job(&self, job: &ReportJob) -> Result<ReportJob>;
    async fn update_report_job(&self, job: &ReportJob) -> Result<ReportJob>;
}

/// A single report computation strategy.
///
/// Implementations are pure with respect to the job record: they receive an
/// immutable request and return an outcome; the service owns the state
/// transition and persistence.
pub trait ReportGenerator: Send + Sync {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome>;
}

/// Trait for report service operations.
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    /// Creates a job in Generating state. The caller hands the returned
    /// job's id to [`ReportServiceTrait::generate_report`], usually on a
    /// spawned task.
    async fn trigger_report(
        &self,
        tenant: &TenantContext,
        params: ReportParams,
    ) -> Result<ReportJob>;

    /// Loads the job, runs the matching generator, and persists the terminal
    /// transition (Ready with payload, or Failed with a diagnostic).
    async fn generate_report(&self, job_id: &str) -> Result<ReportJob>;

    /// Lists a tenant's jobs, lazily reclassifying jobs stuck in Generating
    /// past the staleness window to Failed.
    async fn list_reports(
        &self,
        tenant_id: &str,
        filter: &ReportListFilter,
    ) -> Result<Vec<ReportJob>>;

    /// Always succeeds for an existing job, whatever its status.
    fn get_report(&self, job_id: &str) -> Result<ReportJob>;

    /// Parsed payload of a Ready job; rejected while Generating or Failed.
    fn get_report_data(&self, job_id: &str) -> Result<serde_json::Value>;
}
