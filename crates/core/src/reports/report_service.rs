//! Report job lifecycle service.
//!
//! Owns the Generating -> Ready | Failed transition: generators only compute
//! an outcome, the service applies it to the job record exactly once and
//! persists it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::{debug, error, warn};

use crate::constants::STALE_REPORT_HOURS;
use crate::errors::{Error, Result};
use crate::reports::{
    ReportError, ReportJob, ReportListFilter, ReportOutcome, ReportParams, ReportRegistry,
    ReportRequest, ReportServiceTrait, ReportStatus, ReportStatusInfo, ReportType,
    ReportTypeInfo,
};
use crate::reports::report_traits::{ReportGenerator, ReportJobRepositoryTrait};
use crate::tenants::{TenantConfigTrait, TenantContext};

pub struct ReportService {
    repository: Arc<dyn ReportJobRepositoryTrait>,
    tenants: Arc<dyn TenantConfigTrait>,
    registry: Arc<ReportRegistry>,
}

impl ReportService {
    pub fn new(
        repository: Arc<dyn ReportJobRepositoryTrait>,
        tenants: Arc<dyn TenantConfigTrait>,
        registry: Arc<ReportRegistry>,
    ) -> Self {
        ReportService {
            repository,
            tenants,
            registry,
        }
    }

    /// Triggers a report and runs its generation on a detached task
    /// (fire-and-forget). Returns the job in Generating state immediately.
    pub async fn start_report(
        self: &Arc<Self>,
        tenant: &TenantContext,
        params: ReportParams,
    ) -> Result<ReportJob> {
        let job = self.trigger_report(tenant, params).await?;
        self.spawn_generation(job.id.clone());
        Ok(job)
    }

    /// Runs [`ReportServiceTrait::generate_report`] on a background task.
    /// A failure to even persist the terminal state leaves the job in
    /// Generating; the staleness sweep in the listing path picks it up.
    pub fn spawn_generation(self: &Arc<Self>, job_id: String) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = service.generate_report(&job_id).await {
                error!("Report generation for job {} failed: {}", job_id, e);
            }
        });
    }

    /// Catalog of the available report types.
    pub fn report_types() -> Vec<ReportTypeInfo> {
        ReportType::all()
            .iter()
            .map(|t| ReportTypeInfo {
                code: t.code(),
                name: t.name().to_string(),
            })
            .collect()
    }

    /// Catalog of the job statuses.
    pub fn report_statuses() -> Vec<ReportStatusInfo> {
        [
            ReportStatus::Generating,
            ReportStatus::Ready,
            ReportStatus::Failed,
        ]
        .iter()
        .map(|s| ReportStatusInfo {
            code: s.code(),
            name: s.name().to_string(),
        })
        .collect()
    }

    fn apply_outcome(job: &mut ReportJob, outcome: Result<ReportOutcome>) -> Result<()> {
        match outcome {
            Ok(ReportOutcome::Ready(value)) => {
                job.status = ReportStatus::Ready;
                job.payload = Some(serde_json::to_string_pretty(&value)?);
            }
            Ok(ReportOutcome::Empty(message)) => {
                job.status = ReportStatus::Failed;
                job.payload = Some(message);
            }
            Err(e) => {
                // Catch-all: an unexpected generator error must not leave the
                // job stuck in Generating.
                warn!("Report job {} failed: {}", job.id, e);
                job.status = ReportStatus::Failed;
                job.payload = Some(e.to_string());
            }
        }
        job.generated_at = Some(Utc::now());
        Ok(())
    }

    fn prepare_request(&self, job: &ReportJob) -> Result<(Arc<dyn ReportGenerator>, ReportRequest)> {
        let tenant = self.tenants.get_tenant(&job.tenant_id)?;
        let generator = self.registry.get(job.report_type)?;
        let request = ReportRequest {
            tenant,
            params: job.params.clone(),
        };
        Ok((generator, request))
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn trigger_report(
        &self,
        tenant: &TenantContext,
        params: ReportParams,
    ) -> Result<ReportJob> {
        let job = ReportJob::new(tenant.id.clone(), params);
        debug!(
            "Triggering {} report {} for tenant {}",
            job.report_type, job.id, tenant.id
        );
        self.repository.insert_report_job(&job).await
    }

    async fn generate_report(&self, job_id: &str) -> Result<ReportJob> {
        let mut job = self.repository.get_report_job(job_id)?;

        // Everything past loading the job feeds the catch-all: a tenant
        // lookup failure or an unregistered type must land the job in
        // Failed, not leave it Generating.
        let outcome = match self.prepare_request(&job) {
            Ok((generator, request)) => {
                // Generators are blocking collection processing (and the
                // quarter one runs its own worker pool), so they get a
                // blocking thread.
                match tokio::task::spawn_blocking(move || generator.execute(&request)).await {
                    Ok(result) => result,
                    Err(join_error) => Err(Error::Unexpected(format!(
                        "report generator panicked: {join_error}"
                    ))),
                }
            }
            Err(e) => Err(e),
        };

        Self::apply_outcome(&mut job, outcome)?;
        self.repository.update_report_job(&job).await
    }

    async fn list_reports(
        &self,
        tenant_id: &str,
        filter: &ReportListFilter,
    ) -> Result<Vec<ReportJob>> {
        let mut jobs = self.repository.list_report_jobs(tenant_id, filter)?;

        // Lazy staleness sweep: a worker crash leaves a job in Generating
        // forever; the listing path reclassifies it after the window.
        let cutoff = Utc::now() - Duration::hours(STALE_REPORT_HOURS);
        for job in jobs.iter_mut() {
            if job.status == ReportStatus::Generating && job.requested_at < cutoff {
                warn!("Reclassifying stale report job {} to Failed", job.id);
                job.status = ReportStatus::Failed;
                self.repository.update_report_job(job).await?;
            }
        }

        Ok(jobs)
    }

    fn get_report(&self, job_id: &str) -> Result<ReportJob> {
        self.repository.get_report_job(job_id)
    }

    fn get_report_data(&self, job_id: &str) -> Result<serde_json::Value> {
        let job = self.repository.get_report_job(job_id)?;
        if job.status != ReportStatus::Ready {
            return Err(ReportError::NotDownloadable(job_id.to_string()).into());
        }
        let payload = job
            .payload
            .ok_or_else(|| ReportError::BrokenData(job_id.to_string()))?;
        serde_json::from_str(&payload)
            .map_err(|_| ReportError::BrokenData(job_id.to_string()).into())
    }
}
