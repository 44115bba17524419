//! Reports module - job lifecycle state machine, generator registry, and the
//! per-type report generators.

pub mod generators;

mod registry;
mod report_model;
mod report_service;
mod report_traits;

pub use registry::ReportRegistry;
pub use report_model::{
    ReportError, ReportJob, ReportListFilter, ReportOutcome, ReportParams, ReportRequest,
    ReportStatus, ReportStatusInfo, ReportType, ReportTypeInfo,
};
pub use report_service::ReportService;
pub use report_traits::{ReportGenerator, ReportJobRepositoryTrait, ReportServiceTrait};
