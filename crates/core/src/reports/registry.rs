//! Enum-keyed registry mapping report types to their generators.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::reports::{ReportError, ReportGenerator, ReportType};

/// Built once at startup; lookup never involves runtime reflection.
#[derive(Default)]
pub struct ReportRegistry {
    generators: HashMap<ReportType, Arc<dyn ReportGenerator>>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        ReportRegistry {
            generators: HashMap::new(),
        }
    }

    pub fn register(
        mut self,
        report_type: ReportType,
        generator: Arc<dyn ReportGenerator>,
    ) -> Self {
        self.generators.insert(report_type, generator);
        self
    }

    pub fn get(&self, report_type: ReportType) -> Result<Arc<dyn ReportGenerator>> {
        self.generators
            .get(&report_type)
            .cloned()
            .ok_or_else(|| ReportError::UnregisteredType(report_type.to_string()).into())
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
