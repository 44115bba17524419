//! Assets report: every held asset with its latest valuation.

use std::sync::Arc;

use crate::assets::{Asset, AssetStoreTrait};
use crate::constants::MSG_NO_ASSETS;
use crate::errors::Result;
use crate::reports::{
    ReportError, ReportGenerator, ReportOutcome, ReportParams, ReportRequest, ReportType,
};

pub struct AssetsGenerator {
    assets: Arc<dyn AssetStoreTrait>,
}

impl AssetsGenerator {
    pub fn new(assets: Arc<dyn AssetStoreTrait>) -> Self {
        AssetsGenerator { assets }
    }
}

impl ReportGenerator for AssetsGenerator {
    fn execute(&self, request: &ReportRequest) -> Result<ReportOutcome> {
        let ReportParams::Assets = &request.params else {
            return Err(ReportError::ParamsMismatch(ReportType::Assets.to_string()).into());
        };

        let mut rows: Vec<Asset> = self.assets.assets(&request.tenant.id)?;
        if rows.is_empty() {
            return Ok(ReportOutcome::Empty(MSG_NO_ASSETS.to_string()));
        }

        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(ReportOutcome::Ready(serde_json::to_value(rows)?))
    }
}
