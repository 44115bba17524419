use crate::assets::Asset;
use crate::errors::Result;

/// Trait for the asset store.
pub trait AssetStoreTrait: Send + Sync {
    fn assets(&self, tenant_id: &str) -> Result<Vec<Asset>>;
}
