//! Assets module - individual holdings consumed by the assets report.

mod assets_model;
mod assets_traits;

pub use assets_model::Asset;
pub use assets_traits::AssetStoreTrait;
