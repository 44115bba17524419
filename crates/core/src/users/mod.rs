//! Users module - user references and the tenant user directory.

mod users_model;
mod users_traits;

pub use users_model::UserRef;
pub use users_traits::UserDirectoryTrait;
