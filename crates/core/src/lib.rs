//! Reportal Core - Tenant report generation engine.
//!
//! This crate contains the report job lifecycle state machine, the per-type
//! report generators, and the reconciliation/run-detection algorithms.
//! It is storage-agnostic and defines traits that are implemented by the
//! hosting application (repositories, data providers, tenant directory).

pub mod assets;
pub mod balances;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod orders;
pub mod quarter;
pub mod reports;
pub mod risk;
pub mod tenants;
pub mod users;
pub mod utils;
pub mod valuation;

// Re-export common types from the reports module
pub use reports::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
