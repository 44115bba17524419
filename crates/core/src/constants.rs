//! Shared constants for the report engine.

/// Asset identifier of the designated cash-equivalent component, used as the
/// reconciliation anchor in the quarter validation report.
pub const DEFAULT_CASH_COMPONENT_ID: &str = "CASH_EUR";

/// A job still generating after this many hours is considered stuck and is
/// lazily reclassified to Failed by the listing path.
pub const STALE_REPORT_HOURS: i64 = 24;

// Messages persisted as the payload of reports that finished without data.
pub const MSG_NO_ACTIVE_USERS: &str = "There were no active users in the period";
pub const MSG_NO_RISK_SCORES: &str = "There is no users with risk score in these limits";
pub const MSG_ALL_QUARTER_DATA_VALID: &str = "All users have valid data for requested quarter";
pub const MSG_NO_GOALS: &str = "No users with goals";
pub const MSG_NO_RECURRENT_ORDERS: &str = "No users with recurrent orders";
pub const MSG_NO_ORDERS: &str = "No users with orders";
pub const MSG_NO_BALANCES: &str = "No users with balances";
pub const MSG_NO_ASSETS: &str = "No assets";
