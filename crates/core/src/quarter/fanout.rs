//! Bounded per-user fan-out for the quarter reconciliation.

use std::sync::Mutex;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::errors::{Error, Result};
use crate::quarter::{QuarterError, QuarterErrorRow, QuarterReportRow, QuarterValidationRow};
use crate::users::UserRef;

/// Runs `per_user` for every user on a fixed-size worker pool and collects
/// the produced rows.
///
/// Per-user failures are isolated: a `NoData` outcome is logged and skipped,
/// any other error becomes a `{user_id, error}` row. Nothing escapes the
/// fan-out boundary and a single user can never abort the run. Append order
/// follows completion order, so callers needing determinism must sort.
pub fn run_reconciliation<F>(
    users: &[UserRef],
    concurrency: usize,
    per_user: F,
) -> Result<Vec<QuarterReportRow>>
where
    F: Fn(&UserRef) -> std::result::Result<Option<QuarterValidationRow>, QuarterError>
        + Send
        + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency.max(1))
        .build()
        .map_err(|e| Error::Unexpected(format!("failed to build worker pool: {e}")))?;

    let rows: Mutex<Vec<QuarterReportRow>> = Mutex::new(Vec::new());

    pool.install(|| {
        users.par_iter().for_each(|user| {
            debug!("User {} check started", user.id);
            match per_user(user) {
                Ok(Some(row)) => {
                    rows.lock().unwrap().push(QuarterReportRow::Invalid(row));
                    debug!("User {} check finished", user.id);
                }
                Ok(None) => {
                    debug!("User {} check finished", user.id);
                }
                Err(QuarterError::NoData(_)) => {
                    info!("User {} check failed (No data to check)", user.id);
                }
                Err(e) => {
                    warn!("User {} check failed: {}", user.id, e);
                    rows.lock().unwrap().push(QuarterReportRow::Error(QuarterErrorRow {
                        user_id: user.id.clone(),
                        error: e.to_string(),
                    }));
                }
            }
        });
    });

    Ok(rows.into_inner().unwrap())
}
