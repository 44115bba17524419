//! Detection of a qualifying run of consecutive days on which a user's
//! portfolio value clears a threshold.

use rust_decimal::Decimal;

use crate::valuation::{ConsecutiveRun, DailyValue};

/// Scans the series in chronological order for the first run of at least
/// `min_length` consecutive days with `value >= threshold`.
///
/// A day below the threshold resets the candidate run, unless the candidate
/// already reached `min_length` - in that case scanning stops immediately and
/// the candidate is returned as-is. The detector therefore reports the first
/// qualifying run, not the longest one; a longer run later in the series is
/// never considered. Downstream consumers rely on this short-circuit, so it
/// is kept even though it can look like an accidental early return.
///
/// Returns an empty run (average zero) when no candidate ever reaches
/// `min_length`.
pub fn detect_consecutive_run(
    series: &[DailyValue],
    min_length: usize,
    threshold: Decimal,
) -> ConsecutiveRun {
    let mut days: Vec<DailyValue> = Vec::new();
    let mut total = Decimal::ZERO;

    for day in series {
        if day.value >= threshold {
            total += day.value;
            days.push(day.clone());
        } else if days.len() >= min_length {
            break;
        } else {
            days.clear();
            total = Decimal::ZERO;
        }
    }

    if min_length == 0 || days.len() < min_length {
        return ConsecutiveRun::default();
    }

    let average_value = total / Decimal::from(days.len());
    ConsecutiveRun {
        days,
        average_value,
    }
}
