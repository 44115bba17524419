//! Date helpers shared by the reporters: canonical formats, fiscal quarter
//! resolution, and the optional date-range filter used by the list reports.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::errors::{Result, ValidationError};

/// Canonical short date format used in report rows and input parameters.
pub const DATE_FORMAT_SHORT: &str = "%Y-%m-%d";

/// Canonical timestamp format used for record creation/modification times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_date_short(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_SHORT).to_string()
}

pub fn format_date_long(instant: DateTime<Utc>) -> String {
    instant.format(DATETIME_FORMAT).to_string()
}

pub fn parse_date_short(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input, DATE_FORMAT_SHORT)?)
}

/// Resolves any date to the [start, end] of its enclosing fiscal quarter.
pub fn quarter_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let quarter = (date.month0()) / 3;
    let start_month = quarter * 3 + 1;
    let year = date.year();

    // Month values are derived from a valid date, so construction cannot fail.
    let start = NaiveDate::from_ymd_opt(year, start_month, 1).unwrap();
    let next_quarter_start = if start_month == 10 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, start_month + 3, 1).unwrap()
    };
    let end = next_quarter_start.pred_opt().unwrap();

    (start, end)
}

/// Optional period boundaries used to filter list reports by record date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range, rejecting boundaries in the wrong order.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ValidationError::InvalidDateRange(format!(
                    "start {} is after end {}",
                    s, e
                ))
                .into());
            }
        }
        Ok(DateRange { start, end })
    }

    pub fn unbounded() -> Self {
        DateRange::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn quarter_bounds_resolves_enclosing_period() {
        assert_eq!(quarter_bounds(d(2024, 2, 15)), (d(2024, 1, 1), d(2024, 3, 31)));
        assert_eq!(quarter_bounds(d(2024, 4, 1)), (d(2024, 4, 1), d(2024, 6, 30)));
        assert_eq!(quarter_bounds(d(2024, 9, 30)), (d(2024, 7, 1), d(2024, 9, 30)));
        assert_eq!(quarter_bounds(d(2024, 12, 31)), (d(2024, 10, 1), d(2024, 12, 31)));
    }

    #[test]
    fn quarter_bounds_handles_leap_february() {
        assert_eq!(quarter_bounds(d(2024, 1, 1)).1, d(2024, 3, 31));
        assert_eq!(quarter_bounds(d(2023, 2, 28)), (d(2023, 1, 1), d(2023, 3, 31)));
    }

    #[test]
    fn date_range_rejects_inverted_boundaries() {
        assert!(DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 4, 1))).is_err());
        assert!(DateRange::new(Some(d(2024, 4, 1)), Some(d(2024, 4, 1))).is_ok());
    }

    #[test]
    fn date_range_contains_respects_open_boundaries() {
        let range = DateRange::new(Some(d(2024, 1, 1)), None).unwrap();
        assert!(range.contains(d(2024, 6, 1)));
        assert!(!range.contains(d(2023, 12, 31)));

        let unbounded = DateRange::unbounded();
        assert!(unbounded.contains(d(1999, 1, 1)));
    }

    #[test]
    fn parses_and_formats_short_dates() {
        let date = parse_date_short("2024-03-07").unwrap();
        assert_eq!(date, d(2024, 3, 7));
        assert_eq!(format_date_short(date), "2024-03-07");
        assert!(parse_date_short("07.03.2024").is_err());
    }
}
