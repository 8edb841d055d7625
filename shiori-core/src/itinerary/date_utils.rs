use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// How the number of trip days is derived from the departure and return dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DayCountMode {
    /// Inclusive calendar-day span. Correct across month and year boundaries.
    #[default]
    Calendar,
    /// Day-of-month subtraction only. Wrong whenever the trip crosses a month
    /// boundary; selectable for schedules that depend on the old count.
    DayOfMonth,
}

impl DayCountMode {
    pub fn count(self, departure: NaiveDate, return_date: NaiveDate) -> i64 {
        match self {
            DayCountMode::Calendar => term_day_count(departure, return_date),
            DayCountMode::DayOfMonth => day_of_month_count(departure, return_date),
        }
    }
}

/// Number of days in the trip, both ends included.
///
/// Returns zero or a negative number when `return_date` is before `departure`.
pub fn term_day_count(departure: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - departure).num_days() + 1
}

/// `return.day - departure.day + 1`, ignoring month and year.
pub fn day_of_month_count(departure: NaiveDate, return_date: NaiveDate) -> i64 {
    i64::from(return_date.day()) - i64::from(departure.day()) + 1
}

/// Calendar date of the 1-based trip day `day`. `None` for day 0 or below, and
/// for days past the last representable date.
pub fn date_of_day(departure: NaiveDate, day: i64) -> Option<NaiveDate> {
    if day < 1 {
        return None;
    }
    Duration::try_days(day - 1).and_then(|offset| departure.checked_add_signed(offset))
}

/// Parses a document date.
///
/// Accepts an RFC 3339 timestamp or a naive `YYYY-MM-DDTHH:MM:SS` (the date part
/// is kept), then each of `formats` in order.
pub fn parse_document_date(input: &str, formats: &[&str]) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}
