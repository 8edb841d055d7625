//! The `Itinerary` and `DayActivity` types loaded from a schedule document.
use super::date_utils::{DayCountMode, date_of_day};
use super::parse_itinerary::parse_document;
use crate::error::ParseError;
use chrono::NaiveDate;
use serde::Deserialize;

/// One scheduled item within a day.
///
/// Optional fields keep the difference between a missing key (`None`) and an
/// empty string (`Some("")`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub content: String,
    pub start_time: String,
    pub finish_time: Option<String>,
    /// Amount without currency, e.g. `"1200"`.
    pub budget: Option<String>,
    pub note: Option<String>,
}

/// A whole trip: title, date range and the activities of each day.
///
/// `days[0]` holds day 1. The list may be shorter than the trip; missing days
/// have no activities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub title: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub days: Vec<Vec<DayActivity>>,
}

impl Itinerary {
    /// Parses a schedule document.
    ///
    /// # Arguments
    ///
    /// * `json` - the raw document text.
    /// * `formats` - chrono formats tried for `departure_date`/`return_date`
    ///   after the RFC 3339 forms.
    pub fn from_json(json: &str, formats: &[&str]) -> Result<Self, ParseError> {
        parse_document(json, formats)
    }

    /// Activities of the 1-based day `day`, or an empty slice when the document
    /// has nothing for it.
    pub fn activities_for_day(&self, day: i64) -> &[DayActivity] {
        if day < 1 {
            return &[];
        }
        usize::try_from(day - 1)
            .ok()
            .and_then(|index| self.days.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn day_count(&self, mode: DayCountMode) -> i64 {
        mode.count(self.departure_date, self.return_date)
    }

    pub fn date_of_day(&self, day: i64) -> Option<NaiveDate> {
        date_of_day(self.departure_date, day)
    }
}
