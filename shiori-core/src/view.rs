//! Day selection over a loaded itinerary.
use crate::itinerary::{DayActivity, DayCountMode, Itinerary};
use chrono::NaiveDate;

/// The loaded itinerary plus the currently selected day.
///
/// The itinerary is owned and never changes after construction; only
/// `selected_day` moves. Out-of-range selections are allowed and simply show
/// no activities.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    itinerary: Itinerary,
    day_count_mode: DayCountMode,
    selected_day: i64,
}

impl ItineraryView {
    /// Creates a view with day 1 selected.
    pub fn new(itinerary: Itinerary, day_count_mode: DayCountMode) -> Self {
        Self {
            itinerary,
            day_count_mode,
            selected_day: 1,
        }
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn selected_day(&self) -> i64 {
        self.selected_day
    }

    pub fn select_day(&mut self, day: i64) {
        tracing::debug!(day, "select day");
        self.selected_day = day;
    }

    /// Number of selectable days, never negative.
    pub fn day_count(&self) -> i64 {
        self.itinerary.day_count(self.day_count_mode).max(0)
    }

    pub fn activities_for_day(&self, day: i64) -> &[DayActivity] {
        self.itinerary.activities_for_day(day)
    }

    pub fn selected_activities(&self) -> &[DayActivity] {
        self.activities_for_day(self.selected_day)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.itinerary.date_of_day(self.selected_day)
    }

    /// Last day worth printing when showing the whole trip: the end of the
    /// date span, or the last day with data when the document lists more days.
    pub fn last_day(&self) -> i64 {
        let listed = i64::try_from(self.itinerary.days.len()).unwrap_or(i64::MAX);
        self.day_count().max(listed)
    }

    /// `1日目`, `2日目`, ... one per selectable day.
    pub fn day_labels(&self) -> Vec<String> {
        (1..=self.day_count()).map(day_label).collect()
    }
}

pub fn day_label(day: i64) -> String {
    format!("{day}日目")
}
