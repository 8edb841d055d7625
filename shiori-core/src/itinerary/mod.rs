pub mod date_utils;
mod itinerary;
mod parse_itinerary;

pub use date_utils::{DayCountMode, day_of_month_count, term_day_count};
pub use itinerary::{DayActivity, Itinerary};
