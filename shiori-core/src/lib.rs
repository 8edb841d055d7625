pub mod config;
pub mod error;
pub mod itinerary;
pub mod loader;
pub mod render;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{LoadError, ParseError};
pub use itinerary::{DayActivity, DayCountMode, Itinerary};
pub use loader::{DocumentSource, fetch_document, load_itinerary};
pub use view::ItineraryView;
