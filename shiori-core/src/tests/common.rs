use crate::{Config, DayCountMode, Itinerary};
use std::path::PathBuf;

pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Three-day trip with activities for the first two days only.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "title": "京都旅行",
  "departure_date": "2024-03-10",
  "return_date": "2024-03-12",
  "days": [
    [
      { "content": "新幹線で京都へ", "startTime": "08:00", "finishTime": "10:15", "budget": "14170" },
      { "content": "旅館にチェックイン", "startTime": "10:30", "finishTime": "11:00", "note": "予約済み" },
      { "content": "昼食", "startTime": "12:00", "budget": "" }
    ],
    [
      { "content": "清水寺", "startTime": "09:00", "finishTime": "11:30", "budget": "500", "note": "拝観料" }
    ]
  ]
}"#;

pub fn sample_itinerary() -> Itinerary {
    Itinerary::from_json(SAMPLE_DOCUMENT, DEFAULT_FORMATS).expect("sample document parses")
}

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(document: Option<PathBuf>) -> Config {
    Config {
        document: document.map(|p| p.display().to_string()),
        date_format: "%Y/%m/%d".to_string(),
        input_date_formats: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
        day_count: DayCountMode::Calendar,
        default_day: 1,
    }
}
