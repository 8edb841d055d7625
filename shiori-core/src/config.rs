use crate::itinerary::DayCountMode;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, str::FromStr};
use strum::IntoEnumIterator;

/// Document loaded when neither the command line nor the config file names one.
pub const DEFAULT_DOCUMENT: &str = "schedule.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path or `http(s)` URL of the schedule document.
    pub document: Option<String>,
    /// chrono format used to print the trip's date range. Default is "%Y/%m/%d".
    pub date_format: String,
    /// Formats accepted for `departure_date`/`return_date`, tried after RFC 3339.
    pub input_date_formats: Vec<String>,
    pub day_count: DayCountMode,
    /// Day selected when the view opens. Default is 1.
    pub default_day: i64,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    document: Option<String>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    /// "calendar" or "day-of-month"
    day_count: Option<String>,
    default_day: Option<i64>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// A config file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            tracing::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Input date formats as `&str`, the shape the parser takes.
    pub fn input_formats(&self) -> Vec<&str> {
        self.input_date_formats.iter().map(AsRef::as_ref).collect()
    }

    /// The configured document, or `schedule.json` in the working directory.
    pub fn document_or_default(&self) -> &str {
        self.document.as_deref().unwrap_or(DEFAULT_DOCUMENT)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%Y/%m/%d".to_string());

        let input_date_formats = match file_config.input_date_formats {
            Some(formats) if !formats.is_empty() => formats,
            _ => Self::default_input_formats(),
        };

        let day_count = file_config
            .day_count
            .as_deref()
            .and_then(Self::parse_day_count)
            .unwrap_or_default();

        Self {
            document: file_config.document,
            date_format,
            input_date_formats,
            day_count,
            default_day: file_config.default_day.unwrap_or(1),
        }
    }

    fn default_input_formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string(), "%Y/%m/%d".to_string()]
    }

    fn parse_day_count(value: &str) -> Option<DayCountMode> {
        match DayCountMode::from_str(value.trim()) {
            Ok(mode) => Some(mode),
            Err(_) => {
                let expected: Vec<String> =
                    DayCountMode::iter().map(|m| m.as_ref().to_string()).collect();
                tracing::warn!(
                    "unknown day_count '{value}', expected one of: {}",
                    expected.join(", ")
                );
                None
            }
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("shiori")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("shiori").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
