mod cli_modes;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli_modes::{CliModeResult, all_days_mode, interactive_mode, read_mode};
use logging::{Verbosity, init_logging};
use render::{ColorMode, RenderOptions, Renderer};
use shiori_core::{Config, DayCountMode, DocumentSource, ItineraryView, load_itinerary};
use std::process::ExitCode;
use std::str::FromStr;

/// shiori — travel itinerary viewer
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Schedule document: a JSON file path or an http(s) URL.
    /// Defaults to `document` from the config file, then `./schedule.json`.
    #[arg(env = "SHIORI_DOCUMENT")]
    pub source: Option<String>,
    /// Day of the trip to show, starting at 1 (e.g. `shiori --day 2`).
    #[arg(long, short, allow_negative_numbers = true)]
    pub day: Option<i64>,
    /// Show every day of the trip.
    #[arg(long, short, conflicts_with_all = ["day", "interactive"])]
    pub all: bool,
    /// Pick days from stdin until `q`.
    #[arg(long, short)]
    pub interactive: bool,
    /// How the number of days is computed: `calendar` or `day-of-month`.
    #[arg(long, value_parser = parse_day_count)]
    pub day_count: Option<DayCountMode>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// More log output on stderr (`-v` debug, `-vv` trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors.
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,
}

fn parse_day_count(value: &str) -> Result<DayCountMode, String> {
    DayCountMode::from_str(value)
        .map_err(|_| format!("'{value}' is not one of: calendar, day-of-month"))
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shiori: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
    }));

    let source = DocumentSource::parse(
        cli.source
            .as_deref()
            .unwrap_or_else(|| config.document_or_default()),
    );

    // One fetch on a single-threaded runtime; rendering starts once it resolves.
    renderer.print_loading();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let itinerary = runtime
        .block_on(load_itinerary(&source, &config.input_formats()))
        .with_context(|| format!("loading {source}"))?;

    let mut view = ItineraryView::new(itinerary, cli.day_count.unwrap_or(config.day_count));
    view.select_day(cli.day.unwrap_or(config.default_day));

    if let CliModeResult::Finish = interactive_mode(&cli, &renderer, &mut view)? {
        return Ok(());
    }

    if let CliModeResult::Finish = all_days_mode(&cli, &renderer, &view)? {
        return Ok(());
    }

    read_mode(&renderer, &view)?;
    Ok(())
}
