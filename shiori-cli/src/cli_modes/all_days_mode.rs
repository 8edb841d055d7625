use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use shiori_core::ItineraryView;

pub fn all_days_mode(cli: &Cli, renderer: &Renderer, view: &ItineraryView) -> Result<CliModeResult> {
    if !cli.all {
        return Ok(CliModeResult::NothingToDo);
    }
    renderer.print_header(view.itinerary());
    renderer.print_all_days(view);
    Ok(CliModeResult::Finish)
}
