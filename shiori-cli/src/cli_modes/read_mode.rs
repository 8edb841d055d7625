use super::CliModeResult;
use crate::render::Renderer;
use anyhow::Result;
use shiori_core::ItineraryView;

/// Default mode: header plus the selected day.
pub fn read_mode(renderer: &Renderer, view: &ItineraryView) -> Result<CliModeResult> {
    renderer.print_header(view.itinerary());
    renderer.print_selected_day(view);
    Ok(CliModeResult::Finish)
}
