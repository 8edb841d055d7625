use super::theme::Theme;
use shiori_core::{
    Itinerary, ItineraryView,
    render::{
        LOADING_MESSAGE, format_activity_table, format_day_heading, format_day_selector,
        format_header,
    },
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Theme::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%Y/%m/%d".to_string(),
                    use_color: true,
                },
            },
        }
    }

    /// Prints Markdown through the skin, or as-is when colors are off.
    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
            if !md.ends_with('\n') {
                println!();
            }
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Shown while the document is being fetched. Skipped when output is
    /// plain so redirected output only holds the itinerary.
    pub fn print_loading(&self) {
        if self.opts.use_color {
            println!("{}", LOADING_MESSAGE.with(Color::DarkGrey));
        }
    }

    pub fn print_header(&self, itinerary: &Itinerary) {
        self.print_md(&format_header(itinerary, &self.opts.date_format));
    }

    /// Day heading, selector row and the selected day's table.
    pub fn print_selected_day(&self, view: &ItineraryView) {
        let day = view.selected_day();
        let heading = format_day_heading(day, view.selected_date(), &self.opts.date_format);
        let selector = format_day_selector(view);
        let table = format_activity_table(view.selected_activities());
        self.print_md(&format!("{heading}\n{selector}\n\n{table}"));
    }

    /// Every day of the trip, one table each, separated by rules.
    pub fn print_all_days(&self, view: &ItineraryView) {
        let itinerary = view.itinerary();
        let last_day = view.last_day();
        for day in 1..=last_day {
            let heading =
                format_day_heading(day, itinerary.date_of_day(day), &self.opts.date_format);
            let table = format_activity_table(itinerary.activities_for_day(day));
            self.print_md(&format!("{heading}\n{table}"));
            if day < last_day {
                self.print_md("---");
            }
        }
    }
}
