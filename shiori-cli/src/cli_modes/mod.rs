mod all_days_mode;
mod cli_mode;
mod interactive_mode;
mod read_mode;

pub use all_days_mode::all_days_mode;
pub use cli_mode::CliModeResult;
pub use interactive_mode::interactive_mode;
pub use read_mode::read_mode;
