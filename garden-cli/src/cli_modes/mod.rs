mod cli_mode;
mod day;
mod edit_mode;
mod editor_utils;
mod read_mode;
mod remove_mode;
mod write_mode;

pub use cli_mode::CliModeResult;
pub use edit_mode::edit_mode;
pub use read_mode::{garden_mode, read_mode};
pub use remove_mode::remove_mode;
pub use write_mode::write_mode;
