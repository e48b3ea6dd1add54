use clap::{ArgGroup, Parser};

use crate::render::ColorMode;

/// garden — plant a memory each day and watch the year bloom
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("mode").args(["path", "on", "edit", "remove", "text"]).multiple(false)),
)]
pub struct Cli {
    /// Prints the directory holding the garden
    #[arg(long, short)]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Pretend today is this date (e.g. `--today 2023-02-14`)
    #[arg(long, env = "GARDEN_TODAY")]
    pub today: Option<String>,

    /// Show the memory planted on a day (e.g. `garden --on yesterday`, `garden --on 45`)
    #[arg(long)]
    pub on: Option<String>,
    /// Opens your $EDITOR with the memory of a day (e.g. `garden --edit today`)
    #[arg(long, short)]
    pub edit: Option<String>,
    /// Removes the memory planted on a day
    #[arg(long)]
    pub remove: Option<String>,

    /// Free text to plant (e.g. `garden yesterday: Planted tomatoes`). Defaults to today.
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
