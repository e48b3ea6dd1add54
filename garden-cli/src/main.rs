mod cli;
mod cli_modes;
mod render;

use anyhow::{Context, Result};
use cli::Cli;
use cli_modes::{CliModeResult, edit_mode, garden_mode, read_mode, remove_mode, write_mode};
use garden_core::{
    Config, Garden,
    parse_input::{ParseOptions, parse_day_token},
};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type CliMode = fn(&Cli, &Renderer, &mut Garden) -> Result<CliModeResult>;

fn main() -> ExitCode {
    setup_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("garden: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `GARDEN_LOG` (e.g. `GARDEN_LOG=debug`).
fn setup_logging() {
    let filter = EnvFilter::try_from_env("GARDEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut config = Config::load()?;
    if let Some(today) = &cli.today {
        config.reference_date = parse_today(&config, today)?;
    }

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
    }));

    if cli.path {
        println!("{}", config.data_dir.display());
        return Ok(());
    }

    let mut garden = Garden::with_config(config)?;
    tracing::debug!("today is day {} of {}", garden.today(), garden.year());

    let modes: [CliMode; 4] = [edit_mode, remove_mode, read_mode, write_mode];
    for mode in modes {
        if mode(&cli, &renderer, &mut garden)? == CliModeResult::Finish {
            return Ok(());
        }
    }
    garden_mode(&renderer, &garden)?;
    Ok(())
}

/// `--today` accepts any date format the config knows, relative to the real today.
fn parse_today(config: &Config, token: &str) -> Result<chrono::NaiveDate> {
    let formats = config.input_formats();
    let opts = ParseOptions {
        reference_date: Some(config.reference_date),
        formats: Some(&formats),
    };
    parse_day_token(token, Some(opts)).with_context(|| format!("'{token}' is not a date"))
}
