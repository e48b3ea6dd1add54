use super::{CliModeResult, day::resolve_day};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use garden_core::{Garden, calendar::date_for_day};

pub fn remove_mode(cli: &Cli, renderer: &Renderer, garden: &mut Garden) -> Result<CliModeResult> {
    let Some(token) = &cli.remove else {
        return Ok(CliModeResult::NothingToDo);
    };
    let day = resolve_day(garden, token)?;
    let outcome = garden.remove_day(day)?;
    renderer.print_outcome(day, date_for_day(garden.year(), day), outcome);
    Ok(CliModeResult::Finish)
}
