use super::{CliModeResult, day::resolve_day};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use garden_core::Garden;

/// `--on <day>`: shows the detail panel for one day.
pub fn read_mode(cli: &Cli, renderer: &Renderer, garden: &mut Garden) -> Result<CliModeResult> {
    let Some(token) = &cli.on else {
        return Ok(CliModeResult::NothingToDo);
    };
    let day = resolve_day(garden, token)?;
    garden.select_day(day);
    if let Some(open) = garden.view().open {
        renderer.print_day(&open);
    }
    garden.close_day();
    Ok(CliModeResult::Finish)
}

/// No flags: the whole year.
pub fn garden_mode(renderer: &Renderer, garden: &Garden) -> Result<CliModeResult> {
    renderer.print_garden(&garden.view());
    Ok(CliModeResult::Finish)
}
