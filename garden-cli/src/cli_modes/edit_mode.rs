use super::{
    CliModeResult,
    day::resolve_day,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use garden_core::{Garden, PanelMode, SaveOutcome, calendar::date_for_day};

/// `--edit <day>`: opens the day's memory in $EDITOR and saves what comes back.
pub fn edit_mode(cli: &Cli, renderer: &Renderer, garden: &mut Garden) -> Result<CliModeResult> {
    let Some(token) = &cli.edit else {
        return Ok(CliModeResult::NothingToDo);
    };
    let day = resolve_day(garden, token)?;
    let date = date_for_day(garden.year(), day);

    let mode = garden.select_day(day).clone();
    match mode {
        PanelMode::Locked => {
            garden.close_day();
            renderer.print_outcome(day, date, SaveOutcome::Locked);
            return Ok(CliModeResult::Finish);
        }
        PanelMode::Viewing => {
            garden.begin_edit();
        }
        PanelMode::Editing { .. } => {}
    }

    let current = garden
        .view()
        .open
        .map(|open| open.content)
        .unwrap_or_default();
    let editor = resolve_editor(&garden.config.editor);
    let edited = create_editor_buffer(&editor, &current)?;

    if edited.trim_end() == current.trim_end() {
        garden.cancel_edit();
        garden.close_day();
        renderer.print_info("No changes, nothing was saved.");
        return Ok(CliModeResult::Finish);
    }

    garden.update_draft(edited.trim_end());
    if let Some(outcome) = garden.save_draft() {
        renderer.print_outcome(day, date, outcome?);
    }
    Ok(CliModeResult::Finish)
}
