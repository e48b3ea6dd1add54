use super::{CliModeResult, day::resolve_entry};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use garden_core::{DayIndex, Garden, PanelMode, SaveOutcome, calendar::date_for_day};

pub fn write_mode(cli: &Cli, renderer: &Renderer, garden: &mut Garden) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let inline = cli.text.join(" ");
    let (day, content) = resolve_entry(garden, &inline)?;
    plant(renderer, garden, day, &content)?;
    Ok(CliModeResult::Finish)
}

/// Walks the day through select → edit → save, exactly as the panel would.
pub(super) fn plant(
    renderer: &Renderer,
    garden: &mut Garden,
    day: DayIndex,
    content: &str,
) -> Result<SaveOutcome> {
    let date = date_for_day(garden.year(), day);
    let mode = garden.select_day(day).clone();
    match mode {
        PanelMode::Locked => {
            garden.close_day();
            renderer.print_outcome(day, date, SaveOutcome::Locked);
            return Ok(SaveOutcome::Locked);
        }
        PanelMode::Viewing => {
            garden.begin_edit();
        }
        PanelMode::Editing { .. } => {}
    }
    garden.update_draft(content);
    let outcome = match garden.save_draft() {
        Some(outcome) => outcome?,
        None => SaveOutcome::Unchanged,
    };
    renderer.print_outcome(day, date, outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_modes::day::tests::mk_garden;
    use crate::render::RenderOptions;

    fn quiet() -> Renderer {
        Renderer::new(Some(RenderOptions {
            date_format: "%A, %B %-d".to_string(),
            use_color: false,
        }))
    }

    #[test]
    fn plant_new_then_update_keeps_kind() {
        let mut garden = mk_garden();
        let SaveOutcome::Planted(kind) = plant(&quiet(), &mut garden, 10, "Tomatoes").unwrap()
        else {
            panic!("expected a new plant");
        };
        let outcome = plant(&quiet(), &mut garden, 10, "Tomatoes, staked").unwrap();
        assert_eq!(outcome, SaveOutcome::Updated(kind));
        assert_eq!(garden.entries().get(10).unwrap().content, "Tomatoes, staked");
    }

    #[test]
    fn plant_in_the_future_is_locked() {
        let mut garden = mk_garden();
        let outcome = plant(&quiet(), &mut garden, 46, "Tomorrow's news").unwrap();
        assert_eq!(outcome, SaveOutcome::Locked);
        assert!(garden.entries().is_empty());
        assert!(garden.view().open.is_none());
    }

    #[test]
    fn plant_blank_removes() {
        let mut garden = mk_garden();
        plant(&quiet(), &mut garden, 1, "New year").unwrap();
        let outcome = plant(&quiet(), &mut garden, 1, "").unwrap();
        assert_eq!(outcome, SaveOutcome::Removed);
        assert!(garden.entries().is_empty());
    }
}
