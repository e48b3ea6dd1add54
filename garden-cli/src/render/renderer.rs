use super::theme::Palette;
use chrono::NaiveDate;
use garden_core::{
    DayDescriptor, DayIndex, GardenView, OpenDayView, PanelMode, PlantKind, Relation, SaveOutcome,
    calendar::month_label,
};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Stylize},
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
            skin: Palette::default_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %B %-d".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
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

    /// Header, year grid, today line and legend.
    pub fn print_garden(&self, view: &GardenView) {
        let memories = if view.entries_count == 1 {
            "memory"
        } else {
            "memories"
        };
        self.print_md("# Memory Garden");
        self.print_md(&format!(
            "*{} · {} {memories} planted*\n",
            view.year, view.entries_count
        ));
        for line in grid_lines(view, self.opts.use_color) {
            println!("{line}");
        }
        println!();
        self.print_md(&format!("Today is day **{}** of {}", view.today, view.total_days));
        println!("{}", legend());
    }

    /// Detail panel for one day.
    pub fn print_day(&self, day: &OpenDayView) {
        self.print_md(&format!("## {}", self.day_title(day.day, day.date)));
        match &day.mode {
            PanelMode::Locked => {
                self.print_md("> This day hasn't arrived yet. Come back when it does.");
            }
            PanelMode::Viewing => {
                if let Some(kind) = day.plant_kind {
                    self.print_md(&format!("*A {kind} grows here.*"));
                }
                self.print_md(&quote(&day.content));
            }
            PanelMode::Editing { draft } if draft.trim().is_empty() => {
                self.print_md("*Nothing planted yet. What would you like to remember about this day?*");
            }
            PanelMode::Editing { draft } => {
                self.print_md(&quote(draft));
            }
        }
    }

    /// One line describing what a save did.
    pub fn print_outcome(&self, day: DayIndex, date: Option<NaiveDate>, outcome: SaveOutcome) {
        let title = self.day_title(day, date);
        let message = match outcome {
            SaveOutcome::Planted(kind) => format!("Planted a {kind} on {title}"),
            SaveOutcome::Updated(kind) => format!("Your {kind} on {title} was tended"),
            SaveOutcome::Removed => format!("Removed the memory from {title}"),
            SaveOutcome::Unchanged => format!("Nothing was planted on {title}"),
            SaveOutcome::Locked => format!("{title} hasn't arrived yet"),
        };
        self.print_info(&message);
    }

    fn day_title(&self, day: DayIndex, date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => format!("{} (day {day})", date.format(&self.opts.date_format)),
            None => format!("day {day}"),
        }
    }
}

/// One line per month: a three-letter label followed by a cell per day.
pub fn grid_lines(view: &GardenView, use_color: bool) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for day in &view.days {
        if let Some(label) = month_label(day.index, view.year) {
            lines.push(format!("{label} "));
        }
        if let Some(line) = lines.last_mut() {
            line.push_str(&cell(day, use_color));
        }
    }
    lines
}

fn cell(day: &DayDescriptor, use_color: bool) -> String {
    let glyph = match (day.plant_kind, day.relation) {
        (Some(kind), _) => Palette::plant_glyph(kind),
        (None, Relation::Past) => Palette::EMPTY_PAST,
        (None, Relation::Today) => Palette::EMPTY_TODAY,
        (None, Relation::Future) => Palette::EMPTY_FUTURE,
    };
    if !use_color {
        return format!("{glyph} ");
    }
    let styled = match day.plant_kind {
        Some(kind) => glyph.to_string().with(Palette::plant_color(kind)),
        None if day.is_future() => glyph.to_string().with(Palette::SHADE),
        None => glyph.to_string().with(Palette::MUTED),
    };
    if day.is_today() {
        format!("{} ", styled.attribute(Attribute::Underlined).on(Palette::PEACH))
    } else {
        format!("{styled} ")
    }
}

fn legend() -> String {
    let plants: Vec<String> = PlantKind::ALL
        .iter()
        .map(|kind| format!("{} {kind}", Palette::plant_glyph(*kind)))
        .collect();
    format!(
        "{} unwritten   {} today   {}",
        Palette::EMPTY_PAST,
        Palette::EMPTY_TODAY,
        plants.join("  ")
    )
}

fn quote(text: &str) -> String {
    text.trim_end()
        .lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::calendar::build_calendar;
    use garden_core::EntryStore;
    use rand::{SeedableRng, rngs::StdRng};

    fn view(year: i32, today: DayIndex, store: &EntryStore) -> GardenView {
        let days = build_calendar(year, today, store);
        GardenView {
            year,
            today,
            total_days: days.len() as u32,
            entries_count: store.len(),
            days,
            open: None,
        }
    }

    #[test]
    fn one_line_per_month() {
        let lines = grid_lines(&view(2023, 45, &EntryStore::new()), false);
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("Jan "));
        assert!(lines[11].starts_with("Dec "));
        // label + 31 cells of two columns
        assert_eq!(lines[0].chars().count(), 4 + 31 * 2);
        assert_eq!(lines[1].chars().count(), 4 + 28 * 2);
    }

    #[test]
    fn cells_show_relation_and_plants() {
        let store = EntryStore::new().set_entry(
            10,
            "Planted tomatoes",
            chrono::Utc::now(),
            &mut StdRng::seed_from_u64(10),
        );
        let kind = store.get(10).unwrap().plant_kind;
        let lines = grid_lines(&view(2023, 45, &store), false);

        let january: Vec<char> = lines[0].chars().skip(4).step_by(2).collect();
        assert_eq!(january[0], Palette::EMPTY_PAST);
        assert_eq!(january[9], Palette::plant_glyph(kind));

        let february: Vec<char> = lines[1].chars().skip(4).step_by(2).collect();
        assert_eq!(february[13], Palette::EMPTY_TODAY);
        assert_eq!(february[14], Palette::EMPTY_FUTURE);
    }

    #[test]
    fn legend_names_every_plant() {
        let legend = legend();
        for kind in PlantKind::ALL {
            assert!(legend.contains(kind.as_ref()));
        }
    }

    #[test]
    fn quote_prefixes_every_line() {
        assert_eq!(quote("one\ntwo\n"), "> one\n> two");
    }
}
