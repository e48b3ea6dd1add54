//! The `Garden` session: the entry store plus the rules for when a day may be written.
//!
//! Callers drive it with the user actions (`select_day`, `save_day`, `close_day`, ...)
//! and render whatever `view()` returns.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::calendar::{
    DayDescriptor, Relation, build_calendar, date_for_day, day_of_year, total_days,
};
use crate::config::Config;
use crate::entry::DayIndex;
use crate::plant::PlantKind;
use crate::storage::{DirStore, KeyValueStore};
use crate::store::EntryStore;

/// Whether `day` may be written when `today` is the current day index.
///
/// Future days are locked; every mutation coming from the user goes through this check.
pub fn editable(day: DayIndex, today: DayIndex) -> bool {
    day <= today
}

/// State of the detail panel for the open day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    /// A future day. Nothing can be written.
    Locked,
    /// Showing the saved memory.
    Viewing,
    /// Writing; `draft` is the unsaved text.
    Editing { draft: String },
}

/// What a save did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entry was created with this plant.
    Planted(PlantKind),
    /// An existing entry got new content and kept its plant.
    Updated(PlantKind),
    Removed,
    /// Blank content for a day that had no entry.
    Unchanged,
    /// The day hasn't arrived yet.
    Locked,
}

/// The day shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDayView {
    pub day: DayIndex,
    pub date: Option<NaiveDate>,
    pub relation: Relation,
    pub editable: bool,
    pub mode: PanelMode,
    /// Draft while editing, saved content otherwise.
    pub content: String,
    pub plant_kind: Option<PlantKind>,
}

/// Everything the presentation layer needs to draw the garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenView {
    pub year: i32,
    pub today: DayIndex,
    pub total_days: u32,
    pub entries_count: usize,
    pub days: Vec<DayDescriptor>,
    pub open: Option<OpenDayView>,
}

#[derive(Debug, Clone)]
struct OpenDay {
    day: DayIndex,
    mode: PanelMode,
}

pub struct Garden {
    pub config: Config,
    storage: Box<dyn KeyValueStore>,
    entries: EntryStore,
    rng: Box<dyn RngCore>,
    open: Option<OpenDay>,
}

impl Garden {
    /// Creates a new `Garden`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a `Garden` backed by the data directory named in `config`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let storage = DirStore::open(&config.data_dir)?;
        Ok(Self::with_parts(
            config,
            Box::new(storage),
            Box::new(StdRng::from_entropy()),
        ))
    }

    /// Creates a `Garden` over an explicit storage provider and randomness source.
    pub fn with_parts(
        config: Config,
        storage: Box<dyn KeyValueStore>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let entries = EntryStore::load(&*storage);
        Self {
            config,
            storage,
            entries,
            rng,
            open: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.config.reference_date.year()
    }

    /// Day index of today.
    pub fn today(&self) -> DayIndex {
        day_of_year(&self.config.reference_date)
    }

    pub fn entries(&self) -> &EntryStore {
        &self.entries
    }

    /// Day index of `date`, if it falls in the garden's year.
    pub fn day_for_date(&self, date: NaiveDate) -> Option<DayIndex> {
        (date.year() == self.year()).then(|| day_of_year(&date))
    }

    pub fn is_editable(&self, day: DayIndex) -> bool {
        editable(day, self.today())
    }

    /// Opens the detail panel for `day`.
    ///
    /// Future days open locked, empty past days open straight into editing and days
    /// with a memory open in view mode.
    pub fn select_day(&mut self, day: DayIndex) -> &PanelMode {
        let mode = if !self.is_editable(day) {
            PanelMode::Locked
        } else if self.entries.contains(day) {
            PanelMode::Viewing
        } else {
            PanelMode::Editing {
                draft: String::new(),
            }
        };
        debug!("selected day {day}: {mode:?}");
        &self.open.insert(OpenDay { day, mode }).mode
    }

    /// Switches the open day from viewing to editing, with the saved text as draft.
    ///
    /// Returns `false` if there is no open day in view mode.
    pub fn begin_edit(&mut self) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        if open.mode != PanelMode::Viewing {
            return false;
        }
        let draft = self
            .entries
            .get(open.day)
            .map(|entry| entry.content.clone())
            .unwrap_or_default();
        open.mode = PanelMode::Editing { draft };
        true
    }

    /// Replaces the draft of the open day. Returns `false` unless editing.
    pub fn update_draft(&mut self, text: &str) -> bool {
        match self.open.as_mut().map(|open| &mut open.mode) {
            Some(PanelMode::Editing { draft }) => {
                *draft = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Drops the draft. A day with a memory goes back to view mode, any other day closes.
    pub fn cancel_edit(&mut self) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        if !matches!(open.mode, PanelMode::Editing { .. }) {
            return;
        }
        if self.entries.contains(open.day) {
            open.mode = PanelMode::Viewing;
        } else {
            self.open = None;
        }
    }

    /// Saves the open day's draft. Returns `None` unless a day is being edited.
    pub fn save_draft(&mut self) -> Option<Result<SaveOutcome>> {
        let open = self.open.as_ref()?;
        let PanelMode::Editing { draft } = &open.mode else {
            return None;
        };
        let (day, draft) = (open.day, draft.clone());
        Some(self.save_day(day, &draft))
    }

    /// Saves `content` for `day` and persists the store.
    ///
    /// Future days are refused with [`SaveOutcome::Locked`] and nothing changes. Blank
    /// content removes the memory. On success the detail panel closes.
    pub fn save_day(&mut self, day: DayIndex, content: &str) -> Result<SaveOutcome> {
        if !self.is_editable(day) {
            info!("refusing to write day {day}, today is {}", self.today());
            return Ok(SaveOutcome::Locked);
        }

        let previous = self.entries.get(day).map(|entry| entry.plant_kind);
        let next = self
            .entries
            .set_entry(day, content, Utc::now(), &mut *self.rng);
        let outcome = match (previous, next.get(day)) {
            (None, None) => SaveOutcome::Unchanged,
            (Some(_), None) => SaveOutcome::Removed,
            (Some(_), Some(entry)) => SaveOutcome::Updated(entry.plant_kind),
            (None, Some(entry)) => SaveOutcome::Planted(entry.plant_kind),
        };

        if outcome != SaveOutcome::Unchanged {
            next.save(&*self.storage)?;
            self.entries = next;
            debug!("day {day}: {outcome:?}");
        }
        self.open = None;
        Ok(outcome)
    }

    /// Removes the memory for `day`, same rules as saving blank content.
    pub fn remove_day(&mut self, day: DayIndex) -> Result<SaveOutcome> {
        self.save_day(day, "")
    }

    /// Closes the detail panel without touching the store.
    pub fn close_day(&mut self) {
        self.open = None;
    }

    /// Derives the grid and the detail panel from the current state.
    pub fn view(&self) -> GardenView {
        let year = self.year();
        let today = self.today();
        let open = self.open.as_ref().map(|open| {
            let entry = self.entries.get(open.day);
            let content = match &open.mode {
                PanelMode::Editing { draft } => draft.clone(),
                _ => entry.map(|e| e.content.clone()).unwrap_or_default(),
            };
            OpenDayView {
                day: open.day,
                date: date_for_day(year, open.day),
                relation: Relation::of(open.day, today),
                editable: editable(open.day, today),
                mode: open.mode.clone(),
                content,
                plant_kind: entry.map(|e| e.plant_kind),
            }
        });

        GardenView {
            year,
            today,
            total_days: total_days(year),
            entries_count: self.entries.len(),
            days: build_calendar(year, today, &self.entries),
            open,
        }
    }
}
