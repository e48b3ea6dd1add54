pub mod calendar;
pub mod config;
pub mod entry;
pub mod garden;
pub mod keywords;
pub mod parse_input;
pub mod plant;
pub mod storage;
pub mod store;

pub use calendar::{DayDescriptor, Relation};
pub use config::Config;
pub use entry::{DayIndex, JournalEntry};
pub use garden::{Garden, GardenView, OpenDayView, PanelMode, SaveOutcome, editable};
pub use plant::PlantKind;
pub use storage::{DirStore, KeyValueStore, MemoryStore};
pub use store::EntryStore;
