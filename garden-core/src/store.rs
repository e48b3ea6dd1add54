//! The entry store: every saved memory, keyed by day index.
//!
//! Mutations are pure (`set_entry` and `remove_entry` return a new store) and persisting
//! is a separate, explicit `save`. Loading never fails: a missing or unreadable slot is
//! an empty garden.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use tracing::{debug, warn};

use crate::entry::{DayIndex, JournalEntry};
use crate::plant::PlantKind;
use crate::storage::KeyValueStore;

/// Name of the key-value slot holding the serialized store.
pub const STORAGE_KEY: &str = "garden-journal-entries";

/// Mapping from day index to journal entry.
///
/// Never holds an entry with blank content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: BTreeMap<DayIndex, JournalEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the store from `kv`.
    ///
    /// An absent key, a failing read or data that does not parse all yield an empty store.
    pub fn load(kv: &dyn KeyValueStore) -> Self {
        let raw = match kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved garden found, starting empty");
                return Self::new();
            }
            Err(error) => {
                warn!("could not read saved garden, starting empty: {error:#}");
                return Self::new();
            }
        };

        match Self::from_json(&raw) {
            Ok(store) => {
                debug!("loaded {} entries", store.len());
                store
            }
            Err(error) => {
                warn!("saved garden is corrupt, starting empty: {error:#}");
                Self::new()
            }
        }
    }

    /// Serializes the whole store into `kv`, replacing what was there.
    pub fn save(&self, kv: &dyn KeyValueStore) -> Result<()> {
        let json = self.to_json()?;
        kv.set(STORAGE_KEY, &json)
            .with_context(|| format!("saving {STORAGE_KEY}"))?;
        debug!("saved {} entries", self.len());
        Ok(())
    }

    /// Returns a store with `content` saved for `day`.
    ///
    /// - Blank content (after trimming) removes any entry at `day`.
    /// - An existing entry keeps its plant kind; only content and timestamp change.
    /// - A new entry gets a kind drawn from `rng`.
    ///
    /// ```
    /// # use garden_core::EntryStore;
    /// use chrono::Utc;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let store = EntryStore::new().set_entry(10, "Planted tomatoes", Utc::now(), &mut rng);
    /// assert_eq!(store.get(10).unwrap().content, "Planted tomatoes");
    ///
    /// let store = store.set_entry(10, "   ", Utc::now(), &mut rng);
    /// assert!(store.is_empty());
    /// ```
    pub fn set_entry<R: Rng + ?Sized>(
        &self,
        day: DayIndex,
        content: &str,
        saved_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        if content.trim().is_empty() {
            return self.remove_entry(day);
        }

        let plant_kind = match self.entries.get(&day) {
            Some(existing) => existing.plant_kind,
            None => PlantKind::random(rng),
        };

        let mut entries = self.entries.clone();
        entries.insert(
            day,
            JournalEntry {
                content: content.to_string(),
                created_at: saved_at,
                plant_kind,
            },
        );
        Self { entries }
    }

    /// Returns a store without any entry at `day`.
    pub fn remove_entry(&self, day: DayIndex) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(&day);
        Self { entries }
    }

    pub fn get(&self, day: DayIndex) -> Option<&JournalEntry> {
        self.entries.get(&day)
    }

    pub fn contains(&self, day: DayIndex) -> bool {
        self.entries.contains_key(&day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending day order.
    pub fn iter(&self) -> Iter<'_, DayIndex, JournalEntry> {
        self.entries.iter()
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).context("serializing entries")
    }

    fn from_json(raw: &str) -> Result<Self> {
        let mut entries: BTreeMap<DayIndex, JournalEntry> =
            serde_json::from_str(raw).context("parsing saved entries")?;
        entries.retain(|day, entry| {
            let keep = !entry.content.trim().is_empty();
            if !keep {
                warn!("dropping blank entry for day {day}");
            }
            keep
        });
        Ok(Self { entries })
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = (&'a DayIndex, &'a JournalEntry);
    type IntoIter = Iter<'a, DayIndex, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
