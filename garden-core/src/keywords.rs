use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Relative day words understood wherever a day is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Today,
    Yesterday,
    Tomorrow,
}

impl Keyword {
    /// Offset in days from the reference date.
    pub fn offset_days(self) -> i64 {
        match self {
            Keyword::Today => 0,
            Keyword::Yesterday => -1,
            Keyword::Tomorrow => 1,
        }
    }
}

pub struct Keywords;

impl Keywords {
    /// Global registry (lowercased input → canonical keyword).
    ///
    /// Seeded with every canonical word and extended once at startup with the user's
    /// `[synonyms]` table.
    fn registry() -> &'static RwLock<HashMap<String, Keyword>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Keyword>>> = Lazy::new(|| {
            let m: HashMap<String, Keyword> = Keyword::iter()
                .map(|k| (k.as_ref().to_string(), k))
                .collect();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Adds `(alias, target)` synonyms. Pairs whose target is unknown are ignored.
    pub fn extend(synonyms: &[(String, String)]) {
        let mut reg = Self::registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (alias, target) in synonyms {
            if let Some(&canonical) = reg.get(&target.to_ascii_lowercase()) {
                reg.insert(alias.to_ascii_lowercase(), canonical);
            }
        }
    }

    /// Returns `true` if `word` is a canonical keyword (eg "today").
    pub fn is_canonical(word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        Keyword::iter().any(|key| key.as_ref() == word)
    }

    /// Resolves `input` (case-insensitive) to a keyword, following synonyms.
    pub fn lookup(input: &str) -> Option<Keyword> {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        reg.get(&input.trim().to_ascii_lowercase()).copied()
    }

    pub fn matches(keyword: Keyword, input: &str) -> bool {
        Self::lookup(input) == Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_words_resolve() {
        assert_eq!(Keywords::lookup("today"), Some(Keyword::Today));
        assert_eq!(Keywords::lookup("YESTERDAY"), Some(Keyword::Yesterday));
        assert_eq!(Keywords::lookup(" tomorrow "), Some(Keyword::Tomorrow));
        assert_eq!(Keywords::lookup("someday"), None);
    }

    #[test]
    fn synonyms_extend_registry() {
        Keywords::extend(&[
            ("ayer".to_string(), "Yesterday".to_string()),
            ("nope".to_string(), "next-week".to_string()),
        ]);
        assert!(Keywords::matches(Keyword::Yesterday, "Ayer"));
        assert_eq!(Keywords::lookup("nope"), None);
    }

    #[test]
    fn is_canonical_ignores_case() {
        assert!(Keywords::is_canonical("Today"));
        assert!(!Keywords::is_canonical("hoy"));
    }

    #[test]
    fn offsets() {
        assert_eq!(Keyword::Yesterday.offset_days(), -1);
        assert_eq!(Keyword::Today.offset_days(), 0);
        assert_eq!(Keyword::Tomorrow.offset_days(), 1);
    }
}
