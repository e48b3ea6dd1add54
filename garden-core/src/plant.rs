use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Decorative category drawn next to a day once it holds a memory.
///
/// A kind is assigned when an entry is first planted and never changes afterwards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantKind {
    Sprout,
    Flower,
    Fern,
    Tulip,
    Daisy,
    Succulent,
    Lavender,
    Mushroom,
}

impl PlantKind {
    /// Every kind, in the order used for random selection.
    pub const ALL: [PlantKind; 8] = [
        PlantKind::Sprout,
        PlantKind::Flower,
        PlantKind::Fern,
        PlantKind::Tulip,
        PlantKind::Daisy,
        PlantKind::Succulent,
        PlantKind::Lavender,
        PlantKind::Mushroom,
    ];

    /// Picks a kind uniformly at random.
    ///
    /// The randomness source is injected so callers can pass a seeded RNG.
    ///
    /// ```
    /// # use garden_core::PlantKind;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let kind = PlantKind::random(&mut rng);
    /// assert!(PlantKind::ALL.contains(&kind));
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> PlantKind {
        let index = rng.gen_range(0..Self::ALL.len());
        Self::ALL[index]
    }
}
