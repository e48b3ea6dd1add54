//! Pure derivation of the year grid from a year, "today" and the entry store.

use chrono::{Datelike, NaiveDate};

use crate::entry::DayIndex;
use crate::plant::PlantKind;
use crate::store::EntryStore;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Where a day sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Past,
    Today,
    Future,
}

impl Relation {
    pub fn of(day: DayIndex, today: DayIndex) -> Self {
        if day < today {
            Relation::Past
        } else if day == today {
            Relation::Today
        } else {
            Relation::Future
        }
    }
}

/// One cell of the year grid. Recomputed on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDescriptor {
    pub index: DayIndex,
    pub has_entry: bool,
    pub plant_kind: Option<PlantKind>,
    pub relation: Relation,
}

impl DayDescriptor {
    pub fn is_past(&self) -> bool {
        self.relation == Relation::Past
    }

    pub fn is_today(&self) -> bool {
        self.relation == Relation::Today
    }

    pub fn is_future(&self) -> bool {
        self.relation == Relation::Future
    }
}

/// Ordinal of `date` within its year, January 1 being day 1.
///
/// Accepts dates and date-times alike; the time of day never changes the result.
///
/// ```
/// # use garden_core::calendar::day_of_year;
/// use chrono::NaiveDate;
///
/// let valentines = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
/// assert_eq!(day_of_year(&valentines), 45);
/// assert_eq!(day_of_year(&valentines.and_hms_opt(23, 59, 59).unwrap()), 45);
/// ```
pub fn day_of_year<D: Datelike>(date: &D) -> DayIndex {
    date.ordinal()
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`.
pub fn total_days(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Calendar date of a day index within `year`, or `None` if the index is outside the year.
pub fn date_for_day(year: i32, day: DayIndex) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, day)
}

/// Builds one descriptor per day of `year`, in ascending index order.
///
/// `today` partitions the range: lower indices are past, higher ones are future.
pub fn build_calendar(year: i32, today: DayIndex, store: &EntryStore) -> Vec<DayDescriptor> {
    (1..=total_days(year))
        .map(|index| {
            let plant_kind = store.get(index).map(|entry| entry.plant_kind);
            DayDescriptor {
                index,
                has_entry: plant_kind.is_some(),
                plant_kind,
                relation: Relation::of(index, today),
            }
        })
        .collect()
}

/// Short month name if `day` is the first of its month in `year`.
pub fn month_label(day: DayIndex, year: i32) -> Option<&'static str> {
    let date = date_for_day(year, day)?;
    if date.day() != 1 {
        return None;
    }
    MONTH_LABELS.get(date.month0() as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rand::{SeedableRng, rngs::StdRng};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert_eq!(total_days(2024), 366);
        assert_eq!(total_days(2023), 365);
        assert_eq!(total_days(2000), 366);
        assert_eq!(total_days(1900), 365);
    }

    #[test]
    fn total_days_agrees_with_leap_rule() {
        for year in 1800..2400 {
            assert_eq!(total_days(year) == 366, is_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn day_of_year_bounds() {
        assert_eq!(day_of_year(&ymd(2023, 1, 1)), 1);
        assert_eq!(day_of_year(&ymd(2023, 12, 31)), 365);
        assert_eq!(day_of_year(&ymd(2024, 12, 31)), 366);
        assert_eq!(day_of_year(&ymd(2024, 3, 1)), 61);
    }

    #[test]
    fn day_of_year_ignores_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2023, 7, 4, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2023, 7, 4, 23, 59, 59).unwrap();
        assert_eq!(day_of_year(&morning), day_of_year(&night));
    }

    #[test]
    fn day_of_year_is_monotonic_and_resets() {
        let mut date = ymd(2023, 1, 1);
        let mut previous = 0;
        while date.year() == 2023 {
            let current = day_of_year(&date);
            assert_eq!(current, previous + 1);
            previous = current;
            date = date.succ_opt().unwrap();
        }
        assert_eq!(day_of_year(&date), 1);
    }

    #[test]
    fn calendar_scenario_valentines_2023() {
        let days = build_calendar(2023, 45, &EntryStore::new());
        assert_eq!(days.len(), 365);
        assert!(days[44].is_today());
        assert_eq!(days[44].index, 45);
        assert!(days[45].is_future());
        assert!(days[43].is_past());
    }

    #[test]
    fn calendar_is_a_contiguous_partition() {
        for (year, today) in [(2023, 1), (2024, 366), (2024, 200), (2023, 365)] {
            let days = build_calendar(year, today, &EntryStore::new());
            assert_eq!(days.len() as u32, total_days(year));
            for (i, day) in days.iter().enumerate() {
                assert_eq!(day.index, i as u32 + 1);
                let flags = [day.is_past(), day.is_today(), day.is_future()];
                assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            }
            assert_eq!(days.iter().filter(|d| d.is_today()).count(), 1);
        }
    }

    #[test]
    fn calendar_reflects_entries() {
        let mut rng = StdRng::seed_from_u64(9);
        let store = EntryStore::new().set_entry(
            10,
            "Planted tomatoes",
            Utc.with_ymd_and_hms(2023, 1, 10, 8, 0, 0).unwrap(),
            &mut rng,
        );
        let kind = store.get(10).unwrap().plant_kind;

        let days = build_calendar(2023, 45, &store);
        assert!(days[9].has_entry);
        assert_eq!(days[9].plant_kind, Some(kind));
        assert!(!days[10].has_entry);
        assert_eq!(days[10].plant_kind, None);
    }

    #[test]
    fn month_labels_on_first_days_only() {
        assert_eq!(month_label(1, 2023), Some("Jan"));
        assert_eq!(month_label(2, 2023), None);
        assert_eq!(month_label(32, 2023), Some("Feb"));
        assert_eq!(month_label(60, 2023), Some("Mar"));
        assert_eq!(month_label(60, 2024), None);
        assert_eq!(month_label(61, 2024), Some("Mar"));
        assert_eq!(month_label(335, 2023), Some("Dec"));
        assert_eq!(month_label(0, 2023), None);
        assert_eq!(month_label(366, 2023), None);
    }

    #[test]
    fn twelve_labels_per_year() {
        for year in [2023, 2024] {
            let labels: Vec<&str> = (1..=total_days(year))
                .filter_map(|day| month_label(day, year))
                .collect();
            assert_eq!(labels, MONTH_LABELS.to_vec());
        }
    }

    #[test]
    fn date_for_day_matches_day_of_year() {
        assert_eq!(date_for_day(2023, 45), Some(ymd(2023, 2, 14)));
        assert_eq!(date_for_day(2023, 366), None);
        assert_eq!(date_for_day(2024, 366), Some(ymd(2024, 12, 31)));
        assert_eq!(date_for_day(2023, 0), None);
    }
}
