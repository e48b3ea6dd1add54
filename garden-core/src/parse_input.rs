use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::date_for_day;
use crate::keywords::Keywords;

/// Default accepted input date formats (parsing only).
const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d"];

/// `45`, `day 45`, `#45`
static DAY_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:day\s*|#)?(\d{1,3})$").expect("valid day index pattern"));

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords and bare day indices.
    pub reference_date: Option<NaiveDate>,
    /// Extra `chrono` format strings to try, after the ISO `%Y-%m-%d` default.
    pub formats: Option<&'a [&'a str]>,
}

/// Parsed result of inline text (e.g., "yesterday: Planted tomatoes").
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// The day named in the prefix, if there was one.
    pub date: Option<NaiveDate>,
    pub content: String,
}

/// Parses a token naming a single day.
///
/// Understood, in order:
/// 1. Keywords: `today`, `yesterday`, `tomorrow` and configured synonyms.
/// 2. Day indices within the reference year: `45`, `day 45`, `#45`.
/// 3. `%Y-%m-%d`, then any configured format.
///
/// ```
/// # use chrono::NaiveDate;
/// # use garden_core::parse_input::{parse_day_token, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: NaiveDate::from_ymd_opt(2023, 2, 14),
///     formats: Some(&["%d/%m/%Y"]),
/// };
///
/// assert_eq!(parse_day_token("yesterday", Some(opts)), NaiveDate::from_ymd_opt(2023, 2, 13));
/// assert_eq!(parse_day_token("day 10", Some(opts)), NaiveDate::from_ymd_opt(2023, 1, 10));
/// assert_eq!(parse_day_token("01/03/2023", Some(opts)), NaiveDate::from_ymd_opt(2023, 3, 1));
/// ```
pub fn parse_day_token(s: &str, options: Option<ParseOptions>) -> Option<NaiveDate> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let s = s.trim();

    if let Some(keyword) = Keywords::lookup(s) {
        return reference_date.checked_add_signed(Duration::days(keyword.offset_days()));
    }

    if let Some(caps) = DAY_INDEX.captures(s) {
        let day = caps.get(1)?.as_str().parse::<u32>().ok()?;
        return date_for_day(reference_date.year(), day);
    }

    DEFAULT_FORMATS
        .iter()
        .chain(options.formats.unwrap_or_default())
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Splits an optional `<day>:` prefix from the memory text.
///
/// The colon must end the input or be followed by whitespace, so `10:30 standup` stays
/// plain text. If the prefix does not name a day the whole input is kept as content.
pub fn parse_entry_input(input: &str, options: Option<ParseOptions>) -> ParsedInput {
    if let Some((prefix, rest)) = input.split_once(':') {
        let separated = rest.is_empty() || rest.starts_with(char::is_whitespace);
        if let Some(date) = parse_day_token(prefix, options).filter(|_| separated) {
            return ParsedInput {
                date: Some(date),
                content: rest.trim().to_string(),
            };
        }
    }
    ParsedInput {
        date: None,
        content: input.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn opts(anchor: NaiveDate) -> Option<ParseOptions<'static>> {
        Some(ParseOptions {
            reference_date: Some(anchor),
            ..Default::default()
        })
    }

    #[test]
    fn keywords_are_relative_to_reference() {
        let anchor = ymd(2023, 2, 14);
        assert_eq!(parse_day_token("today", opts(anchor)), Some(anchor));
        assert_eq!(parse_day_token("Yesterday", opts(anchor)), Some(ymd(2023, 2, 13)));
        assert_eq!(parse_day_token("tomorrow", opts(anchor)), Some(ymd(2023, 2, 15)));
    }

    #[test]
    fn day_indices_use_reference_year() {
        let anchor = ymd(2024, 6, 1);
        assert_eq!(parse_day_token("1", opts(anchor)), Some(ymd(2024, 1, 1)));
        assert_eq!(parse_day_token("#60", opts(anchor)), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_day_token("DAY 366", opts(anchor)), Some(ymd(2024, 12, 31)));
        assert_eq!(parse_day_token("day 367", opts(anchor)), None);
        assert_eq!(parse_day_token("0", opts(anchor)), None);
    }

    #[test]
    fn iso_and_custom_formats() {
        let anchor = ymd(2023, 2, 14);
        assert_eq!(parse_day_token("2023-07-04", opts(anchor)), Some(ymd(2023, 7, 4)));
        assert_eq!(parse_day_token("04/07/2023", opts(anchor)), None);

        let with_formats = Some(ParseOptions {
            reference_date: Some(anchor),
            formats: Some(&["%d/%m/%Y"]),
        });
        assert_eq!(parse_day_token("04/07/2023", with_formats), Some(ymd(2023, 7, 4)));
    }

    #[test]
    fn unknown_tokens_are_none() {
        assert_eq!(parse_day_token("someday", opts(ymd(2023, 1, 1))), None);
        assert_eq!(parse_day_token("", opts(ymd(2023, 1, 1))), None);
    }

    #[test]
    fn entry_with_day_prefix() {
        let p = parse_entry_input("yesterday: Planted tomatoes", opts(ymd(2023, 2, 14)));
        assert_eq!(p.date, Some(ymd(2023, 2, 13)));
        assert_eq!(p.content, "Planted tomatoes");
    }

    #[test]
    fn entry_without_day_prefix_keeps_colons() {
        let p = parse_entry_input("Note to self: water the fern", opts(ymd(2023, 2, 14)));
        assert_eq!(p.date, None);
        assert_eq!(p.content, "Note to self: water the fern");
    }

    #[test]
    fn clock_times_are_not_day_prefixes() {
        let p = parse_entry_input("10:30 standup ran long", opts(ymd(2023, 2, 14)));
        assert_eq!(p.date, None);
        assert_eq!(p.content, "10:30 standup ran long");
    }

    #[test]
    fn entry_with_empty_text_after_prefix() {
        let p = parse_entry_input("day 10:", opts(ymd(2023, 2, 14)));
        assert_eq!(p.date, Some(ymd(2023, 1, 10)));
        assert!(p.content.is_empty());
    }
}
