use anyhow::{Context, Result};
use garden_core::{
    DayIndex, Garden,
    parse_input::{ParseOptions, ParsedInput, parse_day_token, parse_entry_input},
};

/// Turns a day typed by the user into a day index of the garden's year.
pub fn resolve_day(garden: &Garden, token: &str) -> Result<DayIndex> {
    let formats = garden.config.input_formats();
    let opts = ParseOptions {
        reference_date: Some(garden.config.reference_date),
        formats: Some(&formats),
    };
    let date = parse_day_token(token, Some(opts))
        .with_context(|| format!("'{token}' is not a day (try `today`, `45` or `2023-02-14`)"))?;
    garden
        .day_for_date(date)
        .with_context(|| format!("{date} is not part of {}", garden.year()))
}

/// Splits `yesterday: some text` into a day index (today if absent) and the text.
pub fn resolve_entry(garden: &Garden, input: &str) -> Result<(DayIndex, String)> {
    let formats = garden.config.input_formats();
    let opts = ParseOptions {
        reference_date: Some(garden.config.reference_date),
        formats: Some(&formats),
    };
    let ParsedInput { date, content } = parse_entry_input(input, Some(opts));
    let day = match date {
        Some(date) => garden
            .day_for_date(date)
            .with_context(|| format!("{date} is not part of {}", garden.year()))?,
        None => garden.today(),
    };
    Ok((day, content))
}
