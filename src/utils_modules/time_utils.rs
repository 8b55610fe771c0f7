use crate::common::*;

/* Shapes seen in the `date_added` column */
const DATE_ADDED_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

#[doc = r#"
    Parses a `date_added` cell into a date.

    Accepts `"September 25, 2021"`, `"Sep 25, 2021"` and `"2021-09-25"`, with
    surrounding whitespace. Anything else yields `None`; an unreadable date is
    treated as missing rather than as an error.
"#]
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    DATE_ADDED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

#[doc = "Month (1..=12) of a `date_added` cell"]
pub fn parse_month_added(raw: &str) -> Option<u32> {
    parse_date_added(raw).map(|date| date.month())
}

#[doc = "Short English month name for 1..=12"]
pub fn month_abbreviation(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
