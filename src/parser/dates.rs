//! Lenient timestamp parsing for the date formats feeds actually use.
//!
//! Malformed RFC 2822 and RFC 3339 text is rewritten into a parseable shape
//! first (named `UTC` zone, long weekday/month names, unpadded hours, `24:`
//! hours, offsets without a colon), then a list of plain formats is tried.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// Formats that carry their own UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M%z",
    "%d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M %z",
];

/// Formats without an offset; read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only formats; read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

struct Fix(Regex, &'static str);

fn fixes(cell: &'static OnceLock<Vec<Fix>>, rules: &[(&str, &'static str)]) -> &'static [Fix] {
    cell.get_or_init(|| {
        rules
            .iter()
            .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| Fix(re, replacement)))
            .collect()
    })
}

fn rfc2822_fixes() -> &'static [Fix] {
    static FIXES: OnceLock<Vec<Fix>> = OnceLock::new();
    fixes(
        &FIXES,
        &[
            (r"(UTC|-0000$)", "+0000"),
            (r" Z$", " +0000"),
            // The weekday is redundant and often wrong or misspelled.
            (r"^(Sun|Mon|Tue|Wed|Thu|Fri|Sat)[a-z]*\.?, ?", ""),
            (r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*", "$1"),
            (r" 24:", " 00:"),
            (r" ([0-9]):", " 0${1}:"),
        ],
    )
}

fn rfc3339_fixes() -> &'static [Fix] {
    static FIXES: OnceLock<Vec<Fix>> = OnceLock::new();
    fixes(
        &FIXES,
        &[
            (r"([+-])(\d{2})(\d{2})$", "${1}${2}:${3}"),
            (r"^(\d{4}-\d{2}-\d{2})$", "${1}T00:00:00+00:00"),
        ],
    )
}

fn apply(fixes: &[Fix], text: &str) -> String {
    fixes.iter().fold(text.to_string(), |acc, Fix(re, replacement)| {
        re.replace(&acc, *replacement).into_owned()
    })
}

/// Parse a feed timestamp, keeping the offset it was written in.
///
/// Returns `None` for empty or unrecognized text.
pub fn parse_lenient(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&apply(rfc3339_fixes(), text)) {
        return Some(dt);
    }

    let rfc2822 = apply(rfc2822_fixes(), text);
    if let Ok(dt) = DateTime::parse_from_rfc2822(&rfc2822) {
        return Some(dt);
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&rfc2822, fmt) {
            return Some(dt);
        }
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().fixed_offset());
        }
    }

    None
}

/// [`parse_lenient`] in the shape feed-rs expects for its timestamp hook.
pub fn parse_lenient_utc(text: &str) -> Option<DateTime<Utc>> {
    parse_lenient(text).map(|dt| dt.with_timezone(&Utc))
}
