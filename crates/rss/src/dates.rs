// ABOUTME: Lenient RFC 822 date parsing for pubDate/lastBuildDate values.
// ABOUTME: Tries RFC 2822 first, then named-timezone and fallback formats seen in real feeds.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Parses a feed date string into a fixed-offset datetime.
///
/// RSS 2.0 dates are RFC 822, but feeds in the wild drift: single-digit
/// days, missing weekdays, named timezones chrono's RFC 2822 parser does
/// not know, and ISO-ish timestamps. Returns None if no format matches.
pub(crate) fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 2822 handles the compliant cases, including the obsolete
    // single-letter and North American zone names.
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }

    if let Some(dt) = parse_with_named_timezone(s) {
        return Some(dt);
    }

    // Formats with a numeric offset.
    let formats_with_tz = [
        "%a, %d %b %Y %H:%M:%S %z",
        "%a, %e %b %Y %H:%M:%S %z",
        "%d %b %Y %H:%M:%S %z",
        "%e %b %Y %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%z",
    ];
    for fmt in &formats_with_tz {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // Formats without a timezone; assume UTC.
    let formats_naive = [
        "%a, %d %b %Y %H:%M:%S",
        "%d %b %Y %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];
    let utc = FixedOffset::east_opt(0)?;
    for fmt in &formats_naive {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return utc.from_local_datetime(&naive).single();
        }
    }

    None
}

/// Parses dates whose timezone is a named abbreviation outside the RFC 822
/// set (chrono rejects these in RFC 2822 mode).
fn parse_with_named_timezone(s: &str) -> Option<DateTime<FixedOffset>> {
    let tz_offsets: &[(&str, i32)] = &[
        ("UT", 0),
        ("GMT", 0),
        ("UTC", 0),
        ("CET", 3600),
        ("CEST", 2 * 3600),
        ("EET", 2 * 3600),
        ("EEST", 3 * 3600),
        ("BST", 3600),
        ("JST", 9 * 3600),
        ("KST", 9 * 3600),
        ("AEST", 10 * 3600),
        ("AEDT", 11 * 3600),
        ("NZST", 12 * 3600),
        ("NZDT", 13 * 3600),
    ];

    for (tz_name, offset_secs) in tz_offsets {
        if let Some(base) = s.strip_suffix(tz_name) {
            let base = base.trim_end();
            let formats = [
                "%a, %d %b %Y %H:%M:%S",
                "%a, %e %b %Y %H:%M:%S",
                "%d %b %Y %H:%M:%S",
                "%e %b %Y %H:%M:%S",
            ];
            for fmt in &formats {
                if let Ok(naive) = NaiveDateTime::parse_from_str(base, fmt) {
                    let offset = FixedOffset::east_opt(*offset_secs)?;
                    return offset.from_local_datetime(&naive).single();
                }
            }
        }
    }

    None
}
