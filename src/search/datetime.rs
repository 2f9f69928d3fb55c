//! ISO-8601 timestamp parsing for date fields and date filters.
//!
//! Accepted shapes:
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` with an optional `±HH:MM` offset or
//!   trailing `Z` (read as `+00:00`); a space may replace the `T`.
//! - `YYYY-MM-DD` (midnight).
//!
//! Values without an offset are taken to be UTC so that every parsed
//! timestamp is comparable with every other.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Parse an ISO-8601 date or date-time, returning `None` when the
/// input does not match any accepted shape.
pub fn parse_timestamp(input: &str) -> Option<OffsetDateTime> {
    let mut normalized = input.replace('Z', "+00:00");
    if normalized.len() > 10 && normalized.as_bytes()[10] == b' ' {
        normalized.replace_range(10..11, "T");
    }
    let s = normalized.as_str();

    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(ts);
    }
    if let Ok(ts) = OffsetDateTime::parse(
        s,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
        ),
    ) {
        return Some(ts);
    }

    let naive = PrimitiveDateTime::parse(
        s,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
    });
    if let Ok(dt) = naive {
        return Some(dt.assume_utc());
    }

    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc())
}
