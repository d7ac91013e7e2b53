//! Date formatting for markup dialects.
//!
//! Every function here is pure: the time zone is an explicit argument and is
//! always applied before formatting. There is no shared formatter state.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone, Utc};
//! use weave_date::{format_rfc822, format_sitemap_date};
//!
//! let instant = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
//! let berlin = FixedOffset::east_opt(3600).unwrap();
//!
//! assert_eq!(format_rfc822(&instant, &berlin), "Sun, 10 Mar 2024 00:30:00 +0100");
//! assert_eq!(format_sitemap_date(&instant, &berlin), "2024-03-10");
//! ```

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

/// Output format for [`format_date`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFormat {
    /// RFC 822 style, as used by RSS `pubDate` and `lastBuildDate`.
    Rfc822,
    /// `YYYY-MM-DD`, as used by sitemap `lastmod`.
    SitemapDate,
}

/// Error parsing a UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DateError {
    /// The string is not of the form `Z`, `UTC`, `+HH:MM` or `+HHMM`.
    #[error("invalid UTC offset {0:?}, expected Z, UTC, +HH:MM or +HHMM")]
    InvalidOffset(String),

    /// Hours or minutes are out of range.
    #[error("UTC offset {0:?} is out of range")]
    OffsetOutOfRange(String),
}

/// Format `instant` in `zone` using `format`.
pub fn format_date<Tz>(instant: &DateTime<Utc>, zone: &Tz, format: DateFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = instant.with_timezone(zone);
    match format {
        DateFormat::Rfc822 => local.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
        DateFormat::SitemapDate => local.format("%Y-%m-%d").to_string(),
    }
}

/// Format `instant` in `zone` as an RFC 822 date, e.g. `Tue, 01 Jul 2003 10:52:37 +0200`.
pub fn format_rfc822<Tz>(instant: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_date(instant, zone, DateFormat::Rfc822)
}

/// Format the calendar date of `instant` in `zone`, e.g. `2003-07-01`.
pub fn format_sitemap_date<Tz>(instant: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_date(instant, zone, DateFormat::SitemapDate)
}

/// Parse a fixed UTC offset such as `+02:00`, `-0530`, `Z` or `UTC`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, DateError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let invalid = || DateError::InvalidOffset(value.to_owned());

    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (1, &value[1..]),
        Some(b'-') => (-1, &value[1..]),
        _ => return Err(invalid()),
    };
    if !rest.is_ascii() {
        return Err(invalid());
    }
    let digits = match rest.len() {
        4 => rest.to_owned(),
        5 if rest.as_bytes()[2] == b':' => format!("{}{}", &rest[..2], &rest[3..]),
        _ => return Err(invalid()),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(DateError::OffsetOutOfRange(value.to_owned()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| DateError::OffsetOutOfRange(value.to_owned()))
}
