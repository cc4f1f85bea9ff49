//! Timestamp labels for feed rows.
//!
//! Two renderings of a media item's `created_time`:
//!
//! - absolute: `M/D/YYYY, HH:MM` (month and day unpadded, hour and minute
//!   zero-padded) in the configured display zone
//! - elapsed: a compact `60s` / `5m` / `3h` / `2d` / `8w` / `1y` label
//!   relative to a reference instant

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

/// Zone used for absolute timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter {
    zone: DisplayZone,
}

impl TimeFormatter {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    pub fn utc() -> Self {
        Self::new(DisplayZone::Utc)
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn format_absolute_time(&self, epoch_secs: i64) -> String {
        let Some(instant) = DateTime::from_timestamp(epoch_secs, 0) else {
            return epoch_secs.to_string();
        };

        match self.zone {
            DisplayZone::Local => format_in(&Local, instant),
            DisplayZone::Utc => format_in(&Utc, instant),
            DisplayZone::Fixed(offset) => format_in(&offset, instant),
        }
    }

    pub fn format_elapsed(&self, epoch_secs: i64, now: DateTime<Utc>) -> String {
        format_elapsed(epoch_secs, now)
    }
}

fn format_in<Tz>(zone: &Tz, instant: DateTime<Utc>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant
        .with_timezone(zone)
        .format("%-m/%-d/%Y, %H:%M")
        .to_string()
}

/// Elapsed time between `epoch_secs` and `now`, bucketed and rounded half-up.
///
/// The week bucket counts 30-day months and multiplies by four, so 45 days
/// reads `8w`. Timestamps in the future clamp to `0s`.
pub fn format_elapsed(epoch_secs: i64, now: DateTime<Utc>) -> String {
    let created_ms = epoch_secs.saturating_mul(MS_PER_SECOND);
    let elapsed = now.timestamp_millis().saturating_sub(created_ms).max(0);

    if elapsed < MS_PER_MINUTE {
        format!("{}s", rounded(elapsed, MS_PER_SECOND))
    } else if elapsed < MS_PER_HOUR {
        format!("{}m", rounded(elapsed, MS_PER_MINUTE))
    } else if elapsed < MS_PER_DAY {
        format!("{}h", rounded(elapsed, MS_PER_HOUR))
    } else if elapsed < MS_PER_MONTH {
        format!("{}d", rounded(elapsed, MS_PER_DAY))
    } else if elapsed < MS_PER_YEAR {
        format!("{}w", rounded(elapsed, MS_PER_MONTH) * 4)
    } else {
        format!("{}y", rounded(elapsed, MS_PER_YEAR))
    }
}

fn rounded(value: i64, unit: i64) -> i64 {
    (value as f64 / unit as f64).round() as i64
}
