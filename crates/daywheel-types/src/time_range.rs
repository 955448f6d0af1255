//! Half-open minute interval within one day, with midnight wraparound.
//!
//! A [`TimeRange`] stores a start and an end minute-of-day. Whether the
//! range wraps past midnight is a *derived* property (`start > end`), never
//! a stored flag, so the two minute values are the single source of truth.
//!
//! `has_started` and `has_ended` are written out with the same branch
//! structure as [`TimeRange::contains`] rather than composed from it; the
//! three predicates are evaluated independently by callers and must agree
//! branch-for-branch on the wraparound cases.

use serde::{Deserialize, Serialize};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A half-open `[start, end)` minute interval within one day.
///
/// A range whose start is greater than its end spans midnight: it covers
/// `[start, 1440)` followed by `[0, end)` of the next day.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeRange {
    /// First minute of the range (inclusive), in `[0, 1440)`.
    start: u32,
    /// End minute of the range (exclusive), in `[0, 1440)`.
    end: u32,
}

impl TimeRange {
    /// Create a range from start and end minutes of day.
    ///
    /// Values at or beyond 1440 wrap into `[0, 1440)`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start: start % MINUTES_PER_DAY,
            end: end % MINUTES_PER_DAY,
        }
    }

    /// Create a range from hour/minute pairs.
    ///
    /// Convenience for timetable authoring; `from_hours(22, 0, 2, 0)` is the
    /// late-night range spanning midnight.
    pub const fn from_hours(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self::new(
            start_hour.saturating_mul(60).saturating_add(start_minute),
            end_hour.saturating_mul(60).saturating_add(end_minute),
        )
    }

    /// First minute of the range (inclusive).
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// End minute of the range (exclusive).
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Whether the range crosses midnight (derived from the stored values).
    pub const fn spans_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether the given minute of day falls inside the range.
    pub const fn contains(&self, minute_of_day: u32) -> bool {
        if self.spans_midnight() {
            minute_of_day >= self.start || minute_of_day < self.end
        } else {
            minute_of_day >= self.start && minute_of_day < self.end
        }
    }

    /// Whether the given minute of day is exactly the range's start minute.
    ///
    /// This is an exact-equality trigger: a clock advanced by a delta large
    /// enough to skip past the start minute will miss it.
    pub const fn is_start_time(&self, minute_of_day: u32) -> bool {
        minute_of_day == self.start
    }

    /// Whether the range has started by the given minute of day.
    pub const fn has_started(&self, minute_of_day: u32) -> bool {
        if self.spans_midnight() {
            minute_of_day >= self.start || minute_of_day < self.end
        } else {
            minute_of_day >= self.start
        }
    }

    /// Whether the range has ended by the given minute of day.
    pub const fn has_ended(&self, minute_of_day: u32) -> bool {
        if self.spans_midnight() {
            minute_of_day < self.start && minute_of_day >= self.end
        } else {
            minute_of_day >= self.end
        }
    }

    /// Count of minutes from `minute_of_day` (inclusive) to the range's end,
    /// respecting wraparound. Returns 0 for a minute outside the range.
    pub const fn minutes_until_end(&self, minute_of_day: u32) -> u32 {
        if !self.contains(minute_of_day) {
            return 0;
        }
        if self.spans_midnight() && minute_of_day >= self.start {
            // Remainder of today plus the morning tail.
            MINUTES_PER_DAY
                .saturating_sub(minute_of_day)
                .saturating_add(self.end)
        } else {
            self.end.saturating_sub(minute_of_day)
        }
    }
}
