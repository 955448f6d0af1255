//! Game clock: the absolute-minute time value and its calendar derivations.
//!
//! The clock is a single non-negative minute counter. Month, day, week,
//! weekday, hour, and minute are computed from the counter and a fixed
//! calendar (28-day months, 7-day weeks, 1440 minutes per day) -- never
//! stored independently. The counter is the source of truth.
//!
//! # Design Principles
//!
//! - All derivations use checked or saturating arithmetic.
//! - The counter is monotone under `add_minutes` with a non-negative delta;
//!   negative deltas subtract but clamp at 0, the counter never goes
//!   negative.
//! - `set_time` validates every calendar field and fails fast; callers must
//!   not continue with an inconsistent clock.
//!
//! `is_in_time_range` intentionally duplicates the wraparound branch
//! structure of [`TimeRange::contains`] instead of delegating to it. Both
//! copies must stay behaviorally identical; a test in the integration suite
//! pins the equivalence.
//!
//! [`TimeRange::contains`]: daywheel_types::TimeRange::contains

use serde::{Deserialize, Serialize};

use daywheel_types::{MINUTES_PER_DAY, Weekday};

/// Number of days in every month.
pub const DAYS_PER_MONTH: u64 = 28;

/// Number of days in every week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Number of minutes in every hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Number of minutes in one day, widened for counter arithmetic.
const DAY: u64 = MINUTES_PER_DAY as u64;

/// Number of minutes in one 28-day month.
const MINUTES_PER_MONTH: u64 = DAY * DAYS_PER_MONTH;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// A calendar field passed to `set_time` is out of range.
    #[error("invalid calendar field {field}: {value}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The requested date does not fit in the minute counter.
    #[error("minute counter overflow: the requested date exceeds the representable range")]
    Overflow,
}

/// Absolute-minute time value with a fixed 28-day/month, 7-day/week
/// calendar.
///
/// Ordering and equality compare the total minute counter, so two clocks
/// are equal exactly when they denote the same instant.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GameClock {
    /// Minutes elapsed since minute zero of day 1, month 1.
    total_minutes: u64,
}

impl GameClock {
    /// Create a clock at minute zero of day 1, month 1 (a Monday, 00:00).
    pub const fn new() -> Self {
        Self { total_minutes: 0 }
    }

    /// Create a clock from an absolute minute count (useful for tests and
    /// state restoration).
    pub const fn from_total_minutes(total_minutes: u64) -> Self {
        Self { total_minutes }
    }

    /// Return the absolute minute counter.
    pub const fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    /// Advance (or rewind) the clock by a signed number of minutes.
    ///
    /// A negative delta subtracts but clamps the counter at 0; the clock
    /// never goes negative. A delta past `u64::MAX` saturates.
    pub const fn add_minutes(&mut self, delta: i64) {
        if delta >= 0 {
            self.total_minutes = self.total_minutes.saturating_add(delta.unsigned_abs());
        } else {
            self.total_minutes = self.total_minutes.saturating_sub(delta.unsigned_abs());
        }
    }

    /// Set the clock to an absolute calendar position.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidArgument`] if `month < 1`,
    /// `day` is outside `[1, 28]`, `hour` is outside `[0, 23]`, or
    /// `minute` is outside `[0, 59]`; [`ClockError::Overflow`] if the
    /// resulting minute count does not fit in the counter.
    pub fn set_time(&mut self, month: u32, day: u32, hour: u32, minute: u32) -> Result<(), ClockError> {
        if month < 1 {
            return Err(ClockError::InvalidArgument {
                field: "month",
                value: month,
            });
        }
        if day < 1 || u64::from(day) > DAYS_PER_MONTH {
            return Err(ClockError::InvalidArgument {
                field: "day",
                value: day,
            });
        }
        if hour > 23 {
            return Err(ClockError::InvalidArgument {
                field: "hour",
                value: hour,
            });
        }
        if minute > 59 {
            return Err(ClockError::InvalidArgument {
                field: "minute",
                value: minute,
            });
        }

        let months_elapsed = u64::from(month).saturating_sub(1);
        let days_elapsed = months_elapsed
            .checked_mul(DAYS_PER_MONTH)
            .and_then(|d| d.checked_add(u64::from(day).saturating_sub(1)))
            .ok_or(ClockError::Overflow)?;
        let minutes = days_elapsed
            .checked_mul(DAY)
            .and_then(|m| m.checked_add(u64::from(hour).saturating_mul(MINUTES_PER_HOUR)))
            .and_then(|m| m.checked_add(u64::from(minute)))
            .ok_or(ClockError::Overflow)?;

        self.total_minutes = minutes;
        Ok(())
    }

    /// Current month, starting at 1 and unbounded.
    pub fn month(&self) -> u64 {
        self.total_minutes
            .checked_div(MINUTES_PER_MONTH)
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Current day of the month, in `[1, 28]`.
    pub fn day(&self) -> u32 {
        let day_index = self
            .total_minutes
            .checked_div(DAY)
            .and_then(|d| d.checked_rem(DAYS_PER_MONTH))
            .unwrap_or(0);
        // Fits: day_index < 28.
        u32::try_from(day_index).unwrap_or(0).saturating_add(1)
    }

    /// Current week of the month, in `[1, 4]`.
    pub fn week(&self) -> u32 {
        self.day()
            .saturating_sub(1)
            .checked_div(7)
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Current day of the week. Day 1 of month 1 is a Monday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_index(self.total_minutes.checked_div(DAY).unwrap_or(0))
    }

    /// Current hour of the day, in `[0, 23]`.
    pub fn hour(&self) -> u32 {
        self.minute_of_day().checked_div(60).unwrap_or(0)
    }

    /// Current minute of the hour, in `[0, 59]`.
    pub fn minute(&self) -> u32 {
        let minute = self
            .total_minutes
            .checked_rem(MINUTES_PER_HOUR)
            .unwrap_or(0);
        // Fits: minute < 60.
        u32::try_from(minute).unwrap_or(0)
    }

    /// Minutes elapsed since today's midnight, in `[0, 1440)`.
    pub fn minute_of_day(&self) -> u32 {
        let minute = self.total_minutes.checked_rem(DAY).unwrap_or(0);
        // Fits: minute < 1440.
        u32::try_from(minute).unwrap_or(0)
    }

    /// Whether the clock currently sits inside the daily interval
    /// `[start, end)` given as hour/minute pairs.
    ///
    /// A start later than the end denotes a midnight-spanning interval,
    /// with the same branch structure as [`TimeRange::contains`] -- the
    /// duplication is deliberate and the two must stay behaviorally
    /// identical.
    ///
    /// [`TimeRange::contains`]: daywheel_types::TimeRange::contains
    pub fn is_in_time_range(
        &self,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> bool {
        let start = start_hour.saturating_mul(60).saturating_add(start_minute);
        let end = end_hour.saturating_mul(60).saturating_add(end_minute);
        let now = self.minute_of_day();
        if start > end {
            now >= start || now < end
        } else {
            now >= start && now < end
        }
    }
}
