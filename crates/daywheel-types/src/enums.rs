//! Enumeration types for the Daywheel scheduling engine.
//!
//! [`JobKind`] classifies what a queued job makes the actor do; [`Weekday`]
//! names the seven days of the fixed calendar week.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Job kinds
// ---------------------------------------------------------------------------

/// The kind of behavior a job allocates time to.
///
/// The engine only tracks when and for how long a job occupies an actor's
/// timeline; the external movement layer interprets the kind to drive the
/// actor's actual behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobKind {
    /// Remain at the current location.
    Stay,
    /// Travel toward the job's destination.
    Move,
    /// Track another actor's position (the job's target).
    Follow,
    /// Move away from another actor (the job's target).
    Flee,
}

// ---------------------------------------------------------------------------
// Weekdays
// ---------------------------------------------------------------------------

/// A day of the seven-day calendar week.
///
/// Day 1 of month 1 is a [`Weekday::Monday`]; with 28-day months every month
/// starts on the same weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// First day of the week.
    Monday,
    /// Second day of the week.
    Tuesday,
    /// Third day of the week.
    Wednesday,
    /// Fourth day of the week.
    Thursday,
    /// Fifth day of the week.
    Friday,
    /// Sixth day of the week.
    Saturday,
    /// Seventh day of the week.
    Sunday,
}

impl Weekday {
    /// Map a zero-based day index to a weekday (0 = Monday, 6 = Sunday).
    ///
    /// Indices outside 0..7 wrap around, so any absolute day count can be
    /// passed directly.
    pub const fn from_day_index(index: u64) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            // 6 is the only remaining case (0..7 with 0-5 handled above).
            _ => Self::Sunday,
        }
    }
}
