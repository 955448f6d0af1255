//! Shared type definitions for the Daywheel scheduling engine.
//!
//! This crate is the single source of truth for the data records the engine
//! moves around: typed identifiers, the action and weekday enumerations, the
//! opaque location pair, the half-open daily time interval, and the job and
//! timetable-entry records. It contains no scheduling logic — the algorithms
//! that consume these types live in `daywheel-core`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for actor identifiers
//! - [`enums`] -- Enumeration types (job kinds, weekdays)
//! - [`place`] -- Opaque `(region, local)` location identity
//! - [`time_range`] -- Half-open minute interval with midnight wraparound
//! - [`job`] -- The job record and the declarative timetable entry

pub mod enums;
pub mod ids;
pub mod job;
pub mod place;
pub mod time_range;

// Re-export all public types at crate root for convenience.
pub use enums::{JobKind, Weekday};
pub use ids::ActorId;
pub use job::{Job, ScheduleEntry};
pub use place::Place;
pub use time_range::{MINUTES_PER_DAY, TimeRange};
