//! Time-sliced job scheduling for simulated actors.
//!
//! This crate governs how an actor allocates blocks of elapsed game time to
//! activities. Each actor owns a queue of jobs consumed from the front as
//! time advances and refilled from a declarative daily timetable; override
//! and merge insertion policies let runtime events reshape the future
//! queue without corrupting its total-duration accounting.
//!
//! The engine is pure state plus algorithms: single-threaded, synchronous,
//! and free of I/O apart from the YAML document loaders in [`config`]. It
//! never decides whether a move is geometrically possible -- it only tracks
//! when and for how long an activity occupies an actor's timeline, and
//! exposes the currently-active job to the external movement layer.
//!
//! # Modules
//!
//! - [`clock`] -- Absolute-minute game clock with a fixed 28-day/month,
//!   7-day/week calendar.
//! - [`props`] -- Typed `kind:name -> integer` tag store used as
//!   activity-admission conditions.
//! - [`schedule`] -- The declarative daily timetable.
//! - [`queue`] -- The job queue and its insertion policies.
//! - [`actor`] -- The aggregate owner tying the pieces together.
//! - [`config`] -- YAML calendar and timetable document loading.

pub mod actor;
pub mod clock;
pub mod config;
pub mod props;
pub mod queue;
pub mod schedule;
