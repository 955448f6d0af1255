//! The job record and the declarative timetable entry.
//!
//! A [`Job`] is one allocatable block of future behavior: what the actor is
//! doing for the next N minutes. Jobs are owned by the queue that holds
//! them; when a job moves between queues or is split during a merge it is
//! cloned, never aliased.
//!
//! A [`ScheduleEntry`] is the declarative counterpart: one line of an
//! actor's daily timetable, from which the planning pass manufactures jobs.

use serde::{Deserialize, Serialize};

use crate::enums::JobKind;
use crate::ids::ActorId;
use crate::place::Place;
use crate::time_range::TimeRange;

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// One allocatable unit of runtime behavior.
///
/// `start_offset` is only meaningful for a *candidate* job handed to a merge
/// insertion: it asks for a start that many minutes into the future. Once a
/// job sits in a queue its start is implied by the jobs ahead of it and the
/// offset is reset to 0. A job with `duration <= 0` is degenerate and every
/// queue operation ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Human-readable label for the job (shown by debug tooling and logs).
    pub name: String,
    /// What kind of behavior this job allocates time to.
    pub kind: JobKind,
    /// Where the behavior takes place or heads toward.
    pub destination: Place,
    /// Requested start, in minutes from "now". Only read during merge
    /// insertion; always 0 for queued jobs.
    pub start_offset: i64,
    /// Remaining length of the job in minutes.
    pub duration: i64,
    /// The actor a follow or flee job tracks.
    pub target: Option<ActorId>,
}

impl Job {
    /// Create a job that keeps the actor at `destination` for `duration`
    /// minutes.
    pub fn stay(name: impl Into<String>, destination: Place, duration: i64) -> Self {
        Self {
            name: name.into(),
            kind: JobKind::Stay,
            destination,
            start_offset: 0,
            duration,
            target: None,
        }
    }

    /// Create a job that moves the actor toward `destination` over
    /// `duration` minutes.
    pub fn move_to(name: impl Into<String>, destination: Place, duration: i64) -> Self {
        Self {
            name: name.into(),
            kind: JobKind::Move,
            destination,
            start_offset: 0,
            duration,
            target: None,
        }
    }

    /// Create a job that follows `target` for `duration` minutes.
    ///
    /// The destination is a hint for the movement layer; the target's actual
    /// position is resolved externally every tick.
    pub fn follow(
        name: impl Into<String>,
        destination: Place,
        duration: i64,
        target: ActorId,
    ) -> Self {
        Self {
            name: name.into(),
            kind: JobKind::Follow,
            destination,
            start_offset: 0,
            duration,
            target: Some(target),
        }
    }

    /// Create a job that flees from `target` for `duration` minutes.
    pub fn flee(
        name: impl Into<String>,
        destination: Place,
        duration: i64,
        target: ActorId,
    ) -> Self {
        Self {
            name: name.into(),
            kind: JobKind::Flee,
            destination,
            start_offset: 0,
            duration,
            target: Some(target),
        }
    }

    /// Set the requested start offset, for handing the job to a merge
    /// insertion.
    pub const fn starting_at(mut self, offset_minutes: i64) -> Self {
        self.start_offset = offset_minutes;
        self
    }
}

// ---------------------------------------------------------------------------
// ScheduleEntry
// ---------------------------------------------------------------------------

/// One line of an actor's declarative daily timetable.
///
/// Immutable after construction; the owning schedule replaces whole entries
/// rather than editing them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Label for the entry (becomes the name of jobs cut from it).
    pub name: String,
    /// Where the actor should be during this entry.
    pub destination: Place,
    /// The daily minutes this entry claims.
    pub range: TimeRange,
    /// Free-form activity label interpreted by the behavior layer.
    pub activity: String,
}

impl ScheduleEntry {
    /// Create a timetable entry.
    pub fn new(
        name: impl Into<String>,
        destination: Place,
        range: TimeRange,
        activity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            destination,
            range,
            activity: activity.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_constructors_set_kind_and_target() {
        let here = Place::new(1, 1);
        let other = ActorId::new();

        let stay = Job::stay("rest", here, 60);
        assert_eq!(stay.kind, JobKind::Stay);
        assert!(stay.target.is_none());

        let go = Job::move_to("market", here, 30);
        assert_eq!(go.kind, JobKind::Move);

        let follow = Job::follow("escort", here, 120, other);
        assert_eq!(follow.kind, JobKind::Follow);
        assert_eq!(follow.target, Some(other));

        let flee = Job::flee("run", here, 15, other);
        assert_eq!(flee.kind, JobKind::Flee);
        assert_eq!(flee.target, Some(other));
    }

    #[test]
    fn starting_at_sets_only_the_offset() {
        let job = Job::stay("nap", Place::new(0, 0), 45).starting_at(20);
        assert_eq!(job.start_offset, 20);
        assert_eq!(job.duration, 45);
    }

    #[test]
    fn job_serde_round_trip() {
        let job = Job::follow("escort", Place::new(2, 9), 90, ActorId::new());
        let encoded = serde_json::to_string(&job).unwrap_or_default();
        let decoded: Job = serde_json::from_str(&encoded).unwrap_or_else(|_| {
            Job::stay("decode failed", Place::new(0, 0), 1)
        });
        assert_eq!(decoded, job);
    }

    #[test]
    fn schedule_entry_serde_round_trip() {
        let entry = ScheduleEntry::new(
            "morning shift",
            Place::new(4, 2),
            TimeRange::from_hours(8, 0, 12, 0),
            "work",
        );
        let encoded = serde_json::to_string(&entry).unwrap_or_default();
        let decoded: ScheduleEntry = serde_json::from_str(&encoded).unwrap_or_else(|_| {
            ScheduleEntry::new("decode failed", Place::new(0, 0), TimeRange::new(0, 0), "")
        });
        assert_eq!(decoded, entry);
    }
}
