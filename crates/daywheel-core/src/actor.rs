//! The actor aggregate: owner of one queue, one timetable, one tag context.
//!
//! An [`Actor`] is not itself complex -- it exists as the exclusive owner of
//! the scheduling state and as the seam where external inputs (elapsed
//! time, equip bonuses, ad hoc commands) meet that state. Nothing else may
//! mutate an actor's queue or schedule; the driving loop advances each
//! actor once per tick, in any order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use daywheel_types::{ActorId, Job, Place};

use crate::clock::GameClock;
use crate::props::{Prop, PropSet};
use crate::queue::JobQueue;
use crate::schedule::DailySchedule;

/// A simulated actor: identity plus exclusively-owned scheduling state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Where the actor currently is (maintained by the movement layer).
    pub location: Place,
    /// The actor's tag context, gating which activities it may perform.
    pub props: PropSet,
    /// The declarative daily timetable the queue refills from.
    pub schedule: DailySchedule,
    /// The near-future job sequence.
    pub queue: JobQueue,
    /// When the actor record was created.
    pub created_at: DateTime<Utc>,
}

impl Actor {
    /// Create an actor at a location with an empty timetable, queue, and
    /// tag context.
    pub fn new(name: impl Into<String>, location: Place) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            location,
            props: PropSet::new(),
            schedule: DailySchedule::new(),
            queue: JobQueue::new(),
            created_at: Utc::now(),
        }
    }

    /// The job the actor is performing right now, if any.
    pub fn current_job(&self) -> Option<&Job> {
        self.queue.current()
    }

    /// Consume elapsed game time from the front of the queue.
    ///
    /// Called once per simulation tick by the external driver; a
    /// non-positive delta is a silent no-op.
    pub fn advance(&mut self, minutes: i64) {
        self.queue.advance(minutes);
    }

    /// The planning pass: top the queue up from the timetable when its
    /// coverage has fallen below `horizon` minutes.
    ///
    /// Returns `true` when the queue covers the horizon on return (either
    /// it already did, or the refill completed), `false` after a
    /// bound-truncated refill.
    pub fn replenish_queue(&mut self, clock: &GameClock, horizon: i64) -> bool {
        if self.queue.total_duration() >= horizon {
            return true;
        }
        self.queue
            .fill_from_schedule(&self.schedule, clock.minute_of_day(), horizon)
    }

    /// Replace everything the actor was going to do with one explicit
    /// command.
    ///
    /// The path for player-controlled actors with no background timetable;
    /// a job with a non-positive duration is a silent no-op.
    pub fn issue_command(&mut self, job: Job) {
        self.queue.insert_with_clear(job);
    }

    /// Admission check with externally-supplied bonuses folded in.
    ///
    /// Equip and passive item bonuses live outside the scheduler; the
    /// caller hands them over as a prop set and they are merged into a
    /// working copy of the actor's own tags before the threshold check.
    /// The actor's stored tags are not modified.
    pub fn meets_conditions_with_bonuses(
        &self,
        bonuses: &PropSet,
        requirements: &BTreeMap<Prop, i64>,
    ) -> bool {
        let mut effective = self.props.clone();
        effective.merge(bonuses);
        effective.meets_conditions(requirements)
    }
}
