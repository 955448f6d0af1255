//! The job queue: the scheduling core.
//!
//! A [`JobQueue`] holds an actor's near-future job sequence. Queued jobs
//! cover contiguous, non-overlapping minutes starting at "now": the front
//! job is happening, and the implicit start of every job is the sum of the
//! durations ahead of it. `total_duration` therefore equals the covered
//! horizon exactly, and no stored job ever has a duration of zero or less.
//!
//! Three insertion policies reshape the future without breaking that
//! accounting:
//!
//! - [`JobQueue::insert_override`] -- precedence to the **new** job; it
//!   displaces the first `duration` minutes of the old timeline.
//! - [`JobQueue::insert_merge`] -- precedence to **existing** jobs; the
//!   candidate only fills time the queue does not already cover, inside its
//!   own requested window.
//! - [`JobQueue::insert_with_clear`] -- total replacement, for actors whose
//!   every behavior is an explicit one-shot command.
//!
//! Degenerate inputs (`advance` with a non-positive delta, any job with a
//! non-positive duration) are silent no-ops by contract: not every caller
//! validates before calling, and none of these paths may raise.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use daywheel_types::{Job, MINUTES_PER_DAY};

use crate::schedule::DailySchedule;

/// Default planning horizon: keep one full day of behavior queued.
pub const DEFAULT_LOOK_AHEAD: i64 = 1440;

/// Upper bound on schedule lookups per refill.
///
/// Guarantees termination when a sparse schedule cannot cover the horizon;
/// reaching the bound leaves a partially filled queue.
const FILL_PASS_LIMIT: u32 = 100;

/// Ordered sequence of an actor's upcoming jobs; front is "happening now".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQueue {
    /// Queued jobs, front first.
    jobs: VecDeque<Job>,
}

impl JobQueue {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            jobs: VecDeque::new(),
        }
    }

    /// The job happening now, if any.
    pub fn current(&self) -> Option<&Job> {
        self.jobs.front()
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the queue holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterate over queued jobs, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Total minutes of future behavior the queue covers.
    pub fn total_duration(&self) -> i64 {
        self.jobs
            .iter()
            .fold(0_i64, |sum, job| sum.saturating_add(job.duration))
    }

    /// Append a job at the back of the queue.
    ///
    /// Silent no-op for a job with a non-positive duration.
    pub fn push_back(&mut self, job: Job) {
        if job.duration <= 0 {
            return;
        }
        self.jobs.push_back(job);
    }

    /// Consume `minutes` of elapsed time from the front of the queue.
    ///
    /// Jobs whose remaining duration fits inside the elapsed time are
    /// removed whole; the job straddling the boundary is shortened by the
    /// remainder. Consecutive calls are additive: `advance(a)` then
    /// `advance(b)` leaves the same queue as `advance(a + b)` for any
    /// non-negative `a` and `b`.
    ///
    /// Silent no-op for a non-positive delta.
    pub fn advance(&mut self, minutes: i64) {
        if minutes <= 0 {
            return;
        }
        let mut remaining = minutes;
        while remaining > 0 {
            let Some(front) = self.jobs.front_mut() else {
                break;
            };
            if front.duration <= remaining {
                remaining = remaining.saturating_sub(front.duration);
                self.jobs.pop_front();
            } else {
                front.duration = front.duration.saturating_sub(remaining);
                remaining = 0;
            }
        }
    }

    /// Insert a job with precedence over the existing timeline.
    ///
    /// Exactly `job.duration` minutes are trimmed off the front of the
    /// queue (whole jobs removed, the straddler shortened), then the job is
    /// placed at the front. Minutes beyond `job.duration` are preserved
    /// untouched.
    ///
    /// Silent no-op for a job with a non-positive duration.
    pub fn insert_override(&mut self, job: Job) {
        if job.duration <= 0 {
            return;
        }
        let mut to_trim = job.duration;
        while to_trim > 0 {
            let Some(front) = self.jobs.front_mut() else {
                break;
            };
            if front.duration <= to_trim {
                to_trim = to_trim.saturating_sub(front.duration);
                self.jobs.pop_front();
            } else {
                front.duration = front.duration.saturating_sub(to_trim);
                to_trim = 0;
            }
        }
        let mut job = job;
        job.start_offset = 0;
        self.jobs.push_front(job);
    }

    /// Insert a job with precedence to the existing timeline.
    ///
    /// The candidate asks for the window
    /// `[start_offset, start_offset + duration)`. It may only occupy time
    /// the queue does not already cover: its actual start is the later of
    /// its requested start and the end of existing coverage, and its
    /// duration shrinks to whatever is left of the window from there. A
    /// window the queue already covers entirely inserts nothing. Existing
    /// jobs are never shortened, moved, or removed.
    ///
    /// Silent no-op for a job with a non-positive duration.
    pub fn insert_merge(&mut self, job: Job) {
        if job.duration <= 0 {
            return;
        }

        // Existing coverage always extends contiguously from minute 0.
        let mut coverage = 0_i64;
        for existing in &self.jobs {
            coverage = coverage.saturating_add(existing.duration);
        }

        let actual_start = job.start_offset.max(coverage);
        let window_end = job.start_offset.saturating_add(job.duration);
        if actual_start >= window_end {
            // Existing jobs fully cover the requested window.
            return;
        }

        let mut trimmed = job;
        trimmed.duration = window_end.saturating_sub(actual_start);
        trimmed.start_offset = 0;

        // Splice after the last job that ends at or before the actual
        // start, or at the front if none does.
        let mut end_of_prefix = 0_i64;
        let mut position = 0_usize;
        for (index, existing) in self.jobs.iter().enumerate() {
            end_of_prefix = end_of_prefix.saturating_add(existing.duration);
            if end_of_prefix <= actual_start {
                position = index.saturating_add(1);
            }
        }
        self.jobs.insert(position, trimmed);
    }

    /// Discard the entire queue and insert the one job.
    ///
    /// Used by actors with no background timetable, where every queued
    /// behavior is an explicit one-shot command. A job with a non-positive
    /// duration is a silent no-op and leaves the existing queue unchanged.
    pub fn insert_with_clear(&mut self, job: Job) {
        if job.duration <= 0 {
            return;
        }
        self.jobs.clear();
        let mut job = job;
        job.start_offset = 0;
        self.jobs.push_back(job);
    }

    /// Top the queue up from the actor's daily timetable until it covers
    /// `look_ahead` minutes.
    ///
    /// Walks forward from the first uncovered minute of day, cutting one
    /// `Move` job per timetable entry (sized to the shorter of the time
    /// left in the entry and the time left to fill) and stepping a single
    /// minute at a time through gaps. The walk is bounded by a fixed pass
    /// ceiling; a schedule too sparse to cover the horizon within the
    /// ceiling stops early and leaves the queue partially filled.
    ///
    /// Returns `true` when the horizon is fully covered on return, `false`
    /// after a bound-truncated fill. Already-sufficient coverage is a no-op
    /// returning `true`.
    pub fn fill_from_schedule(
        &mut self,
        schedule: &DailySchedule,
        current_time_of_day: u32,
        look_ahead: i64,
    ) -> bool {
        let covered = self.total_duration();
        let mut need = look_ahead.saturating_sub(covered);
        if need <= 0 {
            return true;
        }

        // First uncovered minute of day.
        let day = i64::from(MINUTES_PER_DAY);
        let offset = i64::from(current_time_of_day)
            .saturating_add(covered)
            .checked_rem(day)
            .unwrap_or(0);
        let mut cursor = u32::try_from(offset).unwrap_or(0);

        let mut appended = 0_u32;
        let mut passes = 0_u32;
        while need > 0 && passes < FILL_PASS_LIMIT {
            passes = passes.saturating_add(1);
            match schedule.entry_at(cursor) {
                Some(entry) => {
                    let left_in_entry = i64::from(entry.range.minutes_until_end(cursor));
                    let span = left_in_entry.min(need);
                    let job = Job::move_to(entry.name.clone(), entry.destination, span);
                    self.jobs.push_back(job);
                    need = need.saturating_sub(span);
                    appended = appended.saturating_add(1);
                    let step = u32::try_from(span).unwrap_or(0);
                    cursor = cursor
                        .saturating_add(step)
                        .checked_rem(MINUTES_PER_DAY)
                        .unwrap_or(0);
                }
                None => {
                    cursor = cursor
                        .saturating_add(1)
                        .checked_rem(MINUTES_PER_DAY)
                        .unwrap_or(0);
                }
            }
        }

        let filled = need <= 0;
        if filled {
            debug!(appended, total = self.total_duration(), "queue refilled from schedule");
        } else {
            warn!(
                appended,
                shortfall = need,
                "schedule too sparse: refill stopped at pass ceiling"
            );
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use daywheel_types::{Place, ScheduleEntry, TimeRange};

    use super::*;

    fn job(name: &str, duration: i64) -> Job {
        Job::move_to(name, Place::new(1, 1), duration)
    }

    fn durations(queue: &JobQueue) -> Vec<i64> {
        queue.iter().map(|j| j.duration).collect()
    }

    fn names(queue: &JobQueue) -> Vec<&str> {
        queue.iter().map(|j| j.name.as_str()).collect()
    }

    // -- advance ----------------------------------------------------------

    #[test]
    fn advance_consumes_whole_and_partial_jobs() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.push_back(job("b", 60));

        queue.advance(45);
        assert_eq!(names(&queue), vec!["b"]);
        assert_eq!(durations(&queue), vec![45]);
    }

    #[test]
    fn advance_is_additive() {
        let mut split = JobQueue::new();
        let mut whole = JobQueue::new();
        for q in [&mut split, &mut whole] {
            q.push_back(job("a", 30));
            q.push_back(job("b", 60));
            q.push_back(job("c", 10));
        }

        split.advance(25);
        split.advance(40);
        whole.advance(65);
        assert_eq!(split, whole);
    }

    #[test]
    fn advance_past_the_end_empties_the_queue() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.advance(1000);
        assert!(queue.is_empty());
        assert_eq!(queue.total_duration(), 0);
    }

    #[test]
    fn advance_nonpositive_is_a_noop() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        let before = queue.clone();

        queue.advance(0);
        queue.advance(-15);
        assert_eq!(queue, before);
    }

    // -- insert_override --------------------------------------------------

    #[test]
    fn override_displaces_the_front_minutes() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.push_back(job("b", 60));

        queue.insert_override(job("urgent", 45));
        assert_eq!(names(&queue), vec!["urgent", "b"]);
        // 15 minutes of "b" were displaced along with all of "a".
        assert_eq!(durations(&queue), vec![45, 45]);
        assert_eq!(queue.total_duration(), 90);
    }

    #[test]
    fn override_longer_than_queue_replaces_everything() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));

        queue.insert_override(job("urgent", 200));
        assert_eq!(names(&queue), vec!["urgent"]);
        assert_eq!(queue.total_duration(), 200);
    }

    #[test]
    fn override_into_empty_queue_just_inserts() {
        let mut queue = JobQueue::new();
        queue.insert_override(job("urgent", 20));
        assert_eq!(durations(&queue), vec![20]);
    }

    #[test]
    fn override_nonpositive_duration_is_a_noop() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        let before = queue.clone();

        queue.insert_override(job("zero", 0));
        queue.insert_override(job("negative", -5));
        assert_eq!(queue, before);
    }

    #[test]
    fn override_resets_candidate_offset() {
        let mut queue = JobQueue::new();
        queue.insert_override(job("urgent", 20).starting_at(500));
        assert_eq!(queue.current().map(|j| j.start_offset), Some(0));
    }

    // -- insert_merge -----------------------------------------------------

    #[test]
    fn merge_fills_only_uncovered_tail() {
        // Queue [Hunt:20], merge (offset 0, Follow:40) => [Hunt:20, Follow:20].
        let mut queue = JobQueue::new();
        queue.push_back(job("hunt", 20));

        queue.insert_merge(job("follow", 40));
        assert_eq!(names(&queue), vec!["hunt", "follow"]);
        assert_eq!(durations(&queue), vec![20, 20]);
        assert_eq!(queue.total_duration(), 40);
    }

    #[test]
    fn merge_fully_covered_window_inserts_nothing() {
        // Queue [Follow:2880], merge (offset 0, Hunt:20) => unchanged.
        let mut queue = JobQueue::new();
        queue.push_back(job("follow", 2880));
        let before = queue.clone();

        queue.insert_merge(job("hunt", 20));
        assert_eq!(queue, before);
    }

    #[test]
    fn merge_offset_window_starts_after_coverage() {
        // Queue [Follow:30], merge (offset 20, Hunt:40) => [Follow:30, Hunt:30].
        let mut queue = JobQueue::new();
        queue.push_back(job("follow", 30));

        queue.insert_merge(job("hunt", 40).starting_at(20));
        assert_eq!(names(&queue), vec!["follow", "hunt"]);
        assert_eq!(durations(&queue), vec![30, 30]);
    }

    #[test]
    fn merge_never_touches_existing_jobs() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.push_back(job("b", 45));
        let before: Vec<Job> = queue.iter().cloned().collect();

        queue.insert_merge(job("extra", 120).starting_at(10));
        let after: Vec<Job> = queue.iter().take(before.len()).cloned().collect();
        assert_eq!(after, before);
        // Only time past the existing 75 minutes, inside [10, 130), was added.
        assert_eq!(durations(&queue), vec![30, 45, 55]);
    }

    #[test]
    fn merge_into_empty_queue_honors_the_window() {
        let mut queue = JobQueue::new();
        queue.insert_merge(job("hunt", 40).starting_at(20));
        // Nothing covers the window, so its full 40 minutes survive; the
        // queue has no gap notion, so the job simply becomes the front.
        assert_eq!(durations(&queue), vec![40]);
        assert_eq!(queue.current().map(|j| j.start_offset), Some(0));
    }

    #[test]
    fn merge_nonpositive_duration_is_a_noop() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        let before = queue.clone();

        queue.insert_merge(job("zero", 0));
        queue.insert_merge(job("negative", -10).starting_at(5));
        assert_eq!(queue, before);
    }

    // -- insert_with_clear ------------------------------------------------

    #[test]
    fn clear_insert_replaces_the_whole_queue() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.push_back(job("b", 60));

        queue.insert_with_clear(job("command", 15));
        assert_eq!(names(&queue), vec!["command"]);
        assert_eq!(queue.total_duration(), 15);
    }

    #[test]
    fn clear_insert_nonpositive_duration_leaves_queue_unchanged() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        let before = queue.clone();

        queue.insert_with_clear(job("zero", 0));
        assert_eq!(queue, before);
    }

    // -- fill_from_schedule -----------------------------------------------

    fn entry(name: &str, start: u32, end: u32) -> ScheduleEntry {
        ScheduleEntry::new(name, Place::new(2, 3), TimeRange::new(start, end), "routine")
    }

    #[test]
    fn fill_cuts_jobs_along_entry_boundaries() {
        let mut schedule = DailySchedule::new();
        schedule.push(entry("work", 480, 960));
        schedule.push(entry("home", 960, 480));

        let mut queue = JobQueue::new();
        // 08:00, empty queue, one-day horizon.
        assert!(queue.fill_from_schedule(&schedule, 480, DEFAULT_LOOK_AHEAD));
        assert_eq!(queue.total_duration(), 1440);
        // Work until 16:00, then home through the night to 08:00.
        assert_eq!(names(&queue), vec!["work", "home"]);
        assert_eq!(durations(&queue), vec![480, 960]);
    }

    #[test]
    fn fill_tops_up_existing_coverage() {
        let mut schedule = DailySchedule::new();
        schedule.push(entry("all day", 0, 1440));

        let mut queue = JobQueue::new();
        queue.push_back(job("running", 100));
        assert!(queue.fill_from_schedule(&schedule, 0, 240));
        assert_eq!(queue.total_duration(), 240);
        // The refill started at minute-of-day 100 and appended 140 minutes.
        assert_eq!(durations(&queue), vec![100, 140]);
    }

    #[test]
    fn fill_skips_gaps_minute_by_minute() {
        let mut schedule = DailySchedule::new();
        schedule.push(entry("morning", 10, 40));
        schedule.push(entry("noon", 45, 90));

        let mut queue = JobQueue::new();
        // From minute 0 the walk steps through 10 gap minutes, cuts 30 from
        // "morning", steps through 5 more, and cuts 45 from "noon".
        assert!(queue.fill_from_schedule(&schedule, 0, 75));
        assert_eq!(names(&queue), vec!["morning", "noon"]);
        assert_eq!(durations(&queue), vec![30, 45]);
    }

    #[test]
    fn fill_on_sparse_schedule_truncates_at_pass_ceiling() {
        // A single short entry: each pass appends at most 5 minutes and
        // the gap walk burns the rest of the ceiling.
        let mut schedule = DailySchedule::new();
        schedule.push(entry("brief", 0, 5));

        let mut queue = JobQueue::new();
        let filled = queue.fill_from_schedule(&schedule, 0, DEFAULT_LOOK_AHEAD);
        assert!(!filled);
        assert!(queue.total_duration() < DEFAULT_LOOK_AHEAD);
        // Termination despite the shortfall is the contract.
    }

    #[test]
    fn fill_with_sufficient_coverage_is_a_noop() {
        let mut schedule = DailySchedule::new();
        schedule.push(entry("all day", 0, 1440));

        let mut queue = JobQueue::new();
        queue.push_back(job("long", 2000));
        let before = queue.clone();
        assert!(queue.fill_from_schedule(&schedule, 0, DEFAULT_LOOK_AHEAD));
        assert_eq!(queue, before);
    }

    #[test]
    fn fill_on_empty_schedule_appends_nothing() {
        let schedule = DailySchedule::new();
        let mut queue = JobQueue::new();
        let filled = queue.fill_from_schedule(&schedule, 300, DEFAULT_LOOK_AHEAD);
        assert!(!filled);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_state_survives_a_serde_round_trip() {
        let mut queue = JobQueue::new();
        queue.push_back(job("a", 30));
        queue.push_back(job("b", 60));

        let encoded = serde_json::to_string(&queue).unwrap_or_default();
        let decoded: JobQueue = serde_json::from_str(&encoded).unwrap_or_default();
        assert_eq!(decoded, queue);
    }

    #[test]
    fn filled_jobs_are_moves_toward_the_entry_destination() {
        let mut schedule = DailySchedule::new();
        schedule.push(entry("market", 0, 1440));

        let mut queue = JobQueue::new();
        assert!(queue.fill_from_schedule(&schedule, 0, 60));
        let front = queue.current();
        assert_eq!(front.map(|j| j.kind), Some(daywheel_types::JobKind::Move));
        assert_eq!(front.map(|j| j.destination), Some(Place::new(2, 3)));
    }
}
