//! Candidate-grid slot search with best-effort fallback ranking.
//!
//! The search window is sampled on a fixed grid (every 30 minutes, or the
//! meeting length when shorter). Attendees are evaluated strictly in list
//! order against a shrinking candidate set: once any attendee cannot make a
//! slot, the slot moves to an "unavailable" bucket and never returns, and
//! later attendees only ever see the instants already on the table. When the
//! available set runs dry mid-pass, the remaining attendees are still scored
//! against the demoted instants so the fallback can report the slot with the
//! highest participation.
//!
//! Bucket state lives only for one [`Scheduler::find_available_slots`] call —
//! the scheduler itself carries configuration only and is safe to reuse.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

use crate::attendee::Attendee;
use crate::clock;
use crate::error::{Result, SlotError};
use crate::roster::AttendeeList;

/// Default candidate-grid granularity in minutes.
pub const DEFAULT_SAMPLING_INTERVAL_MINUTES: i64 = 30;

/// Returned when the best fallback slot suits nobody at all.
pub const MSG_NOT_FOR_ANYONE: &str = "not possible to arrange meeting for anyone";

/// Returned with the fallback slot when no candidate suits every attendee.
pub const MSG_NOT_WITH_EVERYONE: &str = "not possible to arrange meeting with everyone";

/// Slot-search configuration. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct Scheduler {
    reference_tz: Tz,
    sampling_interval_minutes: i64,
}

/// The result of one slot search.
///
/// Either `message` is `None` and `data` holds the available start times, or
/// `message` explains why no fully-shared slot exists and `data` holds the
/// best-effort fallback (or nothing when not even a partial match exists).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    pub message: Option<String>,
    pub data: Option<ScheduleData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScheduleData {
    /// Start times where every attendee is free, earliest first.
    Slots(Vec<DateTime<Tz>>),
    /// The candidate with the highest participation.
    Fallback(FallbackSlot),
}

/// Best-effort partial match: who can and cannot make the slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackSlot {
    pub slot: DateTime<Tz>,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
    pub participants: usize,
}

/// Per-candidate tally, keyed by start instant. Attendees are recorded by
/// list index so the one-time timezone reprojection stays visible through
/// every bucket that mentions them.
#[derive(Debug, Clone)]
struct SlotBucket {
    slot: DateTime<Tz>,
    available: Vec<usize>,
    unavailable: Vec<usize>,
    participants: usize,
}

/// Bucket state for a single search invocation.
///
/// Both maps iterate in chronological key order, which is also insertion
/// order since candidates are generated and evaluated earliest-first.
#[derive(Debug, Default)]
struct BucketArena {
    available: BTreeMap<DateTime<Tz>, SlotBucket>,
    unavailable: BTreeMap<DateTime<Tz>, SlotBucket>,
}

impl BucketArena {
    /// The instants the next attendee must be evaluated against: the
    /// still-available candidates while any remain, otherwise the demoted
    /// ones, otherwise (first attendee only) nothing recorded yet.
    fn working_set(&self) -> Option<Vec<DateTime<Tz>>> {
        if !self.available.is_empty() {
            Some(self.available.keys().cloned().collect())
        } else if !self.unavailable.is_empty() {
            Some(self.unavailable.keys().cloned().collect())
        } else {
            None
        }
    }

    /// Record one attendee's verdict for one candidate instant.
    fn record(&mut self, slot: DateTime<Tz>, attendee: usize, is_available: bool) {
        if !self.available.contains_key(&slot) && !self.unavailable.contains_key(&slot) {
            self.available.insert(
                slot.clone(),
                SlotBucket {
                    slot: slot.clone(),
                    available: Vec::new(),
                    unavailable: Vec::new(),
                    participants: 0,
                },
            );
        }

        if is_available {
            // A slot already demoted stays demoted; the attendee still counts
            // toward its participation score.
            if let Some(bucket) = self.unavailable.get_mut(&slot) {
                bucket.available.push(attendee);
                bucket.participants += 1;
            } else if let Some(bucket) = self.available.get_mut(&slot) {
                bucket.available.push(attendee);
                bucket.participants += 1;
            }
        } else {
            // First offending attendee moves the whole entry across.
            if let Some(bucket) = self.available.remove(&slot) {
                self.unavailable.insert(slot.clone(), bucket);
            }
            if let Some(bucket) = self.unavailable.get_mut(&slot) {
                bucket.unavailable.push(attendee);
            }
        }
    }

    /// Earliest demoted candidate with the highest participation; on ties the
    /// first one encountered wins.
    fn best_fallback(&self) -> Option<&SlotBucket> {
        let mut best: Option<&SlotBucket> = None;
        for bucket in self.unavailable.values() {
            match best {
                Some(current) if bucket.participants <= current.participants => {}
                _ => best = Some(bucket),
            }
        }
        best
    }
}

impl Scheduler {
    /// A scheduler evaluating in the given reference timezone.
    ///
    /// The reference timezone is always explicit; window bounds are parsed in
    /// it and every attendee is projected into it before evaluation.
    pub fn new(reference_tz: Tz) -> Self {
        Self {
            reference_tz,
            sampling_interval_minutes: DEFAULT_SAMPLING_INTERVAL_MINUTES,
        }
    }

    /// Override the candidate-grid granularity in minutes.
    pub fn with_sampling_interval(mut self, minutes: i64) -> Self {
        self.sampling_interval_minutes = minutes.max(1);
        self
    }

    pub fn reference_timezone(&self) -> Tz {
        self.reference_tz
    }

    /// Find up to `max_results` start times inside the window where every
    /// attendee is free, or the best-effort partial match when none exists.
    ///
    /// `window_start`/`window_end` are `"YYYY-MM-DD HH:MM"` wall-clock
    /// strings in the reference timezone; the end is exclusive. Attendees
    /// whose current timezone differs from the reference are re-projected
    /// into it (a visible, one-time mutation), anchored to the window-start
    /// date.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInput` — before any evaluation work — when
    /// a window bound fails to parse, the window is inverted, `max_results`
    /// is zero, or `meeting_length_minutes` is below one minute.
    pub fn find_available_slots(
        &self,
        attendees: &mut AttendeeList,
        meeting_length_minutes: i64,
        max_results: usize,
        window_start: &str,
        window_end: &str,
    ) -> Result<ScheduleOutcome> {
        let start = clock::parse_wall_clock(self.reference_tz, window_start)?;
        let end = clock::parse_wall_clock(self.reference_tz, window_end)?;

        if start > end {
            return Err(SlotError::InvalidInput(
                "window start after window end".to_string(),
            ));
        }
        if max_results < 1 {
            return Err(SlotError::InvalidInput(
                "at least one result slot required".to_string(),
            ));
        }
        if meeting_length_minutes < 1 {
            return Err(SlotError::InvalidInput(
                "meeting must be at least one minute".to_string(),
            ));
        }

        let step = Duration::minutes(self.sampling_interval_minutes.min(meeting_length_minutes));
        let meeting_length = Duration::minutes(meeting_length_minutes);
        let anchor = start.date_naive();

        let grid = candidate_grid(&start, &end, step);
        let mut arena = BucketArena::default();

        for index in 0..attendees.len() {
            let working_set = arena.working_set().unwrap_or_else(|| grid.clone());

            if attendees[index].current_timezone() != self.reference_tz {
                attendees[index].reproject_to(self.reference_tz, anchor);
            }

            let attendee = &attendees[index];
            for slot in working_set {
                let free = attendee_is_available(attendee, &slot, meeting_length);
                arena.record(slot, index, free);
            }
        }

        Ok(assemble_outcome(arena, max_results, attendees))
    }
}

/// The instants `start, start+step, …`, exclusive of `end`.
fn candidate_grid(start: &DateTime<Tz>, end: &DateTime<Tz>, step: Duration) -> Vec<DateTime<Tz>> {
    let mut grid = Vec::new();
    let mut cursor = start.clone();
    while cursor < *end {
        grid.push(cursor.clone());
        cursor = cursor + step;
    }
    grid
}

/// Whether a meeting `[start, start + length)` fits the attendee: inside
/// their working window on the slot's calendar day and clear of every booked
/// interval.
fn attendee_is_available(
    attendee: &Attendee,
    start: &DateTime<Tz>,
    meeting_length: Duration,
) -> bool {
    let end = start.clone() + meeting_length;

    let day = start
        .with_timezone(&attendee.current_timezone())
        .date_naive();
    let Some((work_start, work_end)) = attendee.working_window_on(day) else {
        return false;
    };
    if *start < work_start || end > work_end {
        return false;
    }

    !attendee
        .booked_slots()
        .iter()
        .any(|slot| intersects(start, &end, &slot.from, &slot.to))
}

/// Interval intersection with boundaries inclusive on both outer ends: a
/// meeting ending exactly when a booking starts, or starting exactly when one
/// ends, does not intersect.
fn intersects(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    booked_from: &DateTime<Tz>,
    booked_to: &DateTime<Tz>,
) -> bool {
    (booked_from >= start && booked_from < end)
        || (booked_to > start && booked_to <= end)
        || (start >= booked_from && start < booked_to)
        || (end > booked_from && end <= booked_to)
}

fn assemble_outcome(
    arena: BucketArena,
    max_results: usize,
    attendees: &AttendeeList,
) -> ScheduleOutcome {
    if arena.available.is_empty() {
        return match arena.best_fallback() {
            Some(bucket) if bucket.participants > 0 => ScheduleOutcome {
                message: Some(MSG_NOT_WITH_EVERYONE.to_string()),
                data: Some(ScheduleData::Fallback(FallbackSlot {
                    slot: bucket.slot.clone(),
                    available: names(&bucket.available, attendees),
                    unavailable: names(&bucket.unavailable, attendees),
                    participants: bucket.participants,
                })),
            },
            _ => ScheduleOutcome {
                message: Some(MSG_NOT_FOR_ANYONE.to_string()),
                data: None,
            },
        };
    }

    let slots: Vec<DateTime<Tz>> = arena
        .available
        .into_values()
        .take(max_results)
        .map(|bucket| bucket.slot)
        .collect();
    ScheduleOutcome {
        message: None,
        data: Some(ScheduleData::Slots(slots)),
    }
}

fn names(indices: &[usize], attendees: &AttendeeList) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&index| attendees.get(index))
        .map(|attendee| attendee.name().to_string())
        .collect()
}
