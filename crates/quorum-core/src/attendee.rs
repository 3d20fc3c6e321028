//! Attendee availability profile: timezone, working hours, booked intervals.
//!
//! An [`Attendee`] is created once per scheduling input in their home
//! timezone. Booked intervals are parsed as wall-clock times in that zone and
//! carried as absolute instants from then on — re-projecting the attendee into
//! another timezone changes only how those instants read on a clock, never the
//! points in time themselves. Working hours are wall-clock bounds with no date
//! component; they are re-interpreted on each calendar day the scheduler
//! evaluates.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::clock;
use crate::error::{Result, SlotError};
use crate::records::{HoursRecord, IntervalRecord};

/// Daily working hours, wall-clock in the attendee's current timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl WorkingHours {
    fn parse(record: &HoursRecord) -> Result<Self> {
        let (Some(from), Some(to)) = (present(&record.from), present(&record.to)) else {
            return Err(SlotError::InvalidInput(
                "missing working hours bounds".to_string(),
            ));
        };
        let from = parse_clock_time(from)?;
        let to = parse_clock_time(to)?;
        if from >= to {
            return Err(SlotError::InvalidInput(format!(
                "working hours start {from} must precede end {to}"
            )));
        }
        Ok(Self { from, to })
    }
}

/// A booked interval as a pair of absolute instants.
///
/// The instants are displayed in the attendee's current timezone; timezone
/// re-projection rewrites the display offset without moving them.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedSlot {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
}

/// One person's availability profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    name: String,
    /// Timezone the attendee was created in; never changes.
    home_tz: Tz,
    /// Working timezone; changed only by [`Attendee::reproject_to`].
    current_tz: Tz,
    working_hours: WorkingHours,
    booked: Vec<BookedSlot>,
}

impl Attendee {
    /// Build an attendee from raw record fields.
    ///
    /// Booked records with a missing or empty `from`/`to` are silently
    /// dropped, matching the input contract for partially-filled calendars.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInput` when `timezone` is not a recognized
    /// IANA identifier, when a working-hours bound is missing, empty, or
    /// unparseable, when the bounds are not in order, or when a present
    /// booked-interval bound fails to parse.
    pub fn new(
        name: impl Into<String>,
        timezone: &str,
        hours: &HoursRecord,
        booked: &[IntervalRecord],
    ) -> Result<Self> {
        let tz: Tz = timezone.parse().map_err(|_| {
            SlotError::InvalidInput(format!("unrecognized timezone: {timezone}"))
        })?;
        let working_hours = WorkingHours::parse(hours)?;

        let mut slots = Vec::new();
        for interval in booked {
            let (Some(from), Some(to)) = (present(&interval.from), present(&interval.to)) else {
                continue;
            };
            slots.push(BookedSlot {
                from: clock::parse_wall_clock(tz, from)?,
                to: clock::parse_wall_clock(tz, to)?,
            });
        }

        Ok(Self {
            name: name.into(),
            home_tz: tz,
            current_tz: tz,
            working_hours,
            booked: slots,
        })
    }

    /// Re-project the attendee into `new_tz`.
    ///
    /// Working-hour bounds are converted wall-clock-to-wall-clock anchored to
    /// `anchor` (the calendar date the caller is evaluating, so the offsets in
    /// play match the ones used during slot evaluation). Booked intervals keep
    /// their absolute instants and only change display zone. A no-op when the
    /// attendee already works in `new_tz`; idempotent either way.
    pub fn reproject_to(&mut self, new_tz: Tz, anchor: NaiveDate) {
        if new_tz == self.current_tz {
            return;
        }

        let from = convert_clock_bound(self.current_tz, new_tz, anchor, self.working_hours.from);
        let to = convert_clock_bound(self.current_tz, new_tz, anchor, self.working_hours.to);
        self.working_hours = WorkingHours { from, to };

        for slot in &mut self.booked {
            slot.from = slot.from.with_timezone(&new_tz);
            slot.to = slot.to.with_timezone(&new_tz);
        }

        self.current_tz = new_tz;
    }

    /// The attendee's working window on the given calendar day, as instants in
    /// their current timezone. `None` when a bound cannot be resolved.
    pub fn working_window_on(&self, date: NaiveDate) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let start = clock::resolve_local(self.current_tz, date.and_time(self.working_hours.from))?;
        let end = clock::resolve_local(self.current_tz, date.and_time(self.working_hours.to))?;
        Some((start, end))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Timezone captured at creation.
    pub fn home_timezone(&self) -> Tz {
        self.home_tz
    }

    /// Timezone the attendee is currently projected into.
    pub fn current_timezone(&self) -> Tz {
        self.current_tz
    }

    pub fn working_hours(&self) -> WorkingHours {
        self.working_hours
    }

    pub fn booked_slots(&self) -> &[BookedSlot] {
        &self.booked
    }
}

/// A present, non-empty string field — absent and `""` are equivalent.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_clock_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| SlotError::InvalidInput(format!("invalid working hours '{value}': {e}")))
}

/// Convert a wall-clock bound between zones, anchored to a concrete date so a
/// definite UTC offset applies on each side. A bound inside a DST gap keeps
/// its wall-clock reading.
fn convert_clock_bound(from_tz: Tz, to_tz: Tz, anchor: NaiveDate, time: NaiveTime) -> NaiveTime {
    match clock::resolve_local(from_tz, anchor.and_time(time)) {
        Some(instant) => instant.with_timezone(&to_tz).time(),
        None => time,
    }
}
