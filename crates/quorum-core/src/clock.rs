//! Wall-clock parsing and DST-transition resolution.
//!
//! `chrono` maps a local datetime onto zero, one, or two instants depending on
//! whether it falls inside a spring-forward gap, plain time, or a fall-back
//! overlap. Every wall-clock interpretation in this crate goes through
//! [`resolve_local`] so attendee construction, timezone reprojection, and
//! working-window evaluation agree on the policy: ambiguous times take the
//! earlier instant, gap times shift forward by one hour.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Input format for booked intervals and search-window bounds.
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Resolve a local wall-clock datetime to a single instant in `tz`.
///
/// Returns `None` only when the time falls in a DST gap and the shifted time
/// one hour later is itself unmappable, which no real tzdata zone produces.
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => tz
            .from_local_datetime(&(local + Duration::hours(1)))
            .earliest(),
    }
}

/// Parse a `"YYYY-MM-DD HH:MM"` wall-clock string as an instant in `tz`.
///
/// Single-digit hours are accepted (`"2014-08-01 9:30"`).
///
/// # Errors
/// Returns `SlotError::InvalidInput` when the string does not match the
/// format or cannot be mapped onto an instant in `tz`.
pub fn parse_wall_clock(tz: Tz, value: &str) -> Result<DateTime<Tz>> {
    let local = NaiveDateTime::parse_from_str(value.trim(), WALL_CLOCK_FORMAT)
        .map_err(|e| SlotError::InvalidInput(format!("invalid date-time '{value}': {e}")))?;
    resolve_local(tz, local)
        .ok_or_else(|| SlotError::InvalidInput(format!("'{value}' has no instant in {tz}")))
}
