//! # quorum-core
//!
//! Timezone-aware search for meeting slots that work for every attendee.
//!
//! Each attendee brings their own IANA timezone, daily working hours, and a
//! list of already-booked intervals. The scheduler samples a caller-supplied
//! time window on a fixed grid, evaluates every attendee against every
//! surviving candidate, and returns up to N start times where everyone is
//! free — or, when no such time exists, the single candidate that maximizes
//! participation.
//!
//! ## Quick start
//!
//! ```rust
//! use quorum_core::{Attendee, AttendeeList, HoursRecord, Scheduler};
//!
//! let mut attendees = AttendeeList::new();
//! attendees.push(
//!     Attendee::new("John Doe", "UTC", &HoursRecord::new("8:00", "16:00"), &[]).unwrap(),
//! );
//!
//! let scheduler = Scheduler::new(chrono_tz::UTC);
//! let outcome = scheduler
//!     .find_available_slots(&mut attendees, 60, 3, "2014-08-01 08:00", "2014-08-01 16:00")
//!     .unwrap();
//! assert!(outcome.message.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`attendee`] — availability profile: timezone, working hours, bookings
//! - [`roster`] — ordered attendee collection with JSON/record construction
//! - [`scheduler`] — candidate-grid search and best-effort fallback ranking
//! - [`records`] — serde types for the attendee input schema
//! - [`clock`] — wall-clock parsing and DST-transition resolution
//! - [`error`] — error types

pub mod attendee;
pub mod clock;
pub mod error;
pub mod records;
pub mod roster;
pub mod scheduler;

pub use attendee::{Attendee, BookedSlot, WorkingHours};
pub use error::SlotError;
pub use records::{AttendeeRecord, HoursRecord, IntervalRecord};
pub use roster::AttendeeList;
pub use scheduler::{
    FallbackSlot, ScheduleData, ScheduleOutcome, Scheduler, MSG_NOT_FOR_ANYONE,
    MSG_NOT_WITH_EVERYONE,
};
