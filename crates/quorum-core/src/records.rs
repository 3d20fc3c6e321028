//! Serde types for the attendee input schema.
//!
//! The wire shape is a JSON array of records:
//!
//! ```json
//! [ { "name": "John Doe",
//!     "timezone": "Europe/Warsaw",
//!     "work": { "from": "8:00", "to": "16:00" },
//!     "booked": [ { "from": "2014-08-01 09:00", "to": "2014-08-01 10:00" } ] } ]
//! ```
//!
//! Fields are deserialized leniently — anything absent comes through empty or
//! `None` — and validated by [`AttendeeList::from_records`] and
//! [`Attendee::new`] so missing-field diagnostics are uniform regardless of
//! whether records arrive from JSON or are built in code.
//!
//! [`AttendeeList::from_records`]: crate::roster::AttendeeList::from_records
//! [`Attendee::new`]: crate::attendee::Attendee::new

use serde::{Deserialize, Serialize};

/// One attendee as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AttendeeRecord {
    #[serde(default)]
    pub name: String,
    /// IANA timezone identifier, e.g. `"America/New_York"`.
    #[serde(default)]
    pub timezone: String,
    /// Daily working hours as wall-clock `"H:MM"` bounds.
    #[serde(default)]
    pub work: Option<HoursRecord>,
    /// Already-booked intervals; defaults to none.
    #[serde(default)]
    pub booked: Vec<IntervalRecord>,
}

/// Working-hours bounds, wall-clock `"H:MM"` with no date component.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HoursRecord {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl HoursRecord {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }
}

/// A booked interval as wall-clock `"YYYY-MM-DD HH:MM"` bounds.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IntervalRecord {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl IntervalRecord {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }
}
