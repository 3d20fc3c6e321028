//! Ordered attendee collection.
//!
//! Insertion order is significant: the scheduler evaluates attendees in list
//! order, and the order determines which attendees get to narrow the
//! candidate set first. Names carry no uniqueness constraint.

use std::ops::{Index, IndexMut};
use std::slice;

use crate::attendee::Attendee;
use crate::error::{Result, SlotError};
use crate::records::AttendeeRecord;

/// An ordered, index-addressable sequence of [`Attendee`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendeeList {
    items: Vec<Attendee>,
}

impl AttendeeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from structured records, in record order.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInput` when a record lacks `name`,
    /// `timezone`, or `work`; per-record validation beyond that is delegated
    /// to [`Attendee::new`].
    pub fn from_records(records: &[AttendeeRecord]) -> Result<Self> {
        let mut list = Self::new();
        for record in records {
            if record.name.trim().is_empty() || record.timezone.trim().is_empty() {
                return Err(missing_fields(record));
            }
            let Some(work) = record.work.as_ref() else {
                return Err(missing_fields(record));
            };
            list.push(Attendee::new(
                record.name.as_str(),
                &record.timezone,
                work,
                &record.booked,
            )?);
        }
        Ok(list)
    }

    /// Deserialize a JSON array of attendee records and build a list from it.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInput` carrying the serde diagnostic when
    /// the text is not valid JSON for the record schema, or any error
    /// [`Self::from_records`] produces.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<AttendeeRecord> = serde_json::from_str(text)
            .map_err(|e| SlotError::InvalidInput(format!("malformed attendee JSON: {e}")))?;
        Self::from_records(&records)
    }

    pub fn push(&mut self, attendee: Attendee) {
        self.items.push(attendee);
    }

    pub fn get(&self, index: usize) -> Option<&Attendee> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Attendee> {
        self.items.get_mut(index)
    }

    /// Replace the attendee at `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds.
    pub fn set(&mut self, index: usize, attendee: Attendee) {
        self.items[index] = attendee;
    }

    /// Remove and return the attendee at `index`, shifting later entries.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Attendee {
        self.items.remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Attendee> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Attendee> {
        self.items.iter_mut()
    }
}

fn missing_fields(record: &AttendeeRecord) -> SlotError {
    SlotError::InvalidInput(format!(
        "attendee record '{}' is missing name, timezone, or working hours",
        record.name
    ))
}

impl Index<usize> for AttendeeList {
    type Output = Attendee;

    fn index(&self, index: usize) -> &Attendee {
        &self.items[index]
    }
}

impl IndexMut<usize> for AttendeeList {
    fn index_mut(&mut self, index: usize) -> &mut Attendee {
        &mut self.items[index]
    }
}

impl IntoIterator for AttendeeList {
    type Item = Attendee;
    type IntoIter = std::vec::IntoIter<Attendee>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttendeeList {
    type Item = &'a Attendee;
    type IntoIter = slice::Iter<'a, Attendee>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Attendee> for AttendeeList {
    fn from_iter<I: IntoIterator<Item = Attendee>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
