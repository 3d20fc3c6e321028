//! Property-based tests for the slot search using proptest.
//!
//! These verify invariants that should hold for *any* valid input, not just
//! the hand-picked examples in `scheduler_tests.rs`.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use quorum_core::{Attendee, AttendeeList, HoursRecord, IntervalRecord, ScheduleData, Scheduler};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A meeting length that keeps every candidate inside a 00:00–23:59 workday
/// for the window ranges generated below.
fn arb_meeting_length() -> impl Strategy<Value = i64> {
    1i64..=120
}

fn arb_max_results() -> impl Strategy<Value = usize> {
    1usize..=10
}

/// Window start hour and span in hours, kept inside one calendar day.
fn arb_window() -> impl Strategy<Value = (u32, u32)> {
    (0u32..8, 1u32..=8)
}

/// Bookings as (start hour, duration hours) pairs inside the workday.
fn arb_bookings() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((8u32..15, 1u32..=2), 0..4)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn all_day_attendee() -> Attendee {
    Attendee::new("Free", "UTC", &HoursRecord::new("0:00", "23:59"), &[]).unwrap()
}

fn booked_attendee(bookings: &[(u32, u32)]) -> Attendee {
    let booked: Vec<IntervalRecord> = bookings
        .iter()
        .map(|&(hour, span)| {
            IntervalRecord::new(
                &format!("2014-08-01 {hour:02}:00"),
                &format!("2014-08-01 {:02}:00", hour + span),
            )
        })
        .collect();
    Attendee::new("Busy", "UTC", &HoursRecord::new("8:00", "17:00"), &booked).unwrap()
}

fn window_bounds(start_hour: u32, span_hours: u32) -> (String, String) {
    (
        format!("2014-08-01 {start_hour:02}:00"),
        format!("2014-08-01 {:02}:00", start_hour + span_hours),
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// An unbooked attendee whose working hours cover the window makes every
    /// grid point available; the results are exactly the first
    /// `max_results` grid instants, each on the sampling grid and inside the
    /// window.
    #[test]
    fn returned_starts_lie_on_the_sampling_grid(
        length in arb_meeting_length(),
        max_results in arb_max_results(),
        (start_hour, span_hours) in arb_window(),
    ) {
        let mut attendees: AttendeeList = [all_day_attendee()].into_iter().collect();
        let (from, to) = window_bounds(start_hour, span_hours);

        let outcome = Scheduler::new(chrono_tz::UTC)
            .find_available_slots(&mut attendees, length, max_results, &from, &to)
            .unwrap();

        let step = length.min(30);
        let span_minutes = i64::from(span_hours) * 60;
        let grid_len = (span_minutes + step - 1) / step;
        let window_start = Utc
            .with_ymd_and_hms(2014, 8, 1, start_hour, 0, 0)
            .unwrap();
        let window_end = window_start + chrono::Duration::minutes(span_minutes);

        let slots = match outcome.data {
            Some(ScheduleData::Slots(slots)) => slots,
            other => {
                prop_assert!(false, "expected available slots, got {:?}", other);
                unreachable!()
            }
        };
        prop_assert_eq!(slots.len(), usize::try_from(grid_len).unwrap().min(max_results));
        for slot in &slots {
            let instant = slot.with_timezone(&Utc);
            prop_assert!(instant >= window_start && instant < window_end);
            let offset = instant.signed_duration_since(window_start).num_minutes();
            prop_assert_eq!(offset % step, 0);
        }
    }

    /// The same inputs through freshly-built state produce identical output,
    /// and re-running against the already-evaluated (re-projected) list
    /// changes nothing.
    #[test]
    fn search_is_deterministic(
        length in arb_meeting_length(),
        max_results in arb_max_results(),
        bookings in arb_bookings(),
    ) {
        let scheduler = Scheduler::new(chrono_tz::UTC);
        let mut first_list: AttendeeList =
            [booked_attendee(&bookings), all_day_attendee()].into_iter().collect();
        let mut second_list = first_list.clone();

        let first = scheduler
            .find_available_slots(&mut first_list, length, max_results,
                "2014-08-01 08:00", "2014-08-01 16:00")
            .unwrap();
        let second = scheduler
            .find_available_slots(&mut second_list, length, max_results,
                "2014-08-01 08:00", "2014-08-01 16:00")
            .unwrap();
        let rerun = scheduler
            .find_available_slots(&mut first_list, length, max_results,
                "2014-08-01 08:00", "2014-08-01 16:00")
            .unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &rerun);
    }

    /// An attendee who can never meet forces a fallback no matter what later
    /// attendees look like: once the available bucket empties it stays empty.
    #[test]
    fn exhausted_candidates_never_come_back(
        length in arb_meeting_length(),
        max_results in arb_max_results(),
        bookings in arb_bookings(),
    ) {
        let blocker =
            Attendee::new("Blocker", "UTC", &HoursRecord::new("22:00", "23:00"), &[]).unwrap();
        let mut attendees: AttendeeList =
            [blocker, booked_attendee(&bookings), all_day_attendee()].into_iter().collect();

        let outcome = Scheduler::new(chrono_tz::UTC)
            .find_available_slots(&mut attendees, length, max_results,
                "2014-08-01 08:00", "2014-08-01 16:00")
            .unwrap();

        prop_assert!(outcome.message.is_some());
        let resurrected = matches!(outcome.data, Some(ScheduleData::Slots(_)));
        prop_assert!(!resurrected, "no slot may survive a universal blocker");
    }
}
