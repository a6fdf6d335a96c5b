use crate::slots::models::BusyPeriod;
use chrono::DateTime;
use chrono_tz::Tz;

/// Test whether a candidate slot `[slot_start, slot_end)` is free of events.
///
/// Intervals are half-open: an event ending exactly at the slot start, or
/// starting exactly at the slot end, does not conflict. Short-circuits on
/// the first conflicting event.
pub fn is_slot_free(slot_start: DateTime<Tz>, slot_end: DateTime<Tz>, busy: &[BusyPeriod]) -> bool {
    busy.iter()
        .all(|period| period.end <= slot_start || period.start >= slot_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::time::{localize, resolve_timezone};
    use chrono::{NaiveDate, NaiveTime};
    use chrono_tz::Tz;

    fn lagos() -> Tz {
        resolve_timezone("Africa/Lagos").unwrap()
    }

    fn instant(hour: u32, minute: u32) -> DateTime<Tz> {
        let naive = NaiveDate::from_ymd_opt(2023, 11, 10)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
        localize(lagos(), naive).unwrap()
    }

    fn busy(start: DateTime<Tz>, end: DateTime<Tz>) -> BusyPeriod {
        BusyPeriod { start, end }
    }

    #[test]
    fn test_empty_event_list_is_free() {
        assert!(is_slot_free(instant(9, 0), instant(12, 0), &[]));
    }

    #[test]
    fn test_event_inside_slot_conflicts() {
        let events = [busy(instant(10, 0), instant(11, 0))];
        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &events));
    }

    #[test]
    fn test_event_containing_slot_conflicts() {
        let events = [busy(instant(8, 0), instant(13, 0))];
        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &events));
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        // Overlaps the start of the slot
        let events = [busy(instant(8, 0), instant(9, 30))];
        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &events));

        // Overlaps the end of the slot
        let events = [busy(instant(11, 30), instant(13, 0))];
        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &events));
    }

    #[test]
    fn test_boundary_touching_is_free() {
        // Event ends exactly when the slot starts
        let events = [busy(instant(8, 0), instant(9, 0))];
        assert!(is_slot_free(instant(9, 0), instant(12, 0), &events));

        // Event starts exactly when the slot ends
        let events = [busy(instant(12, 0), instant(13, 0))];
        assert!(is_slot_free(instant(9, 0), instant(12, 0), &events));
    }

    #[test]
    fn test_disjoint_events_leave_slot_free() {
        let events = [
            busy(instant(6, 0), instant(7, 30)),
            busy(instant(13, 0), instant(14, 0)),
        ];
        assert!(is_slot_free(instant(9, 0), instant(12, 0), &events));
    }

    #[test]
    fn test_event_order_does_not_change_verdict() {
        let first = busy(instant(6, 0), instant(7, 0));
        let second = busy(instant(10, 0), instant(11, 0));

        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &[first, second]));
        assert!(!is_slot_free(instant(9, 0), instant(12, 0), &[second, first]));
    }
}
