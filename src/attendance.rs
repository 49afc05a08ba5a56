//! Attendance Resolution
//!
//! Joins RSVP records to guest records to answer "who is attending this
//! event?".

use std::collections::HashSet;

use crate::api::{Guest, Rsvp};

/// Resolve the guests attending the given event
///
/// Two passes: collect the attending guest ids from the RSVPs, then filter
/// the guest collection by membership. O(R + G) rather than the O(R * G) a
/// nested scan would cost. The result preserves guest-collection order; a
/// guest with several RSVPs to the same event appears once; RSVPs pointing
/// at unknown guests are dropped silently.
pub fn resolve<'a>(event_id: Option<i64>, guests: &'a [Guest], rsvps: &[Rsvp]) -> Vec<&'a Guest> {
    let Some(event_id) = event_id else {
        return Vec::new();
    };

    let attending: HashSet<i64> = rsvps
        .iter()
        .filter(|r| r.event_id == event_id)
        .map(|r| r.guest_id)
        .collect();

    guests.iter().filter(|g| attending.contains(&g.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: i64, name: &str, email: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn rsvp(event_id: i64, guest_id: i64) -> Rsvp {
        Rsvp { event_id, guest_id }
    }

    fn fixture_guests() -> Vec<Guest> {
        vec![
            guest(10, "Ann", "a@x.com"),
            guest(11, "Bo", "b@x.com"),
        ]
    }

    #[test]
    fn test_no_selection_yields_empty() {
        let guests = fixture_guests();
        let rsvps = vec![rsvp(1, 10)];
        assert!(resolve(None, &guests, &rsvps).is_empty());
    }

    #[test]
    fn test_matching_rsvp_resolves_guest() {
        let guests = fixture_guests();
        let rsvps = vec![rsvp(1, 10)];

        let attendance = resolve(Some(1), &guests, &rsvps);
        assert_eq!(attendance.len(), 1);
        assert_eq!(attendance[0].id, 10);
        assert_eq!(attendance[0].name, "Ann");
        assert_eq!(attendance[0].email, "a@x.com");
    }

    #[test]
    fn test_unreferenced_event_yields_empty() {
        let guests = fixture_guests();
        let rsvps = vec![rsvp(1, 10)];
        assert!(resolve(Some(2), &guests, &rsvps).is_empty());
    }

    #[test]
    fn test_empty_rsvps_yields_empty() {
        let guests = fixture_guests();
        assert!(resolve(Some(1), &guests, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_rsvps_resolve_once() {
        let guests = fixture_guests();
        let rsvps = vec![rsvp(1, 10), rsvp(1, 10)];

        let attendance = resolve(Some(1), &guests, &rsvps);
        assert_eq!(attendance.len(), 1);
    }

    #[test]
    fn test_dangling_guest_reference_is_dropped() {
        let guests = fixture_guests();
        let rsvps = vec![rsvp(1, 10), rsvp(1, 999)];

        let attendance = resolve(Some(1), &guests, &rsvps);
        assert_eq!(attendance.len(), 1);
        assert_eq!(attendance[0].id, 10);
    }

    #[test]
    fn test_guest_collection_order_is_preserved() {
        let guests = fixture_guests();
        // RSVP order reversed relative to the guest collection
        let rsvps = vec![rsvp(1, 11), rsvp(1, 10)];

        let attendance = resolve(Some(1), &guests, &rsvps);
        let ids: Vec<i64> = attendance.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_attendance_is_subset_backed_by_rsvps() {
        let guests = vec![
            guest(10, "Ann", "a@x.com"),
            guest(11, "Bo", "b@x.com"),
            guest(12, "Cy", "c@x.com"),
        ];
        let rsvps = vec![rsvp(1, 10), rsvp(1, 12), rsvp(2, 11)];

        let attendance = resolve(Some(1), &guests, &rsvps);
        for g in &attendance {
            assert!(guests.iter().any(|known| known.id == g.id));
            assert!(rsvps
                .iter()
                .any(|r| r.event_id == 1 && r.guest_id == g.id));
        }
        assert_eq!(attendance.len(), 2);
    }
}
