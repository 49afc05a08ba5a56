//! Page Builders
//!
//! Pure projections of application state into display trees. No network
//! access, no mutation; calling a builder twice with unchanged state
//! yields equal trees.

use chrono::{DateTime, NaiveDate};

use crate::api::{Event, Guest};
use crate::attendance;
use crate::state::AppState;
use crate::view::node::Node;

/// Numbered list of all events; the number is the selection affordance
pub fn event_list(events: &[Event]) -> Node {
    if events.is_empty() {
        return Node::text("No events loaded.");
    }

    Node::List(
        events
            .iter()
            .enumerate()
            .map(|(i, event)| Node::text(format!("[{}] {}", i + 1, event.name)))
            .collect(),
    )
}

/// Detail block for the selected event, or a prompt when nothing is selected
pub fn event_details(selected: Option<&Event>, attendance: &[&Guest]) -> Node {
    let Some(event) = selected else {
        return Node::text("Please select an event to learn more.");
    };

    Node::Section {
        title: String::new(),
        children: vec![
            Node::heading(3, event.name.clone()),
            Node::text(event.description.clone()),
            Node::field("ID", event.id.to_string()),
            Node::field("Date", format_date(&event.date)),
            Node::field("Location", event.location.clone()),
            attendance_list(attendance),
        ],
    }
}

fn attendance_list(attendance: &[&Guest]) -> Node {
    if attendance.is_empty() {
        return Node::section("Attendance", vec![Node::text("No attendees yet.")]);
    }

    Node::section(
        "Attendance",
        vec![Node::List(
            attendance
                .iter()
                .map(|g| Node::field(g.name.clone(), g.email.clone()))
                .collect(),
        )],
    )
}

/// The full page, rebuilt from state on every call
///
/// Attendance is resolved on demand here, during render, from the current
/// collections and selection.
pub fn page(state: &AppState) -> Node {
    let attendance = attendance::resolve(state.selected_id(), &state.guests, &state.rsvps);

    Node::Section {
        title: String::new(),
        children: vec![
            Node::heading(1, "Fullstack Events"),
            Node::section("Lineup", vec![event_list(&state.events)]),
            Node::section(
                "Event Details",
                vec![event_details(state.selected.as_ref(), &attendance)],
            ),
        ],
    }
}

/// Format an ISO-ish date for display
///
/// Accepts RFC 3339 timestamps or bare dates; anything unparseable passes
/// through verbatim rather than erroring.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%a, %b %-d, %Y, %I:%M %p").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%a, %b %-d, %Y").to_string();
    }
    raw.to_string()
}
