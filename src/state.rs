//! Application State
//!
//! The session's in-memory state: the three fetched collections and the
//! currently selected event. State is mutated only by applying fetch
//! outcomes; the view layer reads it and never writes.

use serde::Deserialize;

use crate::api::{ClientError, Event, Guest, Rsvp};

/// What to do with previously held state when a fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchFailurePolicy {
    /// Keep whatever was last successfully loaded (fail-open)
    #[default]
    KeepStale,
    /// Empty the affected slot (fail-closed)
    Clear,
}

/// In-memory session state
///
/// Collections are overwritten wholesale by successful fetches and treated
/// as immutable between them. At most one event is selected at a time.
#[derive(Debug, Default)]
pub struct AppState {
    pub events: Vec<Event>,
    pub guests: Vec<Guest>,
    pub rsvps: Vec<Rsvp>,
    pub selected: Option<Event>,

    policy: FetchFailurePolicy,
    /// Token of the most recently issued detail fetch
    latest_detail_token: u64,
}

impl AppState {
    pub fn new(policy: FetchFailurePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Apply the outcome of an event-collection fetch
    pub fn apply_events(&mut self, outcome: Result<Vec<Event>, ClientError>) {
        match outcome {
            Ok(events) => {
                tracing::debug!(count = events.len(), "Loaded events");
                self.events = events;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch events: {}", e);
                if self.policy == FetchFailurePolicy::Clear {
                    self.events.clear();
                }
            }
        }
    }

    /// Apply the outcome of a guest-collection fetch
    pub fn apply_guests(&mut self, outcome: Result<Vec<Guest>, ClientError>) {
        match outcome {
            Ok(guests) => {
                tracing::debug!(count = guests.len(), "Loaded guests");
                self.guests = guests;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch guests: {}", e);
                if self.policy == FetchFailurePolicy::Clear {
                    self.guests.clear();
                }
            }
        }
    }

    /// Apply the outcome of an RSVP-collection fetch
    pub fn apply_rsvps(&mut self, outcome: Result<Vec<Rsvp>, ClientError>) {
        match outcome {
            Ok(rsvps) => {
                tracing::debug!(count = rsvps.len(), "Loaded RSVPs");
                self.rsvps = rsvps;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch RSVPs: {}", e);
                if self.policy == FetchFailurePolicy::Clear {
                    self.rsvps.clear();
                }
            }
        }
    }

    /// Issue a token for a new detail fetch
    ///
    /// Tokens are monotonically increasing; only the outcome bearing the
    /// most recently issued token is applied, so a slow response for an
    /// earlier selection can never overwrite a later one.
    pub fn begin_detail_fetch(&mut self) -> u64 {
        self.latest_detail_token += 1;
        self.latest_detail_token
    }

    /// Apply the outcome of a single-event detail fetch
    ///
    /// Returns false if the outcome was discarded as stale.
    pub fn apply_detail(&mut self, token: u64, outcome: Result<Event, ClientError>) -> bool {
        if token != self.latest_detail_token {
            tracing::debug!(token, latest = self.latest_detail_token, "Discarding stale detail fetch");
            return false;
        }

        match outcome {
            Ok(event) => {
                tracing::debug!(event_id = event.id, "Selected event loaded");
                self.selected = Some(event);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch event: {}", e);
                if self.policy == FetchFailurePolicy::Clear {
                    self.selected = None;
                }
            }
        }
        true
    }

    /// Id of the currently selected event, if any
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|e| e.id)
    }
}
