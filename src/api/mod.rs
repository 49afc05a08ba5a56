//! Fullstack Events REST API
//!
//! Client-side bindings for the remote events service.
//!
//! # Endpoints
//!
//! - `GET {base}{cohort}/events` - All events
//! - `GET {base}{cohort}/events/{id}` - Single event
//! - `GET {base}{cohort}/guests` - All guests
//! - `GET {base}{cohort}/rsvps` - All RSVPs
//!
//! Every endpoint returns `{ "data": <payload> }` on success; any non-2xx
//! status is treated uniformly as failure regardless of body content.

pub mod client;
pub mod dto;

pub use client::{ApiClient, ApiClientConfig, ClientError};
pub use dto::{Envelope, Event, Guest, Rsvp};
