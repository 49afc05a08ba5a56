//! # Lineup
//!
//! Terminal client for the Fullstack Events API - browse events, guests,
//! and RSVPs as a list/detail view.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client and wire types for the remote REST API
//! - [`state`]: the in-memory session state and fetch-failure policy
//! - [`attendance`]: the RSVP-to-guest join
//! - [`view`]: pure display-tree builders and the terminal renderer
//! - [`app`]: the interactive list/detail loop
//! - [`config`]: TOML/env configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lineup::api::{ApiClient, ApiClientConfig};
//! use lineup::attendance;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiClientConfig::default())?;
//!
//!     let (event, guests, rsvps) = tokio::join!(
//!         client.fetch_event(1),
//!         client.fetch_guests(),
//!         client.fetch_rsvps(),
//!     );
//!     let (event, guests, rsvps) = (event?, guests?, rsvps?);
//!
//!     let attending = attendance::resolve(Some(event.id), &guests, &rsvps);
//!     println!("{} guests attending {}", attending.len(), event.name);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod attendance;
pub mod config;
pub mod state;
pub mod view;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiClientConfig, ClientError, Event, Guest, Rsvp};
pub use app::App;
pub use config::{Config, ConfigError, LoggingConfig};
pub use state::{AppState, FetchFailurePolicy};
pub use view::Node;
