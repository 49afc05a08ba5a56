//! View Layer
//!
//! Pure state-in, display-tree-out rendering. [`pages`] builds [`node::Node`]
//! trees from application state; [`text`] flattens a tree for the terminal.
//! Nothing in this module performs network access or mutates state.

pub mod node;
pub mod pages;
pub mod text;

pub use node::Node;
pub use pages::{event_details, event_list, format_date, page};
pub use text::render;
