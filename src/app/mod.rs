//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain,
//! geocoding and map layers. It never talks to Zellij itself.
//!
//! # Architecture
//!
//! ```text
//! Keys / Timer / WebRequestResult → Events → handle_event → State Mutations → Actions
//!                  ↑                                                            ↓
//!                  └────────── web_request / set_timeout / hide_self ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
