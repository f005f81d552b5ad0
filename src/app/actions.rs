//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij directly. It returns a `Vec<Action>`
//! and the runtime (`main.rs`) executes each one in order: geocoding requests
//! go out through `web_request`, frame timers through `set_timeout`.
//!
//! # Example
//!
//! ```rust
//! use zelmap::app::Action;
//! use zelmap::map::FRAME_INTERVAL_SECS;
//!
//! let action = Action::ScheduleFrame { seconds: FRAME_INTERVAL_SECS };
//! assert_ne!(action, Action::CloseFocus);
//! ```

use crate::geocoding::GeocodeRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a geocoding request.
    ///
    /// The request's sequence number travels in the `web_request` context
    /// and comes back with the response.
    Geocode(GeocodeRequest),

    /// Asks for a timer tick after `seconds`, to advance the viewport
    /// animation by one frame.
    ScheduleFrame {
        /// Delay before the tick.
        seconds: f64,
    },
}
