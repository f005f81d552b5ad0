//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready data only: formatted strings and
//! a rasterized map canvas.
//!
//! # Layout
//!
//! ```text
//! row 1          header (title, center coordinates, last update)
//! rows 2-4       search bar with the "Ir" button
//! rows 5..n-3    map canvas
//! row n-2        marker details
//! row n-1        hint
//! row n          keybindings
//! ```

use crate::map::MapCanvas;

/// Rows taken by everything except the map canvas.
pub const CHROME_ROWS: usize = 7;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub map: MapCanvas,
    pub marker: MarkerInfo,
    pub footer: FooterInfo,
    /// Modal alert drawn over the map, if any.
    pub alert: Option<AlertInfo>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned status text (center coordinates, last update).
    pub status: String,
}

/// Search input box state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query; empty shows the placeholder.
    pub query: String,
    pub placeholder: String,
    /// Whether the field has keyboard focus (cursor shown).
    pub focused: bool,
    /// Label of the submit button.
    pub button: String,
    /// A request is in flight.
    pub searching: bool,
}

/// Marker detail line under the map.
#[derive(Debug, Clone)]
pub struct MarkerInfo {
    pub title: String,
    pub description: String,
    /// Formatted `lat, lng`.
    pub coordinates: String,
    /// Whether the pin is inside the visible canvas.
    pub on_screen: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Usage hint shown above the keybindings.
    pub hint: String,
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

#[derive(Debug, Clone)]
pub struct AlertInfo {
    pub title: String,
    pub message: String,
    /// Label of the dismiss button.
    pub button: String,
}
