//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the
//! plugin knows at runtime: the query being typed, the marker, the visible
//! region and any transition toward a new one, the alert (if shown), and
//! the bookkeeping for in-flight geocoding requests. Nothing is persisted;
//! a plugin restart starts from the defaults.
//!
//! # Example
//!
//! ```rust
//! use zelmap::app::AppState;
//! use zelmap::geocoding::DEFAULT_ENDPOINT;
//! use zelmap::ui::Theme;
//!
//! let state = AppState::new(Some("key".to_string()), DEFAULT_ENDPOINT.to_string(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.map.rows(), 17);
//! assert_eq!(viewmodel.search_bar.placeholder, "Buscar local");
//! ```

use super::actions::Action;
use super::modes::InputMode;
use crate::domain::{Alert, Marker, Region};
use crate::geocoding::RequestTracker;
use crate::map::{MapCanvas, Projection, ViewportAnimation, FRAME_INTERVAL_SECS, SEARCH_ANIMATION_SECS};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, FooterInfo, HeaderInfo, MarkerInfo, SearchBarInfo, UIViewModel, CHROME_ROWS,
};
use chrono::{DateTime, Utc};

/// Placeholder shown in the empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Buscar local";

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Ir";

/// Usage hint under the map.
pub const USAGE_HINT: &str = "Digite um local e pressione \"Ir\" para centralizar";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text in the search field. Survives submits and focus changes.
    pub query: String,

    /// The point shown on the map. Replaced wholesale on a successful search.
    pub marker: Marker,

    /// The region currently on screen.
    pub region: Region,

    pub input_mode: InputMode,

    /// Modal alert; while set, user input other than dismiss/close is ignored.
    pub alert: Option<Alert>,

    /// Sequence numbers of geocoding requests.
    pub tracker: RequestTracker,

    /// Transition in progress toward a search result.
    pub animation: Option<ViewportAnimation>,

    /// A frame timer is outstanding. At most one is ever requested.
    pub frame_scheduled: bool,

    /// Geocoding API key; `None` makes every submit raise an alert.
    pub api_key: Option<String>,

    /// Geocoding endpoint URL.
    pub endpoint: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Result of the web access permission request, once known.
    pub web_access: Option<bool>,

    /// When the marker last moved because of a search.
    pub last_update: Option<DateTime<Utc>>,
}

impl AppState {
    /// Creates the startup state: São Paulo marker and region, empty query,
    /// map navigation mode.
    #[must_use]
    pub fn new(api_key: Option<String>, endpoint: String, theme: Theme) -> Self {
        Self {
            query: String::new(),
            marker: Marker::default(),
            region: Region::default(),
            input_mode: InputMode::Normal,
            alert: None,
            tracker: RequestTracker::new(),
            animation: None,
            frame_scheduled: false,
            api_key,
            endpoint,
            theme,
            web_access: None,
            last_update: None,
        }
    }

    /// Starts a transition from the current region to `target`.
    ///
    /// Replaces any transition already running. Returns the frame request
    /// needed to drive it, unless a frame timer is already outstanding.
    pub fn animate_to(&mut self, target: Region) -> Vec<Action> {
        tracing::debug!(
            from_lat = self.region.latitude,
            from_lng = self.region.longitude,
            to_lat = target.latitude,
            to_lng = target.longitude,
            "starting viewport animation"
        );
        self.animation = Some(ViewportAnimation::new(self.region, target, SEARCH_ANIMATION_SECS));
        self.request_frame().into_iter().collect()
    }

    /// Drops the running transition, leaving the region where it is.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            tracing::debug!("viewport animation cancelled");
        }
    }

    /// Returns a frame request unless one is already outstanding.
    pub fn request_frame(&mut self) -> Option<Action> {
        if self.frame_scheduled {
            return None;
        }
        self.frame_scheduled = true;
        Some(Action::ScheduleFrame {
            seconds: FRAME_INTERVAL_SECS,
        })
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The map gets every row not taken by chrome. The region is widened
    /// to the canvas aspect before projecting, so the map is never
    /// stretched.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let map_rows = rows.saturating_sub(CHROME_ROWS);
        let fitted = self.region.fit(map_rows, cols);
        let projection = Projection::new(&fitted, map_rows, cols);
        let map = MapCanvas::draw(&projection, &self.marker);

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            marker: self.compute_marker_info(map.pin().is_some()),
            map,
            footer: self.compute_footer(),
            alert: self.alert.as_ref().map(|alert| AlertInfo {
                title: alert.title.clone(),
                message: alert.message.clone(),
                button: "OK".to_string(),
            }),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let mut status = format!(
            "{}  Δ {:.4}°",
            format_coordinates(self.region.latitude, self.region.longitude),
            self.region.latitude_delta
        );
        if let Some(updated) = self.last_update {
            status.push_str(&format!(
                "  atualizado {} UTC",
                updated.format("%H:%M:%S")
            ));
        }
        HeaderInfo {
            title: " zelmap ".to_string(),
            status,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.query.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            focused: self.input_mode.is_search() && self.alert.is_none(),
            button: SUBMIT_LABEL.to_string(),
            searching: self.tracker.pending().is_some(),
        }
    }

    fn compute_marker_info(&self, on_screen: bool) -> MarkerInfo {
        MarkerInfo {
            title: self.marker.title.clone(),
            description: self.marker.description.clone(),
            coordinates: format_coordinates(self.marker.latitude, self.marker.longitude),
            on_screen,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let hint = if self.web_access == Some(false) {
            "Acesso à web negado: a busca não está disponível".to_string()
        } else {
            USAGE_HINT.to_string()
        };

        let keybindings = if self.alert.is_some() {
            "Enter/Esc: OK  q: fechar"
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: Ir  Esc: sair da busca  Backspace: apagar",
                InputMode::Normal => {
                    "/: buscar  Enter: Ir  ←↓↑→ ou hjkl: mover  +/-: zoom  c: centralizar  q: fechar"
                }
            }
        };

        FooterInfo {
            hint,
            keybindings: keybindings.to_string(),
        }
    }
}

/// Formats a coordinate pair as `lat, lng` with five decimals.
#[must_use]
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.5}, {longitude:.5}")
}
