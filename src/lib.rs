//! zelmap: a Zellij plugin that geocodes place names onto a terminal map.
//!
//! Type a place name, press Enter, and the map eases over to the first match
//! reported by the Google Geocoding API, dropping a pin on it.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, HTTP, timers
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, request tracking                 │
//! │  - Viewport animation                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Map Layer     │   │ Geocoding     │
//! │ (ui/)         │   │ (map/)        │   │ (geocoding/)  │
//! │ - Rendering   │   │ - Projection  │   │ - URL builder │
//! │ - Theming     │   │ - Graticule   │   │ - Envelope    │
//! │ - Components  │   │ - Animation   │   │ - Sequencing  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Region, Marker, Alert, errors (domain/)          │
//! │  - Sandbox paths, environment (infrastructure/)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never touches `zellij-tile`; the shim translates host events
//! into [`Event`]s and carries out the [`Action`]s that come back.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zelmap.wasm" {
//!         api_key "AIza..."
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Without `api_key` the key is read from `EXPO_PUBLIC_GOOGLE_MAPS_API_KEY`
//! or `GOOGLE_MAPS_API_KEY`.
//!
//! # Example
//!
//! ```
//! use zelmap::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("test-key".to_string()),
//!     ..Config::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::FocusSearch)?;
//! for c in "Lisboa".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Geocode(_)]));
//! # Ok::<(), zelmap::ZelmapError>(())
//! ```

pub mod app;
pub mod domain;
pub mod geocoding;
pub mod infrastructure;
pub mod map;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, ZelmapError};
pub use ui::Theme;

use geocoding::DEFAULT_ENDPOINT;
use std::collections::BTreeMap;

/// Plugin configuration parsed from the KDL plugin block.
#[derive(Debug, Clone)]
pub struct Config {
    /// Geocoding API key. Blank values count as missing.
    pub api_key: Option<String>,

    /// Geocoding endpoint. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Built-in theme name: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe` or `catppuccin-macchiato`. Ignored when
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` expands to the `/host` mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the Zellij configuration map, reading the API key from the
    /// process environment when the map has none.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self::from_zellij_with_env(config, |name| std::env::var(name).ok())
    }

    /// Like [`Config::from_zellij`] with an injectable environment lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zelmap::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij_with_env(&map, |name| {
    ///     (name == "GOOGLE_MAPS_API_KEY").then(|| "from-env".to_string())
    /// });
    /// assert_eq!(config.api_key.as_deref(), Some("from-env"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    pub fn from_zellij_with_env<F>(config: &BTreeMap<String, String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_blank(config.get("api_key"))
            .or_else(|| infrastructure::api_key_with(lookup));

        let endpoint = match non_blank(config.get("geocode_endpoint")) {
            Some(raw) => parse_endpoint(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring geocode_endpoint");
                DEFAULT_ENDPOINT.to_string()
            }),
            None => DEFAULT_ENDPOINT.to_string(),
        };

        Self {
            api_key,
            endpoint,
            theme_name: non_blank(config.get("theme")),
            theme_file: non_blank(config.get("theme_file")),
            trace_level: non_blank(config.get("trace_level")),
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Accepts only absolute http(s) URLs without a query string; the request
/// builder appends its own.
fn parse_endpoint(raw: &str) -> Result<String> {
    if !(raw.starts_with("https://") || raw.starts_with("http://")) {
        return Err(ZelmapError::Config(format!(
            "geocode_endpoint must be an http(s) URL, got {raw:?}"
        )));
    }
    if raw.contains('?') {
        return Err(ZelmapError::Config(format!(
            "geocode_endpoint must not carry a query string, got {raw:?}"
        )));
    }
    Ok(raw.to_string())
}

/// Builds the initial [`AppState`] from configuration.
///
/// The theme comes from `theme_file`, else `theme_name`, else the default;
/// a theme that fails to load falls back to the default with a warning.
/// Tracing is not set up here; the shim calls
/// [`observability::init_tracing`] first.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        has_api_key = config.api_key.is_some(),
        endpoint = %config.endpoint,
        "initializing zelmap"
    );

    if config.api_key.is_none() {
        tracing::warn!("no geocoding API key configured; searches will raise an alert");
    }

    let theme = match (&config.theme_file, &config.theme_name) {
        (Some(theme_file), _) => {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        }
        (None, Some(theme_name)) => Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        }),
        (None, None) => Theme::default(),
    };

    AppState::new(config.api_key.clone(), config.endpoint.clone(), theme)
}
