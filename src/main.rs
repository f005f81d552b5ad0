//! Zellij plugin entry point.
//!
//! A thin shim: host events become [`zelmap::Event`]s, the library decides
//! what happens, and the returned [`Action`]s are carried out through the
//! `zellij-tile` API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, start tracing, build `AppState`, ask for
//!    `WebAccess`, subscribe to events
//! 2. **Update**: translate the event, run `handle_event`, execute actions
//! 3. **Render**: hand off to `zelmap::ui::render`
//!
//! # Event Mapping
//!
//! - `Key` → input events, depending on the input mode and alert
//! - `WebRequestResult` → `Event::GeocodeResponse` (seq read from context)
//! - `Timer` → `Event::Tick`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! While an alert is shown:
//! - `Enter`/`Esc`: Dismiss
//! - `q`: Close plugin
//!
//! In normal mode:
//! - `/` or `i`: Focus the search field
//! - `Enter`: Search for the current query
//! - Arrows or `h`/`j`/`k`/`l`: Pan
//! - `+`/`=` and `-`: Zoom in and out
//! - `c`: Center on the marker
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Type into the query
//! - `Backspace`: Delete a character
//! - `Enter`: Search
//! - `Esc`: Leave the search field, keeping the query

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zelmap::domain::Direction;
use zelmap::geocoding::GeocodeRequest;
use zelmap::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: zelmap::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zelmap::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zelmap::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            endpoint = %config.endpoint,
            theme = ?config.theme_name,
            "parsed configuration"
        );
        self.app = zelmap::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(elapsed) => Event::Tick { elapsed },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    event = our_event.name(),
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(event = our_event.name(), error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zelmap::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.key_modifiers.contains(&KeyModifier::Ctrl)
            || key.key_modifiers.contains(&KeyModifier::Alt)
        {
            return None;
        }

        if self.app.alert.is_some() {
            return match key.bare_key {
                BareKey::Enter | BareKey::Esc => Some(Event::DismissAlert),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Char('/' | 'i') => Event::FocusSearch,
                BareKey::Enter => Event::Submit,
                BareKey::Up | BareKey::Char('k') => Event::Pan(Direction::North),
                BareKey::Down | BareKey::Char('j') => Event::Pan(Direction::South),
                BareKey::Left | BareKey::Char('h') => Event::Pan(Direction::West),
                BareKey::Right | BareKey::Char('l') => Event::Pan(Direction::East),
                BareKey::Char('+' | '=') => Event::ZoomIn,
                BareKey::Char('-') => Event::ZoomOut,
                BareKey::Char('c') => Event::RecenterOnMarker,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Responses without our sequence number belong to someone else.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(seq) = GeocodeRequest::seq_from_context(context) else {
            tracing::debug!(status = status, "web response without a zelmap sequence, ignoring");
            return None;
        };
        Some(Event::GeocodeResponse { seq, status, body })
    }

    /// Request URLs carry the API key, so only the sequence is logged.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Geocode(request) => {
                tracing::debug!(seq = request.seq, "sending geocoding request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
            Action::ScheduleFrame { seconds } => set_timeout(*seconds),
        }
    }
}
