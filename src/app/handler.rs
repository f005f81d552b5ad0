//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin runtime (keys, web responses, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State is mutated in place
//! 4. Actions are collected and returned for the runtime to execute
//!
//! # Event Types
//!
//! - **Search field**: `Char`, `Backspace`, `FocusSearch`, `ExitSearch`, `Submit`
//! - **Map**: `Pan`, `ZoomIn`, `ZoomOut`, `RecenterOnMarker`
//! - **Modal/plugin**: `DismissAlert`, `CloseFocus`
//! - **System**: `GeocodeResponse`, `Tick`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use zelmap::app::{handle_event, Action, AppState, Event};
//! use zelmap::geocoding::DEFAULT_ENDPOINT;
//! use zelmap::ui::Theme;
//!
//! let mut state = AppState::new(Some("key".to_string()), DEFAULT_ENDPOINT.to_string(), Theme::default());
//! handle_event(&mut state, &Event::FocusSearch)?;
//! for c in "Recife".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Geocode(_)]));
//! # Ok::<(), zelmap::ZelmapError>(())
//! ```

use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::domain::{Alert, Direction, Marker, Region};
use crate::geocoding::{build_url, interpret_response, GeocodeOutcome, GeocodeRequest};
use chrono::Utc;

/// Factor applied to both spans by one zoom step.
const ZOOM_STEP: f64 = 2.0;

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Appends a character to the query (search field focused).
    Char(char),
    /// Removes the last character of the query (search field focused).
    Backspace,
    /// Gives the search field keyboard focus.
    FocusSearch,
    /// Leaves the search field. The query is kept.
    ExitSearch,
    /// Presses "Ir": geocodes the query and recenters on the result.
    Submit,

    /// Moves the map by a quarter of the visible span.
    Pan(Direction),
    /// Halves both spans.
    ZoomIn,
    /// Doubles both spans.
    ZoomOut,
    /// Centers the map on the marker, keeping the zoom.
    RecenterOnMarker,

    /// Closes the alert, if one is shown.
    DismissAlert,
    /// Hides the plugin pane.
    CloseFocus,

    /// A geocoding response came back.
    GeocodeResponse {
        /// Sequence number the request was issued with.
        seq: u64,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// A frame timer fired after `elapsed` seconds.
    Tick {
        elapsed: f64,
    },

    /// Outcome of the web access permission request.
    PermissionsResult {
        granted: bool,
    },
}

impl Event {
    /// Short name for spans and logs. Response bodies stay out of traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::FocusSearch => "FocusSearch",
            Self::ExitSearch => "ExitSearch",
            Self::Submit => "Submit",
            Self::Pan(_) => "Pan",
            Self::ZoomIn => "ZoomIn",
            Self::ZoomOut => "ZoomOut",
            Self::RecenterOnMarker => "RecenterOnMarker",
            Self::DismissAlert => "DismissAlert",
            Self::CloseFocus => "CloseFocus",
            Self::GeocodeResponse { .. } => "GeocodeResponse",
            Self::Tick { .. } => "Tick",
            Self::PermissionsResult { .. } => "PermissionsResult",
        }
    }

    /// Whether the event comes from the keyboard.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::GeocodeResponse { .. } | Self::Tick { .. } | Self::PermissionsResult { .. }
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, along with the actions to run in
/// order.
///
/// # Errors
///
/// Geocoding failures are logged and absorbed here; they never propagate.
/// The `Result` is kept so the runtime handles every event the same way.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    if state.alert.is_some()
        && event.is_user_input()
        && !matches!(event, Event::DismissAlert | Event::CloseFocus)
    {
        tracing::trace!("alert shown, input ignored");
        return Ok((false, vec![]));
    }

    match event {
        Event::Char(c) => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            Ok((state.query.pop().is_some(), vec![]))
        }
        Event::FocusSearch => {
            if state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.query, "leaving search field");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Submit => Ok(submit(state)),
        Event::Pan(direction) => {
            state.cancel_animation();
            state.region = state.region.panned(*direction);
            Ok((true, vec![]))
        }
        Event::ZoomIn => {
            state.cancel_animation();
            state.region = state.region.zoomed(1.0 / ZOOM_STEP);
            Ok((true, vec![]))
        }
        Event::ZoomOut => {
            state.cancel_animation();
            state.region = state.region.zoomed(ZOOM_STEP);
            Ok((true, vec![]))
        }
        Event::RecenterOnMarker => {
            state.cancel_animation();
            state.region = state
                .region
                .centered_on(state.marker.latitude, state.marker.longitude);
            Ok((true, vec![]))
        }
        Event::DismissAlert => Ok((state.alert.take().is_some(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::GeocodeResponse { seq, status, body } => {
            Ok(handle_geocode_response(state, *seq, *status, body))
        }
        Event::Tick { elapsed } => Ok(tick(state, *elapsed)),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
            } else {
                tracing::warn!("web access denied - geocoding unavailable");
            }
            state.web_access = Some(*granted);
            Ok((true, vec![]))
        }
    }
}

/// Submits the current query.
///
/// Leaves the search field first, then bails out silently on a blank query
/// and with an alert when no API key is configured.
fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    let left_search = state.input_mode.is_search();
    state.input_mode = InputMode::Normal;

    if state.query.trim().is_empty() {
        tracing::debug!("blank query, nothing to search");
        return (left_search, vec![]);
    }

    let Some(api_key) = state.api_key.as_deref() else {
        tracing::warn!("geocoding API key missing, search aborted");
        state.alert = Some(Alert::missing_api_key());
        return (true, vec![]);
    };

    let seq = state.tracker.issue(&state.query);
    let url = build_url(&state.endpoint, &state.query, api_key);
    tracing::info!(seq = seq, query = %state.query, "geocoding request issued");

    (true, vec![Action::Geocode(GeocodeRequest { seq, url })])
}

fn handle_geocode_response(state: &mut AppState, seq: u64, status: u16, body: &[u8]) -> (bool, Vec<Action>) {
    let Some(pending) = state.tracker.accept(seq) else {
        tracing::debug!(
            seq = seq,
            latest = state.tracker.last_seq(),
            "discarding stale geocoding response"
        );
        return (false, vec![]);
    };

    let latency_ms = (Utc::now() - pending.issued_at).num_milliseconds();

    match interpret_response(status, body) {
        Ok(GeocodeOutcome::Found(place)) => {
            tracing::info!(
                seq = seq,
                query = %pending.query,
                address = %place.formatted_address,
                latitude = place.latitude,
                longitude = place.longitude,
                latency_ms = latency_ms,
                "geocoding succeeded"
            );
            state.marker = Marker::from_place(&place);
            state.last_update = Some(Utc::now());
            let actions = state.animate_to(Region::around(place.latitude, place.longitude));
            (true, actions)
        }
        Ok(GeocodeOutcome::NoResults { status, error_message }) => {
            tracing::warn!(
                seq = seq,
                query = %pending.query,
                status = %status,
                error_message = ?error_message,
                latency_ms = latency_ms,
                "geocoding returned no usable result"
            );
            (true, vec![])
        }
        Err(e) => {
            tracing::error!(
                seq = seq,
                query = %pending.query,
                error = %e,
                latency_ms = latency_ms,
                "geocoding request failed"
            );
            (true, vec![])
        }
    }
}

fn tick(state: &mut AppState, elapsed: f64) -> (bool, Vec<Action>) {
    state.frame_scheduled = false;

    let Some(animation) = state.animation.as_mut() else {
        return (false, vec![]);
    };

    state.region = animation.advance(elapsed);
    if animation.is_finished() {
        tracing::debug!("viewport animation finished");
        state.animation = None;
        return (true, vec![]);
    }

    (true, state.request_frame().into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SEARCH_RESULT_DESCRIPTION;
    use crate::geocoding::DEFAULT_ENDPOINT;
    use crate::map::FRAME_INTERVAL_SECS;
    use crate::ui::Theme;

    const SAO_PAULO_OK: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "São Paulo, Brazil",
            "geometry": { "location": { "lat": -23.55, "lng": -46.63 } }
        }]
    }"#;

    const RIO_OK: &str = r#"{
        "status": "OK",
        "results": [{
            "formatted_address": "Rio de Janeiro, Brazil",
            "geometry": { "location": { "lat": -22.9068, "lng": -43.1729 } }
        }]
    }"#;

    fn state_with_key(key: Option<&str>) -> AppState {
        AppState::new(key.map(String::from), DEFAULT_ENDPOINT.to_string(), Theme::default())
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_query(state: &mut AppState, query: &str) {
        send(state, Event::FocusSearch);
        for c in query.chars() {
            send(state, Event::Char(c));
        }
    }

    fn submitted_seq(actions: &[Action]) -> u64 {
        match actions {
            [Action::Geocode(request)] => request.seq,
            other => panic!("expected a single geocode action, got {other:?}"),
        }
    }

    fn respond(state: &mut AppState, seq: u64, body: &str) -> (bool, Vec<Action>) {
        send(
            state,
            Event::GeocodeResponse {
                seq,
                status: 200,
                body: body.as_bytes().to_vec(),
            },
        )
    }

    fn run_animation(state: &mut AppState) {
        let mut ticks = 0;
        while state.animation.is_some() {
            send(state, Event::Tick { elapsed: FRAME_INTERVAL_SECS });
            ticks += 1;
            assert!(ticks < 100, "animation did not finish");
        }
    }

    #[test]
    fn sao_paulo_search_sets_marker_from_first_result() {
        let mut state = state_with_key(Some("k3y"));
        type_query(&mut state, "São Paulo");

        let (_, actions) = send(&mut state, Event::Submit);
        let Action::Geocode(request) = &actions[0] else {
            panic!("expected geocode action");
        };
        assert_eq!(
            request.url,
            "https://maps.googleapis.com/maps/api/geocode/json?address=S%C3%A3o%20Paulo&key=k3y"
        );

        let (render, actions) = respond(&mut state, request.seq, SAO_PAULO_OK);
        assert!(render);
        assert_eq!(
            state.marker,
            Marker::new(-23.55, -46.63, "São Paulo, Brazil", SEARCH_RESULT_DESCRIPTION)
        );
        assert!(matches!(actions.as_slice(), [Action::ScheduleFrame { .. }]));
        assert!(state.last_update.is_some());
    }

    #[test]
    fn animation_ends_exactly_on_result_region() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Rio");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        respond(&mut state, seq, RIO_OK);

        run_animation(&mut state);
        assert_eq!(state.region, Region::around(-22.9068, -43.1729));
        assert!(!state.frame_scheduled);
    }

    #[test]
    fn blank_queries_issue_no_request() {
        for query in ["", "   ", "\t "] {
            let mut state = state_with_key(Some("k"));
            type_query(&mut state, query);
            let (_, actions) = send(&mut state, Event::Submit);
            assert!(actions.is_empty(), "query {query:?}");
            assert_eq!(state.marker, Marker::default());
            assert_eq!(state.tracker.last_seq(), 0);
            assert_eq!(state.input_mode, InputMode::Normal);
        }
    }

    #[test]
    fn missing_key_raises_one_alert_and_no_request() {
        let mut state = state_with_key(None);
        type_query(&mut state, "Curitiba");

        let (render, actions) = send(&mut state, Event::Submit);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.alert, Some(Alert::missing_api_key()));
        assert_eq!(state.tracker.last_seq(), 0);

        // A second submit while the alert is up is swallowed.
        let (render, actions) = send(&mut state, Event::Submit);
        assert!(!render);
        assert!(actions.is_empty());

        let (render, _) = send(&mut state, Event::DismissAlert);
        assert!(render);
        assert!(state.alert.is_none());
    }

    #[test]
    fn alert_blocks_map_and_typing_input() {
        let mut state = state_with_key(None);
        type_query(&mut state, "x");
        send(&mut state, Event::Submit);

        let region = state.region;
        send(&mut state, Event::Pan(Direction::North));
        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::Char('y'));
        assert_eq!(state.region, region);
        assert_eq!(state.query, "x");
        assert_eq!(state.input_mode, InputMode::Normal);

        let (_, actions) = send(&mut state, Event::CloseFocus);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn non_ok_status_leaves_marker_unchanged() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Atlantis");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);

        let (_, actions) = respond(&mut state, seq, r#"{"status":"ZERO_RESULTS","results":[]}"#);
        assert!(actions.is_empty());
        assert_eq!(state.marker, Marker::default());
        assert_eq!(state.region, Region::default());
        assert!(state.alert.is_none());
    }

    #[test]
    fn empty_results_leave_marker_unchanged() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Nowhere");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        respond(&mut state, seq, r#"{"status":"OK","results":[]}"#);
        assert_eq!(state.marker, Marker::default());
    }

    #[test]
    fn transport_failures_are_silent() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Manaus");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        let (_, actions) = send(
            &mut state,
            Event::GeocodeResponse { seq, status: 500, body: b"oops".to_vec() },
        );
        assert!(actions.is_empty());
        assert!(state.alert.is_none());
        assert_eq!(state.marker, Marker::default());
        assert!(state.tracker.pending().is_none());
    }

    #[test]
    fn stale_response_never_overwrites_newer_marker() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "São Paulo");
        let first = submitted_seq(&send(&mut state, Event::Submit).1);

        state.query.clear();
        type_query(&mut state, "Rio");
        let second = submitted_seq(&send(&mut state, Event::Submit).1);
        assert!(second > first);

        respond(&mut state, second, RIO_OK);
        let (render, actions) = respond(&mut state, first, SAO_PAULO_OK);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.marker.title, "Rio de Janeiro, Brazil");
    }

    #[test]
    fn stale_response_arriving_first_is_also_dropped() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "a");
        let first = submitted_seq(&send(&mut state, Event::Submit).1);
        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::Char('b'));
        let second = submitted_seq(&send(&mut state, Event::Submit).1);

        respond(&mut state, first, SAO_PAULO_OK);
        assert_eq!(state.marker, Marker::default());
        respond(&mut state, second, RIO_OK);
        assert_eq!(state.marker.title, "Rio de Janeiro, Brazil");
    }

    #[test]
    fn query_persists_after_submit_and_exit() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Belém");
        send(&mut state, Event::Submit);
        assert_eq!(state.query, "Belém");
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::ExitSearch);
        assert_eq!(state.query, "Belém");
    }

    #[test]
    fn typing_requires_search_focus() {
        let mut state = state_with_key(Some("k"));
        let (render, _) = send(&mut state, Event::Char('a'));
        assert!(!render);
        assert!(state.query.is_empty());

        type_query(&mut state, "ab");
        send(&mut state, Event::Backspace);
        assert_eq!(state.query, "a");
    }

    #[test]
    fn user_pan_cancels_animation() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Rio");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        respond(&mut state, seq, RIO_OK);
        send(&mut state, Event::Tick { elapsed: FRAME_INTERVAL_SECS });
        assert!(state.animation.is_some());

        send(&mut state, Event::Pan(Direction::West));
        assert!(state.animation.is_none());

        let before = state.region;
        let (render, actions) = send(&mut state, Event::Tick { elapsed: FRAME_INTERVAL_SECS });
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.region, before);
    }

    #[test]
    fn zoom_and_recenter() {
        let mut state = state_with_key(Some("k"));
        let start = state.region;
        send(&mut state, Event::ZoomIn);
        assert!((state.region.latitude_delta - start.latitude_delta / 2.0).abs() < 1e-12);
        send(&mut state, Event::ZoomOut);
        send(&mut state, Event::ZoomOut);
        assert!((state.region.latitude_delta - start.latitude_delta * 2.0).abs() < 1e-12);

        send(&mut state, Event::Pan(Direction::North));
        send(&mut state, Event::RecenterOnMarker);
        assert!((state.region.latitude - state.marker.latitude).abs() < 1e-12);
    }

    #[test]
    fn second_result_during_animation_keeps_single_timer() {
        let mut state = state_with_key(Some("k"));
        type_query(&mut state, "Rio");
        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        respond(&mut state, seq, RIO_OK);

        let seq = submitted_seq(&send(&mut state, Event::Submit).1);
        let (_, actions) = respond(&mut state, seq, SAO_PAULO_OK);
        assert!(actions.is_empty(), "timer already outstanding");
        run_animation(&mut state);
        assert_eq!(state.region, Region::around(-23.55, -46.63));
    }

    #[test]
    fn permission_result_is_recorded() {
        let mut state = state_with_key(Some("k"));
        send(&mut state, Event::PermissionsResult { granted: false });
        assert_eq!(state.web_access, Some(false));
    }
}
