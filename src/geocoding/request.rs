//! Geocoding request construction and sequencing.
//!
//! Requests are built here and executed by the plugin runtime through Zellij's
//! `web_request`. Every request carries a monotonic sequence number in its
//! context map; [`RequestTracker`] uses it to drop responses that arrive after
//! a newer search was submitted.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Default geocoding endpoint (Google Geocoding API, JSON output).
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Context key carrying the sequence number through the web request.
pub const SEQ_CONTEXT_KEY: &str = "zelmap_seq";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a URL component, UTF-8 first.
///
/// # Examples
///
/// ```
/// use zelmap::geocoding::encode_component;
///
/// assert_eq!(encode_component("São Paulo"), "S%C3%A3o%20Paulo");
/// assert_eq!(encode_component("it's (fine)!"), "it's%20(fine)!");
/// ```
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the geocoding URL for a query.
///
/// The query is sent as typed; surrounding whitespace is not trimmed.
#[must_use]
pub fn build_url(endpoint: &str, query: &str, api_key: &str) -> String {
    format!(
        "{endpoint}?address={}&key={}",
        encode_component(query),
        encode_component(api_key)
    )
}

/// A geocoding request ready to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Sequence number identifying this request.
    pub seq: u64,
    /// Fully encoded request URL.
    pub url: String,
}

impl GeocodeRequest {
    /// Context map passed to `web_request`, echoed back with the result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(SEQ_CONTEXT_KEY.to_string(), self.seq.to_string());
        context
    }

    /// Recovers the sequence number from an echoed context map.
    ///
    /// Returns `None` for results that did not originate from a geocoding request.
    #[must_use]
    pub fn seq_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        context.get(SEQ_CONTEXT_KEY)?.parse().ok()
    }
}

/// The latest search still waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub query: String,
    pub issued_at: DateTime<Utc>,
}

/// Issues sequence numbers and decides which responses are still wanted.
///
/// Only the most recently issued request is accepted, and only once. A slow
/// response to an older search is stale and must not overwrite the marker.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    last_seq: u64,
    pending: Option<PendingSearch>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new search and returns its sequence number.
    pub fn issue(&mut self, query: &str) -> u64 {
        self.last_seq += 1;
        self.pending = Some(PendingSearch {
            seq: self.last_seq,
            query: query.to_string(),
            issued_at: Utc::now(),
        });
        self.last_seq
    }

    /// Takes the pending search if `seq` is the latest issued one.
    ///
    /// Returns `None` for stale or duplicate responses.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::geocoding::RequestTracker;
    ///
    /// let mut tracker = RequestTracker::new();
    /// let first = tracker.issue("Rio");
    /// let second = tracker.issue("Recife");
    /// assert!(tracker.accept(first).is_none());
    /// assert_eq!(tracker.accept(second).map(|p| p.query), Some("Recife".to_string()));
    /// assert!(tracker.accept(second).is_none());
    /// ```
    pub fn accept(&mut self, seq: u64) -> Option<PendingSearch> {
        if self.pending.as_ref().is_some_and(|p| p.seq == seq) {
            self.pending.take()
        } else {
            None
        }
    }

    /// The search currently in flight, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingSearch> {
        self.pending.as_ref()
    }

    /// Sequence number of the most recently issued request (0 if none).
    #[must_use]
    pub const fn last_seq(&self) -> u64 {
        self.last_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_encodes_query_like_uri_component() {
        let url = build_url(DEFAULT_ENDPOINT, "Rua Augusta, 500 & café", "k3y");
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/geocode/json?address=Rua%20Augusta%2C%20500%20%26%20caf%C3%A9&key=k3y"
        );
    }

    #[test]
    fn build_url_keeps_unreserved_marks() {
        let url = build_url("http://localhost/geo", "a-b_c.d!e~f*g'h(i)", "key");
        assert_eq!(url, "http://localhost/geo?address=a-b_c.d!e~f*g'h(i)&key=key");
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let mut tracker = RequestTracker::new();
        let a = tracker.issue("a");
        let b = tracker.issue("b");
        let c = tracker.issue("c");
        assert!(a < b && b < c);
        assert_eq!(tracker.last_seq(), c);
        assert_eq!(tracker.pending().map(|p| p.seq), Some(c));
    }

    #[test]
    fn stale_responses_are_rejected() {
        let mut tracker = RequestTracker::new();
        let old = tracker.issue("Campinas");
        let new = tracker.issue("Santos");

        assert!(tracker.accept(old).is_none());
        let accepted = tracker.accept(new).expect("latest response is accepted");
        assert_eq!(accepted.query, "Santos");
        assert!(tracker.pending().is_none());
    }

    #[test]
    fn nothing_is_accepted_before_any_request() {
        let mut tracker = RequestTracker::new();
        assert!(tracker.accept(0).is_none());
        assert!(tracker.accept(1).is_none());
    }

    #[test]
    fn context_round_trips_sequence() {
        let request = GeocodeRequest { seq: 42, url: String::new() };
        assert_eq!(GeocodeRequest::seq_from_context(&request.context()), Some(42));
        assert_eq!(GeocodeRequest::seq_from_context(&BTreeMap::new()), None);
    }
}
