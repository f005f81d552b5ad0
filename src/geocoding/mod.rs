//! Geocoding: turning a place name into coordinates.
//!
//! The plugin never performs I/O here. [`request`] builds URLs and tracks
//! sequence numbers, [`response`] decodes what comes back. The runtime
//! (`main.rs`) executes the request with Zellij's `web_request` and feeds the
//! result back as an application event.

pub mod request;
pub mod response;

pub use request::{
    build_url, encode_component, GeocodeRequest, PendingSearch, RequestTracker, DEFAULT_ENDPOINT,
    SEQ_CONTEXT_KEY,
};
pub use response::{interpret_response, GeocodeEnvelope, GeocodeOutcome, GeocodeResult};
