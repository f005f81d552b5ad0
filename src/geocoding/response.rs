//! Geocoding response decoding.
//!
//! The endpoint answers with a JSON envelope:
//!
//! ```json
//! {
//!   "status": "OK",
//!   "results": [{
//!     "formatted_address": "São Paulo, SP, Brazil",
//!     "geometry": { "location": { "lat": -23.55, "lng": -46.63 } }
//!   }]
//! }
//! ```
//!
//! Only the first result matters. Anything other than status `"OK"` with at
//! least one result is a miss.

use crate::domain::error::{Result, ZelmapError};
use crate::domain::Place;
use serde::Deserialize;

/// Status value the endpoint uses for a successful lookup.
pub const STATUS_OK: &str = "OK";

/// Top-level response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeEnvelope {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One geocoding hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// What a geocoding response means for the map.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// The first result of a successful lookup.
    Found(Place),
    /// The lookup completed but produced nothing usable.
    NoResults {
        status: String,
        error_message: Option<String>,
    },
}

impl GeocodeEnvelope {
    /// Decodes an envelope from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ZelmapError::Decode`] if the body is not a valid envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Interprets the envelope, keeping only the first result.
    #[must_use]
    pub fn into_outcome(self) -> GeocodeOutcome {
        if self.status == STATUS_OK {
            if let Some(first) = self.results.into_iter().next() {
                return GeocodeOutcome::Found(Place::new(
                    first.formatted_address,
                    first.geometry.location.lat,
                    first.geometry.location.lng,
                ));
            }
        }
        GeocodeOutcome::NoResults {
            status: self.status,
            error_message: self.error_message,
        }
    }
}

/// Interprets a raw HTTP response from the geocoding endpoint.
///
/// # Errors
///
/// - [`ZelmapError::HttpStatus`] for any status outside 200-299
/// - [`ZelmapError::Decode`] when the body is not a geocoding envelope
///
/// # Examples
///
/// ```
/// use zelmap::geocoding::{interpret_response, GeocodeOutcome};
///
/// let body = br#"{"status":"ZERO_RESULTS","results":[]}"#;
/// let outcome = interpret_response(200, body).unwrap();
/// assert!(matches!(outcome, GeocodeOutcome::NoResults { .. }));
/// ```
pub fn interpret_response(http_status: u16, body: &[u8]) -> Result<GeocodeOutcome> {
    if !(200..300).contains(&http_status) {
        return Err(ZelmapError::HttpStatus(http_status));
    }
    Ok(GeocodeEnvelope::from_slice(body)?.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAO_PAULO: &str = r#"{
        "results": [
            {
                "formatted_address": "São Paulo, Brazil",
                "geometry": { "location": { "lat": -23.55, "lng": -46.63 }, "location_type": "APPROXIMATE" },
                "place_id": "ChIJ0WGkg4FEzpQRrlsz_whLqZs"
            },
            {
                "formatted_address": "São Paulo, SP, Brazil",
                "geometry": { "location": { "lat": -23.0, "lng": -47.0 } }
            }
        ],
        "status": "OK"
    }"#;

    #[test]
    fn ok_envelope_yields_first_result() {
        let outcome = interpret_response(200, SAO_PAULO.as_bytes()).unwrap();
        assert_eq!(outcome, GeocodeOutcome::Found(Place::new("São Paulo, Brazil", -23.55, -46.63)));
    }

    #[test]
    fn ok_status_with_empty_results_is_a_miss() {
        let outcome = interpret_response(200, br#"{"status":"OK","results":[]}"#).unwrap();
        assert_eq!(
            outcome,
            GeocodeOutcome::NoResults { status: "OK".to_string(), error_message: None }
        );
    }

    #[test]
    fn missing_results_field_is_treated_as_empty() {
        let body = br#"{"status":"REQUEST_DENIED","error_message":"The provided API key is invalid."}"#;
        let outcome = interpret_response(200, body).unwrap();
        assert_eq!(
            outcome,
            GeocodeOutcome::NoResults {
                status: "REQUEST_DENIED".to_string(),
                error_message: Some("The provided API key is invalid.".to_string()),
            }
        );
    }

    #[test]
    fn non_ok_status_ignores_results() {
        let body = SAO_PAULO.replace("\"status\": \"OK\"", "\"status\": \"OVER_QUERY_LIMIT\"");
        let outcome = interpret_response(200, body.as_bytes()).unwrap();
        assert!(matches!(outcome, GeocodeOutcome::NoResults { ref status, .. } if status == "OVER_QUERY_LIMIT"));
    }

    #[test]
    fn http_failure_is_an_error() {
        let err = interpret_response(502, SAO_PAULO.as_bytes()).unwrap_err();
        assert!(matches!(err, ZelmapError::HttpStatus(502)));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = interpret_response(200, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ZelmapError::Decode(_)));
    }
}
