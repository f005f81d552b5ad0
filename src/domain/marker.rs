//! Marker and place domain models.
//!
//! A [`Place`] is what the geocoder found; a [`Marker`] is what the map shows.
//! The marker is replaced wholesale whenever a search succeeds and never
//! mutated field by field.

use serde::{Deserialize, Serialize};

/// Description attached to every marker produced by a search.
pub const SEARCH_RESULT_DESCRIPTION: &str = "Resultado da busca";

/// A labeled point rendered on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
}

impl Marker {
    /// Creates a marker from its four fields.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Builds the marker shown for a geocoding hit.
    ///
    /// The title is the formatted address and the description is always
    /// [`SEARCH_RESULT_DESCRIPTION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::{Marker, Place};
    ///
    /// let place = Place::new("São Paulo, Brazil", -23.55, -46.63);
    /// let marker = Marker::from_place(&place);
    /// assert_eq!(marker, Marker::new(-23.55, -46.63, "São Paulo, Brazil", "Resultado da busca"));
    /// ```
    #[must_use]
    pub fn from_place(place: &Place) -> Self {
        Self::new(
            place.latitude,
            place.longitude,
            place.formatted_address.clone(),
            SEARCH_RESULT_DESCRIPTION,
        )
    }
}

impl Default for Marker {
    /// The marker shown before any search: downtown São Paulo.
    fn default() -> Self {
        Self::new(-23.55052, -46.633308, "São Paulo", "Capital do estado de São Paulo")
    }
}

/// A decoded geocoding hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    #[must_use]
    pub fn new(formatted_address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marker_is_sao_paulo() {
        let marker = Marker::default();
        assert_eq!(marker.title, "São Paulo");
        assert_eq!(marker.description, "Capital do estado de São Paulo");
        assert!((marker.latitude - -23.55052).abs() < f64::EPSILON);
        assert!((marker.longitude - -46.633308).abs() < f64::EPSILON);
    }

    #[test]
    fn marker_from_place_uses_address_as_title() {
        let place = Place::new("Avenida Paulista, São Paulo", -23.561, -46.656);
        let marker = Marker::from_place(&place);
        assert_eq!(marker.title, "Avenida Paulista, São Paulo");
        assert_eq!(marker.description, SEARCH_RESULT_DESCRIPTION);
        assert_eq!((marker.latitude, marker.longitude), (-23.561, -46.656));
    }
}
