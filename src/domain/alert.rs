//! User-visible alert messages.

/// Name of the environment variable the API key is conventionally exported as.
pub const API_KEY_ENV_VAR: &str = "EXPO_PUBLIC_GOOGLE_MAPS_API_KEY";

/// A modal message shown over the map until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The alert raised when a search is submitted without an API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelmap::domain::Alert;
    ///
    /// let alert = Alert::missing_api_key();
    /// assert_eq!(alert.title, "Erro");
    /// assert!(alert.message.contains("EXPO_PUBLIC_GOOGLE_MAPS_API_KEY"));
    /// ```
    #[must_use]
    pub fn missing_api_key() -> Self {
        Self::new(
            "Erro",
            format!("Chave da API do Google Maps não encontrada. Defina {API_KEY_ENV_VAR}."),
        )
    }
}
