//! Environment lookups for secrets the plugin configuration may omit.

/// Environment variables checked for the geocoding API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["EXPO_PUBLIC_GOOGLE_MAPS_API_KEY", "GOOGLE_MAPS_API_KEY"];

/// Returns the first non-blank API key found through `lookup`.
///
/// `lookup` abstracts `std::env::var` so callers can test without touching
/// the process environment.
///
/// # Examples
///
/// ```
/// use zelmap::infrastructure::api_key_with;
///
/// let key = api_key_with(|name| (name == "GOOGLE_MAPS_API_KEY").then(|| "abc".to_string()));
/// assert_eq!(key.as_deref(), Some("abc"));
/// ```
pub fn api_key_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Reads the API key from the process environment.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    api_key_with(|name| std::env::var(name).ok())
}
