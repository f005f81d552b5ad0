//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for working with the Zellij plugin sandbox
//! environment: path handling where the host filesystem is mounted under
//! `/host`, and environment fallbacks for the geocoding API key.

pub mod env;
pub mod paths;

pub use env::{api_key_from_env, api_key_with, API_KEY_ENV_VARS};
pub use paths::{expand_tilde, get_data_dir, trace_file_path};
