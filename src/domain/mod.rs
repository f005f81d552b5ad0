//! Domain layer for the zelmap plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`marker`]: Marker and geocoded place models
//! - [`region`]: Viewport region model with pan/zoom helpers
//! - [`alert`]: User-visible alert messages
//!
//! # Examples
//!
//! ```
//! use zelmap::domain::{Marker, Region};
//!
//! let marker = Marker::default();
//! let region = Region::default();
//! assert_eq!(marker.latitude, region.latitude);
//! ```

pub mod alert;
pub mod error;
pub mod marker;
pub mod region;

pub use alert::Alert;
pub use error::{Result, ZelmapError};
pub use marker::{Marker, Place, SEARCH_RESULT_DESCRIPTION};
pub use region::{Direction, Region};
