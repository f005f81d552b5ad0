//! Input mode state for the application.
//!
//! The plugin is either driving the map or typing into the search field.
//! The mode decides how keys are interpreted and where the cursor is drawn.
//!
//! # Example
//!
//! ```rust
//! use zelmap::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Normal);
//! assert!(!mode.is_search());
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Map navigation mode.
    ///
    /// Keybindings: arrows or h/j/k/l (pan), +/- (zoom), c (recenter),
    /// / or i (focus search), Enter (submit), q (close).
    #[default]
    Normal,

    /// The search field has focus.
    ///
    /// Printable keys edit the query, Enter submits, Esc leaves the field.
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}
