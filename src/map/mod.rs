//! Viewport math for the terminal map.
//!
//! - [`projection`]: Web Mercator projection and canvas fitting
//! - [`graticule`]: grid spacing selection
//! - [`canvas`]: rasterization of grid and marker into cells
//! - [`animation`]: eased transitions between regions

pub mod animation;
pub mod canvas;
pub mod graticule;
pub mod projection;

pub use animation::{ease_in_out_cubic, ViewportAnimation, FRAME_INTERVAL_SECS, SEARCH_ANIMATION_SECS};
pub use canvas::{MapCanvas, MapCell};
pub use graticule::nice_step;
pub use projection::{inverse_mercator_y, mercator_y, Projection, CELL_ASPECT};
