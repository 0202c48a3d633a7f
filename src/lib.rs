//! tablebar - hover-activated border toolbars for table editing surfaces
//!
//! This crate provides the floating toolbar shown along a table border in
//! a rich-text editor: plus/minus affordance buttons, a highlighting line,
//! and an insert/delete preview mask, together with the geometry and
//! debouncing helpers that turn noisy pointer events into stable UI state.
//! The host editor mounts the visual subtree, forwards events, and
//! performs the actual table mutations when notified.

pub mod debounce;
pub mod geometry;
pub mod node;
pub mod theme;
pub mod toolbar;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use geometry::{
    coords_of, rect_offset, side_of, BoundingBox, Coords, RectOffset, ScrollOffset, Side,
};
pub use node::{Display, StateTag, VisualNode};
pub use theme::ThemeMetrics;
pub use toolbar::{BorderToolbar, MaskMode, Measure, Orientation, SurfaceProbe, ToolbarObserver};
