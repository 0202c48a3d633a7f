//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use tablebar::{
    BorderToolbar, BoundingBox, Measure, Orientation, SurfaceProbe, ThemeMetrics, ToolbarObserver,
};

/// Observer recording every callback with its coordinates
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub inserts: Vec<(f64, f64)>,
    pub deletes: Vec<(f64, f64)>,
    pub handoffs: Vec<(f64, f64)>,
}

impl ToolbarObserver for RecordingObserver {
    fn on_insert_requested(&mut self, x: f64, y: f64) {
        self.inserts.push((x, y));
    }

    fn on_delete_requested(&mut self, x: f64, y: f64) {
        self.deletes.push((x, y));
    }

    fn on_hover_handoff(&mut self, x: f64, y: f64) {
        self.handoffs.push((x, y));
    }
}

/// Measure stub returning a fixed rendered size for both orientations
pub struct FixedMeasure(pub f64);

impl Measure for FixedMeasure {
    fn toolbar_size(&self, _orientation: Orientation) -> f64 {
        self.0
    }
}

/// Probe treating one rectangle as the table's border-detection area
pub struct GridProbe {
    pub area: BoundingBox,
}

impl SurfaceProbe for GridProbe {
    fn is_border_area(&self, x: f64, y: f64) -> bool {
        x >= self.area.left && x < self.area.right && y >= self.area.top && y < self.area.bottom
    }
}

/// Create a toolbar with the stock theme metrics
pub fn test_toolbar(orientation: Orientation) -> BorderToolbar {
    BorderToolbar::new(orientation, ThemeMetrics::default())
}

/// The stock hover settling window
pub fn settle_window() -> Duration {
    ThemeMetrics::default().hover_window()
}

/// Table box used by the border-signature tests: 200x100 at the origin
pub fn test_table() -> BoundingBox {
    BoundingBox::from_rect(0.0, 0.0, 200.0, 100.0)
}

/// A button-parent box producing the given per-edge offsets against
/// `test_table()`
pub fn parent_with_offsets(top: f64, left: f64, right: f64, bottom: f64) -> BoundingBox {
    let table = test_table();
    BoundingBox {
        top: table.top + top,
        left: table.left + left,
        right: table.right + right,
        bottom: table.bottom + bottom,
    }
}
