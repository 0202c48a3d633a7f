//! Geometry helpers for toolbar positioning and border detection
//!
//! This module is the single source of truth for the coordinate math shared
//! between toolbar placement and the host's border-hover logic: absolute
//! document-space boxes, per-edge offsets between two boxes, and the
//! side classifier that decides which edge of a cell a point is near.
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested without a rendering engine.

// ============================================================================
// Value Types
// ============================================================================

/// Axis-aligned box in viewport coordinates, as reported by the host's
/// layout engine for a mounted element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Build a box from an origin and size (convenient for tests and
    /// hosts that track rects rather than edges).
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            left: x,
            right: x + width,
            bottom: y + height,
        }
    }
}

/// Current page scroll offset, used to translate viewport coordinates
/// into document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Absolute document-space box: upper-left corner (x1, y1) and
/// lower-right corner (x2, y2), floored to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coords {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Signed per-edge differences between an inner element's box and an
/// outer (table) box. Computed fresh per hover event, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectOffset {
    pub top_offset: f64,
    pub left_offset: f64,
    pub right_offset: f64,
    pub bottom_offset: f64,
}

impl RectOffset {
    /// All-zero offsets, the fail-soft result when geometry is absent
    pub const ZERO: Self = Self {
        top_offset: 0.0,
        left_offset: 0.0,
        right_offset: 0.0,
        bottom_offset: 0.0,
    };
}

/// Which edge of a rectangle a point is closest to, within the fixed
/// proximity band. `None` (no side) is expressed as `Option::None` by
/// [`side_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

// ============================================================================
// Coordinate Functions
// ============================================================================

/// Translate a viewport-space box into absolute document coordinates,
/// accounting for page scroll. Values are floored to whole pixels.
pub fn coords_of(bounds: &BoundingBox, scroll: ScrollOffset) -> Coords {
    Coords {
        y1: (bounds.top + scroll.y).floor() as i32,
        x1: (bounds.left + scroll.x).floor() as i32,
        x2: (bounds.right + scroll.x).floor() as i32,
        y2: (bounds.bottom + scroll.y).floor() as i32,
    }
}

/// Per-edge offset of `inner` relative to `outer` (`inner.edge - outer.edge`).
///
/// Fails soft: if either box is absent the result is [`RectOffset::ZERO`],
/// so missing geometry never interrupts the host editor.
pub fn rect_offset(outer: Option<&BoundingBox>, inner: Option<&BoundingBox>) -> RectOffset {
    let (Some(outer), Some(inner)) = (outer, inner) else {
        return RectOffset::ZERO;
    };

    RectOffset {
        top_offset: inner.top - outer.top,
        left_offset: inner.left - outer.left,
        right_offset: inner.right - outer.right,
        bottom_offset: inner.bottom - outer.bottom,
    }
}

// ============================================================================
// Side Classification
// ============================================================================

/// Width of the band along each edge inside which a point counts as
/// "near" that border.
const EDGE_BAND: f64 = 10.0;

/// Extra pixel on each end of the band to absorb fractional-pixel
/// rounding in layout engines.
const BAND_TOLERANCE: f64 = 1.0;

/// Classify which side of `coords` the point (x, y) is near, or `None`
/// if it sits outside every band.
///
/// The four bands are checked independently in the order left, right,
/// top, bottom, and each hit overwrites the previous one. Near a corner
/// where bands overlap, the later check wins (bottom strongest). This
/// last-match-wins tie-break is intentional and relied upon by the host's
/// border-hover logic.
pub fn side_of(coords: &Coords, x: f64, y: f64) -> Option<Side> {
    let near = |distance: f64| {
        distance >= -BAND_TOLERANCE && distance <= EDGE_BAND + BAND_TOLERANCE
    };

    let mut side = None;

    if near(x - coords.x1 as f64) {
        side = Some(Side::Left);
    }
    if near(coords.x2 as f64 - x) {
        side = Some(Side::Right);
    }
    if near(y - coords.y1 as f64) {
        side = Some(Side::Top);
    }
    if near(coords.y2 as f64 - y) {
        side = Some(Side::Bottom);
    }

    side
}
