//! Border toolbar widget
//!
//! A [`BorderToolbar`] is the floating control shown along a table edge:
//! an insert (plus) button, a delete (minus) button, a highlighting line
//! tracing the hovered border, and a semi-transparent mask previewing the
//! pending insert/delete. One horizontal and one vertical instance are
//! typically constructed once per border-overlay slot and repositioned as
//! the pointer moves, never recreated per hover.
//!
//! The toolbar is purely presentational: it owns its visual subtree and
//! its hover-state machine, and signals requested mutations through a
//! [`ToolbarObserver`]. It never touches the document model.
//!
//! Integration shape: the host forwards pointer/click events to the
//! handler methods below and pumps [`BorderToolbar::tick`] from its event
//! loop so debounced hover effects settle. Sizing and under-pointer
//! queries go through the injected [`Measure`] and [`SurfaceProbe`]
//! capabilities, keeping the widget testable without a rendering engine.

use std::time::Instant;

use crate::debounce::Debouncer;
use crate::geometry::{rect_offset, BoundingBox, RectOffset};
use crate::node::{Display, StateTag, VisualNode};
use crate::theme::ThemeMetrics;

// ============================================================================
// Orientation Strategy
// ============================================================================

/// Which table borders a toolbar instance serves.
///
/// The orientation is a strategy value: it selects the tag set applied to
/// the visual subtree at construction, the main axis measured for
/// [`BorderToolbar::show_in`], and the delete-mask anchoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Lies along a row border; positioned on the y axis
    Horizontal,
    /// Lies along a column border; positioned on the x axis
    Vertical,
}

impl Orientation {
    fn toolbar_tag(self) -> StateTag {
        match self {
            Orientation::Horizontal => StateTag::ToolbarHorizontal,
            Orientation::Vertical => StateTag::ToolbarVertical,
        }
    }

    fn plus_tag(self) -> StateTag {
        match self {
            Orientation::Horizontal => StateTag::PlusHorizontal,
            Orientation::Vertical => StateTag::PlusVertical,
        }
    }

    fn minus_tag(self) -> StateTag {
        match self {
            Orientation::Horizontal => StateTag::MinusHorizontal,
            Orientation::Vertical => StateTag::MinusVertical,
        }
    }

    fn line_tag(self) -> StateTag {
        match self {
            Orientation::Horizontal => StateTag::ShineLineHorizontal,
            Orientation::Vertical => StateTag::ShineLineVertical,
        }
    }

    fn mask_tag(self) -> StateTag {
        match self {
            Orientation::Horizontal => StateTag::MaskHorizontal,
            Orientation::Vertical => StateTag::MaskVertical,
        }
    }
}

/// What the mask is currently previewing. Exactly one mode at a time;
/// the mode is only meaningful while the mask is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    #[default]
    None,
    Add,
    Delete,
}

// ============================================================================
// Host Capabilities
// ============================================================================

/// Callbacks through which the toolbar signals the host editor.
///
/// The toolbar only ever *requests* a mutation; the host performs it (or
/// not) against its own table model.
pub trait ToolbarObserver {
    /// The plus button was clicked at the given pointer page coordinates
    fn on_insert_requested(&mut self, x: f64, y: f64);

    /// The minus button was clicked at the given pointer page coordinates
    fn on_delete_requested(&mut self, x: f64, y: f64);

    /// The pointer left the toolbar onto the table's interactive border
    /// area; the host's own hover logic should take over at these
    /// coordinates so highlighting continues without a gap.
    fn on_hover_handoff(&mut self, _x: f64, _y: f64) {}
}

/// Injected sizing capability: how large the toolbar currently renders
/// along its main axis (height when horizontal, width when vertical).
///
/// Production hosts read this from their layout engine; tests return a
/// fixed value.
pub trait Measure {
    fn toolbar_size(&self, orientation: Orientation) -> f64;
}

/// Injected under-pointer query: whether the element at a point belongs
/// to the table's interactive border-detection area (hosts tag those
/// elements with [`StateTag::TableArea`]).
pub trait SurfaceProbe {
    fn is_border_area(&self, x: f64, y: f64) -> bool;
}

// ============================================================================
// Border Toolbar
// ============================================================================

/// The floating insert/delete control for one table border orientation.
pub struct BorderToolbar {
    orientation: Orientation,
    metrics: ThemeMetrics,

    root: VisualNode,
    plus: VisualNode,
    minus: VisualNode,
    line: VisualNode,
    mask: VisualNode,
    mask_mode: MaskMode,

    // One debouncer per noisy event source, as each wrapped handler keeps
    // its own pending slot.
    plus_hover: Debouncer<()>,
    minus_hover: Debouncer<RectOffset>,
    plus_out: Debouncer<()>,
    minus_out: Debouncer<()>,
}

impl BorderToolbar {
    /// Build a toolbar for one orientation with the host theme's metrics.
    pub fn new(orientation: Orientation, metrics: ThemeMetrics) -> Self {
        let wait = metrics.hover_window();

        // Starts hidden; the host reveals it with show_in once a border
        // hover is detected.
        let root = VisualNode::new(&[StateTag::Hidden, orientation.toolbar_tag()]);
        let plus = VisualNode::new(&[StateTag::PlusButton, orientation.plus_tag()]);
        let minus = VisualNode::new(&[
            StateTag::MinusButton,
            StateTag::RotatedGlyph,
            orientation.minus_tag(),
        ]);
        let line = VisualNode::new(&[StateTag::ShineLine, orientation.line_tag()]);
        let mut mask = VisualNode::new(&[StateTag::Mask, orientation.mask_tag()]);
        mask.set_display(Display::None);

        Self {
            orientation,
            metrics,
            root,
            plus,
            minus,
            line,
            mask,
            mask_mode: MaskMode::None,
            plus_hover: Debouncer::new(wait),
            minus_hover: Debouncer::new(wait),
            plus_out: Debouncer::new(wait),
            minus_out: Debouncer::new(wait),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Make the toolbar and its highlighting line visible. Idempotent.
    pub fn show(&mut self) {
        self.root.remove_tag(StateTag::Hidden);
        self.line.remove_tag(StateTag::Hidden);
    }

    /// Hide the entire toolbar. Idempotent; children keep their own tags.
    pub fn hide(&mut self) {
        self.root.add_tag(StateTag::Hidden);
    }

    /// Hide only the highlighting line, independent of toolbar
    /// visibility — used when a border should stop being emphasized while
    /// the buttons may still be relevant.
    pub fn hide_line(&mut self) {
        self.line.add_tag(StateTag::Hidden);
    }

    /// Whether the toolbar root is currently hidden
    pub fn is_hidden(&self) -> bool {
        self.root.is_hidden()
    }

    /// Place the toolbar at `position` along its perpendicular axis
    /// (y for horizontal, x for vertical) and reveal it.
    ///
    /// Alignment rule: the root is offset back by the toolbar's FULL
    /// measured main-axis size, so it sits just before the target
    /// coordinate rather than centered on it.
    pub fn show_in(&mut self, position: f64, measure: &dyn Measure) {
        let size = measure.toolbar_size(self.orientation).floor();

        match self.orientation {
            Orientation::Horizontal => self.root.set_top(position - size),
            Orientation::Vertical => self.root.set_left(position - size),
        }
        tracing::debug!(
            position,
            size,
            orientation = ?self.orientation,
            "showing border toolbar"
        );
        self.show();
    }

    // =========================================================================
    // Click Handling
    // =========================================================================

    /// Plus button clicked: request an insert at the pointer coordinates.
    pub fn click_plus(&self, x: f64, y: f64, observer: &mut dyn ToolbarObserver) {
        tracing::debug!(x, y, "insert requested from plus button");
        observer.on_insert_requested(x, y);
    }

    /// Minus button clicked: request a delete at the pointer coordinates.
    pub fn click_minus(&self, x: f64, y: f64, observer: &mut dyn ToolbarObserver) {
        tracing::debug!(x, y, "delete requested from minus button");
        observer.on_delete_requested(x, y);
    }

    /// The highlighting line swallows clicks: nothing is requested and the
    /// host should not propagate the event further.
    pub fn click_line(&self) {}

    // =========================================================================
    // Hover State Machine
    // =========================================================================

    /// Pointer entered the plus button. The settled effect (after the
    /// hover window) previews an insert: mask mode Add, anchored at the
    /// start of the cell.
    pub fn hover_plus(&mut self, now: Instant) {
        self.plus_hover.trigger((), now);
    }

    /// Pointer entered the minus button.
    ///
    /// `table` and `button_parent` are the current boxes of the enclosing
    /// table and of the hovered button's parent; the per-edge offset
    /// between them is captured now (boxes are transient) and decides at
    /// settle time which border the button sits on. Absent boxes degrade
    /// to zero offsets and therefore to the stable-anchor fallback.
    pub fn hover_minus(
        &mut self,
        table: Option<&BoundingBox>,
        button_parent: Option<&BoundingBox>,
        now: Instant,
    ) {
        let offset = rect_offset(table, button_parent);
        self.minus_hover.trigger(offset, now);
    }

    /// Pointer left the plus button; the settled effect clears the mask.
    pub fn pointer_out_plus(&mut self, now: Instant) {
        self.plus_out.trigger((), now);
    }

    /// Pointer left the minus button; the settled effect clears the mask.
    pub fn pointer_out_minus(&mut self, now: Instant) {
        self.minus_out.trigger((), now);
    }

    /// Pointer left the toolbar root entirely: hide, then probe what lies
    /// under the pointer — if it is part of the table's border-detection
    /// area, hand the hover back to the host so its own border logic
    /// resumes seamlessly.
    pub fn pointer_leave(
        &mut self,
        x: f64,
        y: f64,
        probe: &dyn SurfaceProbe,
        observer: &mut dyn ToolbarObserver,
    ) {
        self.hide();

        if probe.is_border_area(x, y) {
            tracing::debug!(x, y, "handing hover back to table area");
            observer.on_hover_handoff(x, y);
        }
    }

    /// Fire any debounced effects whose window has settled.
    ///
    /// Out-transitions are polled before hover-transitions: when the
    /// pointer moves between the two buttons, both settle in the same
    /// pump and the surviving hover re-shows the mask.
    pub fn tick(&mut self, now: Instant) {
        let plus_left = self.plus_out.poll(now).is_some();
        let minus_left = self.minus_out.poll(now).is_some();
        if plus_left || minus_left {
            self.clear_mask();
        }

        if self.plus_hover.poll(now).is_some() {
            self.apply_add_mask();
        }
        if let Some(offset) = self.minus_hover.poll(now) {
            self.apply_delete_mask(offset);
        }
    }

    // =========================================================================
    // Mask Placement
    // =========================================================================

    /// Current mask mode
    pub fn mask_mode(&self) -> MaskMode {
        self.mask_mode
    }

    fn apply_add_mask(&mut self) {
        self.mask.remove_tag(StateTag::MaskDelete);
        self.mask.add_tag(StateTag::MaskAdd);
        self.mask_mode = MaskMode::Add;

        // An insert always previews from the start of the cell.
        self.mask.set_top(0.0);
        self.mask.set_left(0.0);
        self.mask.set_display(Display::Block);
        tracing::trace!(orientation = ?self.orientation, "mask previews insert");
    }

    fn apply_delete_mask(&mut self, offset: RectOffset) {
        self.mask.remove_tag(StateTag::MaskAdd);
        self.mask.add_tag(StateTag::MaskDelete);
        self.mask_mode = MaskMode::Delete;

        let m = &self.metrics;
        match self.orientation {
            Orientation::Horizontal => {
                if offset.top_offset == m.first_border_inset
                    && offset.right_offset == m.last_border_offset
                    && offset.bottom_offset != m.last_border_offset
                {
                    // Top border: the first row is deleted.
                    self.mask.set_top(0.0);
                    self.mask.set_left(0.0);
                } else if offset.top_offset != m.first_border_inset
                    && offset.right_offset == m.last_border_offset
                    && offset.bottom_offset == m.last_border_offset
                {
                    // Bottom border: pull back onto the last row.
                    self.mask.set_top(m.mask_pullback);
                    self.mask.set_left(0.0);
                }
                // Other offset combinations keep the previous anchor.
            }
            Orientation::Vertical => {
                if offset.left_offset == m.first_border_inset
                    && offset.bottom_offset == m.last_border_offset
                {
                    // Left border: the first column is deleted.
                    self.mask.set_left(0.0);
                } else if offset.top_offset != m.first_border_inset
                    && offset.right_offset == m.last_border_offset
                    && offset.bottom_offset == m.last_border_offset
                {
                    // Last column: pull back onto it.
                    self.mask.set_left(m.mask_pullback);
                }
                // Other offset combinations keep the previous anchor.
            }
        }

        self.mask.set_display(Display::Block);
        tracing::trace!(orientation = ?self.orientation, ?offset, "mask previews delete");
    }

    fn clear_mask(&mut self) {
        self.mask.remove_tag(StateTag::MaskAdd);
        self.mask.remove_tag(StateTag::MaskDelete);
        self.mask_mode = MaskMode::None;
        self.mask.set_display(Display::None);
        tracing::trace!("mask cleared");
    }

    // =========================================================================
    // Visual Subtree Access
    // =========================================================================

    /// Root visual node, for host embedding
    pub fn root(&self) -> &VisualNode {
        &self.root
    }

    pub fn plus_button(&self) -> &VisualNode {
        &self.plus
    }

    pub fn minus_button(&self) -> &VisualNode {
        &self.minus
    }

    /// The thin line tracing the hovered border
    pub fn highlighting_line(&self) -> &VisualNode {
        &self.line
    }

    /// The insert/delete preview overlay
    pub fn mask(&self) -> &VisualNode {
        &self.mask
    }
}
