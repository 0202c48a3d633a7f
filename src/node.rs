//! Abstracted visual subtree for the toolbar
//!
//! The toolbar never touches a concrete rendering tree. Its visual state
//! lives in [`VisualNode`]s carrying opaque [`StateTag`]s — the styling
//! contract with the host: each tag has a stable string name the host
//! stylesheet defines visual treatment for. The host mounts the nodes,
//! renders them however it likes, and reads tags, inline offsets, and the
//! display flag to decide what to draw.

// ============================================================================
// Styling Contract
// ============================================================================

/// Named visual states the host stylesheet keys on.
///
/// Tags are opaque to this crate: adding or removing one changes no
/// behavior here beyond the tag set itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTag {
    /// The whole node is invisible
    Hidden,
    /// Root of a toolbar laid along a horizontal border
    ToolbarHorizontal,
    /// Root of a toolbar laid along a vertical border
    ToolbarVertical,
    /// The thin line tracing the hovered border
    ShineLine,
    ShineLineHorizontal,
    ShineLineVertical,
    /// Semi-transparent insert/delete preview overlay
    Mask,
    /// Mask previews an insertion
    MaskAdd,
    /// Mask previews a deletion
    MaskDelete,
    MaskHorizontal,
    MaskVertical,
    /// Insert-row/column button
    PlusButton,
    PlusHorizontal,
    PlusVertical,
    /// Delete-row/column button
    MinusButton,
    MinusHorizontal,
    MinusVertical,
    /// The minus button reuses the plus glyph rotated 45 degrees
    RotatedGlyph,
    /// Interactive border-detection area of the table surface; hosts tag
    /// their grid cells with this so hover handoff can find its way back
    TableArea,
}

impl StateTag {
    /// Stable class-name form of the tag, the key the host stylesheet uses
    pub fn as_str(self) -> &'static str {
        match self {
            StateTag::Hidden => "tb-toolbar--hidden",
            StateTag::ToolbarHorizontal => "tb-toolbar--hor",
            StateTag::ToolbarVertical => "tb-toolbar--ver",
            StateTag::ShineLine => "tb-toolbar__shine-line",
            StateTag::ShineLineHorizontal => "tb-toolbar__shine-line--hor",
            StateTag::ShineLineVertical => "tb-toolbar__shine-line--ver",
            StateTag::Mask => "tb-toolbar__mask",
            StateTag::MaskAdd => "tb-toolbar__mask--add",
            StateTag::MaskDelete => "tb-toolbar__mask--delete",
            StateTag::MaskHorizontal => "tb-toolbar__mask--hor",
            StateTag::MaskVertical => "tb-toolbar__mask--ver",
            StateTag::PlusButton => "tb-toolbar__plus",
            StateTag::PlusHorizontal => "tb-toolbar__plus--hor",
            StateTag::PlusVertical => "tb-toolbar__plus--ver",
            StateTag::MinusButton => "tb-toolbar__minus",
            StateTag::MinusHorizontal => "tb-toolbar__minus--hor",
            StateTag::MinusVertical => "tb-toolbar__minus--ver",
            StateTag::RotatedGlyph => "tb-toolbar__glyph--rotated",
            StateTag::TableArea => "tb-table__area",
        }
    }
}

// ============================================================================
// Visual Node
// ============================================================================

/// Whether a node takes part in rendering at all (distinct from the
/// [`StateTag::Hidden`] tag, which hides without collapsing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// One node of the toolbar's visual subtree: a tag set, optional inline
/// top/left offsets (px, relative to the node's layout position), and a
/// display flag.
#[derive(Debug, Clone, Default)]
pub struct VisualNode {
    tags: Vec<StateTag>,
    top: Option<f64>,
    left: Option<f64>,
    display: Display,
}

impl VisualNode {
    /// Construct a node with an initial tag set
    pub fn new(tags: &[StateTag]) -> Self {
        Self {
            tags: tags.to_vec(),
            top: None,
            left: None,
            display: Display::Block,
        }
    }

    /// Add a tag; already-present tags are not duplicated
    pub fn add_tag(&mut self, tag: StateTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remove a tag if present
    pub fn remove_tag(&mut self, tag: StateTag) {
        self.tags.retain(|t| *t != tag);
    }

    /// Whether the tag is currently set
    pub fn has_tag(&self, tag: StateTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Current tag set, in insertion order
    pub fn tags(&self) -> &[StateTag] {
        &self.tags
    }

    /// Shorthand for the hidden tag
    pub fn is_hidden(&self) -> bool {
        self.has_tag(StateTag::Hidden)
    }

    pub fn set_top(&mut self, top: f64) {
        self.top = Some(top);
    }

    pub fn set_left(&mut self, left: f64) {
        self.left = Some(left);
    }

    /// Inline top offset in px, if one has been set
    pub fn top(&self) -> Option<f64> {
        self.top
    }

    /// Inline left offset in px, if one has been set
    pub fn left(&self) -> Option<f64> {
        self.left
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn display(&self) -> Display {
        self.display
    }
}
