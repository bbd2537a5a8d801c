use crate::coords::Vec2;
use crate::id::ElementId;

/// Anchor point on an element's bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AttachPoint {
    #[default]
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    CenterCenter,
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
}

/// What a floating element is positioned relative to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AttachTo {
    /// The element it was declared under.
    #[default]
    Parent,
    /// An arbitrary element, found by id.
    Element(ElementId),
    /// The viewport root.
    Root,
}

/// Whether a floating element captures pointer events or lets them fall
/// through to whatever is underneath.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PointerCapture {
    #[default]
    Capture,
    Passthrough,
}

/// Configuration for a floating (out-of-flow) element: tooltips, dropdowns,
/// context menus.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FloatingConfig {
    /// Offset from the computed attach position, logical pixels.
    pub offset: Vec2,
    /// Extra size added on top of the attached element's size.
    pub expand: Vec2,
    /// Anchor on the floating element itself.
    pub attach_element: AttachPoint,
    /// Anchor on the attach target.
    pub attach_parent: AttachPoint,
    /// Stacking order relative to other floating elements.
    pub z_index: i16,
    pub attach_to: AttachTo,
    pub pointer_capture: PointerCapture,
}
