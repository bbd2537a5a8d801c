use crate::coords::Vec2;
use crate::paint::Color;

/// Per-side border widths plus an optional width drawn between children.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BorderConfig {
    pub color: Color,
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
    /// Width of the separator drawn between successive children along the
    /// layout direction.
    pub between_children: u16,
}

impl BorderConfig {
    /// Uniform border on all four outer sides, no child separators.
    #[inline]
    pub const fn outside(color: Color, width: u16) -> Self {
        Self { color, left: width, right: width, top: width, bottom: width, between_children: 0 }
    }
}

/// Reference to a texture owned by the render backend.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// Configuration for an image element.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ImageConfig {
    pub handle: ImageHandle,
    /// Intrinsic size of the source image, used for aspect-preserving layout.
    pub source_dimensions: Vec2,
}

/// Overflow clipping and scrolling for a container.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipConfig {
    pub horizontal: bool,
    pub vertical: bool,
    /// Scroll offset applied to children, logical pixels.
    pub child_offset: Vec2,
}
