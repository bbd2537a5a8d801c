use crate::config::{BorderConfig, ImageHandle, TextConfig};
use crate::coords::{CornerRadius, Rect};
use crate::paint::Color;
use crate::strings::TextSpan;

/// Filled rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectangleCommand {
    pub bounds: Rect,
    pub color: Color,
    pub corner_radius: CornerRadius,
}

/// Border stroke around an element's bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderCommand {
    pub bounds: Rect,
    pub config: BorderConfig,
    pub corner_radius: CornerRadius,
}

/// Deferred text run.
///
/// `text` resolves against the session arena that was live when the command
/// was produced; render the command before the next frame begins or the span
/// goes stale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextCommand {
    pub bounds: Rect,
    pub text: TextSpan,
    pub config: TextConfig,
}

/// Textured quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageCommand {
    pub bounds: Rect,
    pub handle: ImageHandle,
}

/// Opens a scissor region; commands up to the matching
/// [`RenderCommand::ScissorEnd`] are clipped to `bounds`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScissorCommand {
    pub bounds: Rect,
}

/// One draw instruction produced by the layout engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    Rectangle(RectangleCommand),
    Border(BorderCommand),
    Text(TextCommand),
    Image(ImageCommand),
    ScissorStart(ScissorCommand),
    ScissorEnd,
}

impl RenderCommand {
    /// Bounding box of the command, where it has one.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rectangle(c) => Some(c.bounds),
            Self::Border(c) => Some(c.bounds),
            Self::Text(c) => Some(c.bounds),
            Self::Image(c) => Some(c.bounds),
            Self::ScissorStart(c) => Some(c.bounds),
            Self::ScissorEnd => None,
        }
    }
}
