use crate::paint::Color;

/// Wrapping behavior for text elements.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextWrapMode {
    /// Break at word boundaries when a line exceeds the available width.
    #[default]
    Words,
    /// Only break on explicit newlines in the source string.
    Newlines,
    /// Never wrap.
    None,
}

/// Horizontal alignment of text within its element bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Style for a text element.
///
/// `font_id` is an opaque key into whatever font store the render backend
/// keeps; the engine only threads it through to the measurement callback and
/// the emitted text commands.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextConfig {
    pub color: Color,
    pub font_id: u16,
    /// Font size in logical pixels.
    pub font_size: u16,
    /// Extra spacing between characters, logical pixels.
    pub letter_spacing: u16,
    /// Line height override; 0 means derive from the font.
    pub line_height: u16,
    pub wrap_mode: TextWrapMode,
    pub alignment: TextAlignment,
}
