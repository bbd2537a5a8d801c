use crate::coords::CornerRadius;
use crate::id::ElementId;
use crate::paint::Color;
use crate::strings::TextSpan;

use super::{BorderConfig, ClipConfig, FloatingConfig, ImageConfig, LayoutConfig};

/// Fully resolved element declaration, as handed to the layout engine.
///
/// This is the wire form: the id label has already been interned into the
/// frame arena and hashed by the session. Authoring code builds the
/// borrowing `Declaration` type in `kiln-ui` instead and never constructs
/// one of these directly.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ElementDeclaration {
    pub id: Option<ElementId>,
    /// Span of the id label in the frame arena, kept so engine diagnostics
    /// can echo the human-readable name.
    pub id_label: Option<TextSpan>,
    pub layout: LayoutConfig,
    pub background_color: Option<Color>,
    pub corner_radius: CornerRadius,
    pub clip: Option<ClipConfig>,
    pub floating: Option<FloatingConfig>,
    pub border: Option<BorderConfig>,
    pub image: Option<ImageConfig>,
}
