//! Authoring-side element declarations.

use kiln_core::config::{BorderConfig, ClipConfig, FloatingConfig, ImageConfig, LayoutConfig};
use kiln_core::coords::CornerRadius;
use kiln_core::paint::Color;

/// Everything configurable on a single element, gathered into one aggregate
/// with chainable setters.
///
/// The id is a borrowed label; the session interns and hashes it when the
/// element is opened, so building a `Declaration` allocates nothing.
///
/// # Example
/// ```rust,ignore
/// Declaration::new()
///     .id("sidebar")
///     .layout(LayoutConfig {
///         sizing: Sizing::grow_height_fixed_width(240.0),
///         padding: Padding::all(8),
///         direction: LayoutDirection::TopToBottom,
///         ..Default::default()
///     })
///     .background(Color::rgb(0.12, 0.12, 0.16))
///     .corner_radius(CornerRadius::all(6.0))
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Declaration<'a> {
    pub id: Option<&'a str>,
    pub layout: LayoutConfig,
    pub background_color: Option<Color>,
    pub corner_radius: CornerRadius,
    pub clip: Option<ClipConfig>,
    pub floating: Option<FloatingConfig>,
    pub border: Option<BorderConfig>,
    pub image: Option<ImageConfig>,
}

impl<'a> Declaration<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used for hover, pressed-state and bounds queries.
    pub fn id(mut self, label: &'a str) -> Self {
        self.id = Some(label);
        self
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Makes the element a clipping / scrolling container.
    pub fn clip(mut self, clip: ClipConfig) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Takes the element out of normal flow.
    pub fn floating(mut self, floating: FloatingConfig) -> Self {
        self.floating = Some(floating);
        self
    }

    pub fn border(mut self, border: BorderConfig) -> Self {
        self.border = Some(border);
        self
    }

    pub fn image(mut self, image: ImageConfig) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::config::Sizing;

    #[test]
    fn setters_compose() {
        let decl = Declaration::new()
            .id("panel")
            .layout(LayoutConfig { sizing: Sizing::grow(), ..Default::default() })
            .background(Color::black())
            .corner_radius(CornerRadius::all(4.0));

        assert_eq!(decl.id, Some("panel"));
        assert_eq!(decl.layout.sizing, Sizing::grow());
        assert_eq!(decl.background_color, Some(Color::black()));
        assert_eq!(decl.corner_radius, CornerRadius::all(4.0));
        assert_eq!(decl.border, None);
    }
}
