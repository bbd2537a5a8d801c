/// Sizing behavior for one layout axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SizingAxis {
    /// Shrink to the measured size of children, clamped to `[min, max]`.
    Fit { min: f32, max: f32 },
    /// Expand into leftover parent space, clamped to `[min, max]`.
    Grow { min: f32, max: f32 },
    /// Fraction of the parent's size along this axis, in `[0, 1]`.
    Percent(f32),
    /// Exact size in logical pixels.
    Fixed(f32),
}

impl SizingAxis {
    #[inline]
    pub const fn fit() -> Self {
        Self::Fit { min: 0.0, max: f32::MAX }
    }

    #[inline]
    pub const fn grow() -> Self {
        Self::Grow { min: 0.0, max: f32::MAX }
    }

    #[inline]
    pub const fn fixed(px: f32) -> Self {
        Self::Fixed(px)
    }

    #[inline]
    pub const fn percent(fraction: f32) -> Self {
        Self::Percent(fraction)
    }
}

impl Default for SizingAxis {
    fn default() -> Self {
        Self::fit()
    }
}

/// Sizing for both axes of an element.
///
/// The associated functions cover the combinations that come up constantly
/// when sketching a layout; anything else is a plain struct literal.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sizing {
    pub width: SizingAxis,
    pub height: SizingAxis,
}

impl Sizing {
    #[inline]
    pub const fn new(width: SizingAxis, height: SizingAxis) -> Self {
        Self { width, height }
    }

    /// Exact size on both axes.
    #[inline]
    pub const fn fixed(width: f32, height: f32) -> Self {
        Self::new(SizingAxis::fixed(width), SizingAxis::fixed(height))
    }

    /// Fill leftover parent space on both axes.
    #[inline]
    pub const fn grow() -> Self {
        Self::new(SizingAxis::grow(), SizingAxis::grow())
    }

    /// Fill horizontally, fit children vertically.
    #[inline]
    pub const fn grow_width() -> Self {
        Self::new(SizingAxis::grow(), SizingAxis::fit())
    }

    /// Fit children horizontally, fill vertically.
    #[inline]
    pub const fn grow_height() -> Self {
        Self::new(SizingAxis::fit(), SizingAxis::grow())
    }

    /// Fill horizontally at an exact height.
    #[inline]
    pub const fn grow_width_fixed_height(height: f32) -> Self {
        Self::new(SizingAxis::grow(), SizingAxis::fixed(height))
    }

    /// Fill vertically at an exact width.
    #[inline]
    pub const fn grow_height_fixed_width(width: f32) -> Self {
        Self::new(SizingAxis::fixed(width), SizingAxis::grow())
    }
}
