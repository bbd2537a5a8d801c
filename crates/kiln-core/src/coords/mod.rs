//! Geometry primitives used across the engine boundary.

mod corner_radius;
mod rect;
mod vec2;
mod viewport;

pub use corner_radius::CornerRadius;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
