//! Color types shared by declarations and render commands.

mod color;

pub use color::Color;
