//! Kiln core crate.
//!
//! Boundary types shared between the frame session in `kiln-ui`, the external
//! layout engine driven through [`engine::LayoutEngine`], and the render
//! backends that consume the engine's command stream.

pub mod commands;
pub mod config;
pub mod coords;
pub mod engine;
pub mod id;
pub mod logging;
pub mod paint;
pub mod strings;
