//! The layout engine boundary.

mod error;

pub use error::{EngineError, EngineErrorKind};

use crate::commands::CommandList;
use crate::config::{ElementDeclaration, TextConfig};
use crate::coords::{Rect, Vec2, Viewport};
use crate::id::ElementId;
use crate::strings::{ResolveText, TextSpan};

/// Measures a string as it would be laid out: returns width/height in
/// logical pixels.
///
/// Supplied by the embedding application at session construction, because
/// only the render backend knows its fonts. The engine calls it lazily while
/// resolving wrapping and sizing.
pub type MeasureTextFn = Box<dyn FnMut(&str, &TextConfig) -> Vec2>;

/// Receives engine-reported errors. Installed once at initialization.
pub type ErrorSink = Box<dyn FnMut(EngineError)>;

/// Primary-button interaction state as tracked by the engine across frames.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button went down this frame.
    PressedThisFrame,
    /// Button held since an earlier frame.
    Pressed,
    /// Button went up this frame.
    ReleasedThisFrame,
    #[default]
    Released,
}

/// The external immediate-mode layout engine.
///
/// The engine owns the box-model algorithm, text wrapping, scroll state,
/// floating placement and clipping. This workspace never implements any of
/// that; the trait exists so the session in `kiln-ui` can drive any
/// conforming engine, and so tests can substitute a recording stub.
///
/// Call protocol, per frame:
/// 1. `set_viewport`, `set_pointer_state`, `update_scroll_containers`
/// 2. `begin_layout`
/// 3. any number of `open_element` / `configure_element` / `close_element`
///    and `text_element` calls, properly nested
/// 4. `end_layout`, which flushes deferred text measurement through the
///    resolver and returns the frame's command stream
///
/// The session guarantees open/close balance within a frame; engines may
/// treat an imbalanced sequence as undefined behavior.
pub trait LayoutEngine {
    /// One-time setup: initial viewport, text measurement, error reporting.
    fn initialize(&mut self, viewport: Viewport, measure: MeasureTextFn, errors: ErrorSink);

    fn set_viewport(&mut self, viewport: Viewport);

    /// Pointer position in logical pixels plus primary-button state.
    fn set_pointer_state(&mut self, position: Vec2, down: bool);

    /// Scroll delta accumulated this frame, and elapsed seconds for inertia.
    fn update_scroll_containers(&mut self, delta: Vec2, delta_time: f32);

    fn begin_layout(&mut self);

    /// Finalizes the pass. `text` resolves the spans interned this frame.
    fn end_layout(&mut self, text: &dyn ResolveText) -> CommandList;

    fn open_element(&mut self);

    /// Applies `declaration` to the most recently opened element.
    fn configure_element(&mut self, declaration: &ElementDeclaration);

    fn close_element(&mut self);

    /// Self-contained text leaf; never opened or closed.
    fn text_element(&mut self, text: TextSpan, config: &TextConfig);

    /// Current phase of the primary pointer button.
    fn pointer_phase(&self) -> PointerPhase;

    /// Whether the pointer is over the element with `id` this frame.
    fn pointer_over(&self, id: ElementId) -> bool;

    /// Bounding box computed for `id` in the most recent pass.
    fn element_bounds(&self, id: ElementId) -> Option<Rect>;
}
