//! Kiln UI — an ergonomic session layer for driving an immediate-mode
//! layout engine.
//!
//! The engine itself (box model, text wrapping, scrolling, floating,
//! clipping) is an external collaborator behind the
//! [`LayoutEngine`](kiln_core::engine::LayoutEngine) trait. What lives here
//! is the glue a frame loop actually wants:
//!
//! - [`FrameSession`] — begin/end orchestration, frame counting, pass timing
//! - [`ScratchArena`] — per-frame string interning with stable spans
//! - [`NestingGuard`] — self-healing open/close balance tracking
//! - [`Declaration`] — one aggregate for everything an element can configure
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kiln_ui::prelude::*;
//!
//! let mut ui = FrameSession::new(800, 600, engine, Box::new(measure_text));
//!
//! // In your frame loop:
//! ui.begin_frame(&FrameInput {
//!     width,
//!     height,
//!     pointer_pos,
//!     pointer_down,
//!     scroll_delta,
//!     delta_time,
//! });
//!
//! ui.element(
//!     &Declaration::new()
//!         .id("root")
//!         .layout(LayoutConfig { sizing: Sizing::grow(), ..Default::default() })
//!         .background(Color::rgb(0.10, 0.10, 0.14)),
//!     |ui| {
//!         let label = format!("frame {}", ui.frame_count());
//!         ui.text(&label, &TextConfig { font_size: 16, ..Default::default() })
//!     },
//! )?;
//!
//! let commands = ui.end_frame();
//! // Hand `commands` to your render backend. Text spans resolve through
//! // `ui.resolve_text(..)` until the next `begin_frame`.
//! ```

pub mod arena;
pub mod declaration;
pub mod guard;
pub mod input;
pub mod session;

pub use arena::{ArenaOverflow, DEFAULT_SCRATCH_CAPACITY, ScratchArena};
pub use declaration::Declaration;
pub use guard::NestingGuard;
pub use input::FrameInput;
pub use session::FrameSession;

/// Everything a layout-authoring call site needs — import this in your
/// frame-loop files.
pub mod prelude {
    pub use crate::arena::ArenaOverflow;
    pub use crate::declaration::Declaration;
    pub use crate::input::FrameInput;
    pub use crate::session::FrameSession;

    pub use kiln_core::commands::{CommandList, RenderCommand};
    pub use kiln_core::config::{
        AlignX, AlignY, AttachPoint, AttachTo, BorderConfig, ChildAlignment, ClipConfig,
        FloatingConfig, ImageConfig, ImageHandle, LayoutConfig, LayoutDirection, Padding,
        PointerCapture, Sizing, SizingAxis, TextAlignment, TextConfig, TextWrapMode,
    };
    pub use kiln_core::coords::{CornerRadius, Rect, Vec2, Viewport};
    pub use kiln_core::engine::{LayoutEngine, MeasureTextFn, PointerPhase};
    pub use kiln_core::id::ElementId;
    pub use kiln_core::paint::Color;
    pub use kiln_core::strings::{ResolveText, TextSpan};
}
