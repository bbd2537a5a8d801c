//! Frame orchestration.

use std::time::{Duration, Instant};

use log::{error, info};

use kiln_core::commands::CommandList;
use kiln_core::config::{ElementDeclaration, TextConfig};
use kiln_core::coords::{Rect, Viewport};
use kiln_core::engine::{LayoutEngine, MeasureTextFn, PointerPhase};
use kiln_core::id::ElementId;
use kiln_core::strings::{ResolveText, TextSpan};

use crate::arena::{ArenaOverflow, DEFAULT_SCRATCH_CAPACITY, ScratchArena};
use crate::declaration::Declaration;
use crate::guard::NestingGuard;
use crate::input::FrameInput;

/// Interval, in frames, between periodic layout-time reports.
const FRAME_TIME_REPORT_INTERVAL: u32 = 180;

/// Drives one layout engine through begin/declare/end cycles, frame after
/// frame.
///
/// The session owns its engine, its scratch arena and its nesting guard for
/// its whole lifetime; none of that state is shared or global. A host that
/// wants to build layouts on several threads runs one independent session
/// per thread; sessions are plain owned data with no interior locking.
///
/// ```rust,ignore
/// let mut ui = FrameSession::new(800, 600, engine, Box::new(measure_text));
///
/// // Frame loop:
/// ui.begin_frame(&input);
/// ui.element(
///     &Declaration::new().id("root").layout(LayoutConfig {
///         sizing: Sizing::grow(),
///         ..Default::default()
///     }),
///     |ui| ui.text("hello", &TextConfig { font_size: 16, ..Default::default() }),
/// )?;
/// let commands = ui.end_frame();
/// // Hand `commands` to a render backend; text spans resolve through
/// // `ui.resolve_text` until the next `begin_frame`.
/// ```
pub struct FrameSession<E: LayoutEngine> {
    engine: E,
    arena: ScratchArena,
    guard: NestingGuard,

    frame_count: u32,
    window_width: u32,
    window_height: u32,

    frame_start: Instant,
    frame_time: Duration,
    max_frame_time: Duration,
}

impl<E: LayoutEngine> FrameSession<E> {
    /// Creates a session and initializes the engine.
    ///
    /// `measure` is the text-measurement callback the engine calls while
    /// resolving wrapping; the embedding application supplies it because
    /// only the render backend knows its fonts. Engine errors are forwarded
    /// to the log and never interpreted here.
    ///
    /// Zero window dimensions are clamped to 1: the engine treats a
    /// zero-sized viewport as invalid input.
    pub fn new(width: u32, height: u32, engine: E, measure: MeasureTextFn) -> Self {
        Self::with_scratch_capacity(width, height, engine, measure, DEFAULT_SCRATCH_CAPACITY)
    }

    /// Like [`new`](Self::new), with an explicit scratch-arena capacity in
    /// bytes.
    pub fn with_scratch_capacity(
        width: u32,
        height: u32,
        mut engine: E,
        measure: MeasureTextFn,
        scratch_capacity: usize,
    ) -> Self {
        let window_width = width.max(1);
        let window_height = height.max(1);

        engine.initialize(
            Viewport::new(window_width as f32, window_height as f32),
            measure,
            Box::new(|err| error!("{err}")),
        );

        Self {
            engine,
            arena: ScratchArena::new(scratch_capacity),
            guard: NestingGuard::new(),
            frame_count: 0,
            window_width,
            window_height,
            frame_start: Instant::now(),
            frame_time: Duration::ZERO,
            max_frame_time: Duration::ZERO,
        }
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Starts a layout pass.
    ///
    /// Forwards window, pointer and scroll state to the engine, advances the
    /// frame counter (wrapping to 0 at `u32::MAX`), reclaims the scratch
    /// arena, and opens the engine's declaration phase. Call exactly once
    /// per frame, paired with [`end_frame`](Self::end_frame).
    pub fn begin_frame(&mut self, input: &FrameInput) {
        self.window_width = input.width.max(1);
        self.window_height = input.height.max(1);

        self.engine.set_viewport(Viewport::new(
            self.window_width as f32,
            self.window_height as f32,
        ));
        self.engine.set_pointer_state(input.pointer_pos, input.pointer_down);
        self.engine.update_scroll_containers(input.scroll_delta, input.delta_time);

        self.frame_count = self.frame_count.wrapping_add(1);
        self.arena.reset();
        self.frame_start = Instant::now();

        self.engine.begin_layout();
    }

    /// Finishes the layout pass and returns the frame's draw commands.
    ///
    /// Any elements still open are closed here (with a one-shot warning), so
    /// an authoring mistake in this frame cannot corrupt the next one.
    pub fn end_frame(&mut self) -> CommandList {
        let engine = &mut self.engine;
        self.guard.close_all(|| engine.close_element());

        self.frame_time = self.frame_start.elapsed();
        if self.frame_count % FRAME_TIME_REPORT_INTERVAL == 0 {
            info!("layout pass completed in {} us", self.frame_time.as_micros());
        }
        if self.frame_time > self.max_frame_time {
            self.max_frame_time = self.frame_time;
            info!("new maximum layout time: {} us", self.max_frame_time.as_micros());
        }

        self.engine.end_layout(&self.arena)
    }

    // ── element authoring ─────────────────────────────────────────────────

    /// Declares an element with children.
    ///
    /// Opens the element, applies `declaration`, runs `children`, closes the
    /// element. The element is closed even when `children` fails, so an
    /// arena overflow mid-subtree does not unbalance the frame.
    pub fn element(
        &mut self,
        declaration: &Declaration<'_>,
        children: impl FnOnce(&mut Self) -> Result<(), ArenaOverflow>,
    ) -> Result<(), ArenaOverflow> {
        self.open_element(declaration)?;
        let result = children(self);
        self.close_element();
        result
    }

    /// Declares an element with no children.
    pub fn leaf_element(&mut self, declaration: &Declaration<'_>) -> Result<(), ArenaOverflow> {
        self.open_element(declaration)?;
        self.close_element();
        Ok(())
    }

    /// Opens an element manually. Pair with [`close_element`](Self::close_element).
    ///
    /// Prefer [`element`](Self::element); the manual pair exists for call
    /// sites whose children are produced by code that cannot run inside a
    /// closure.
    pub fn open_element(&mut self, declaration: &Declaration<'_>) -> Result<(), ArenaOverflow> {
        // Resolve before opening so a failed id intern leaves nothing dangling.
        let resolved = self.resolve_declaration(declaration)?;
        self.engine.open_element();
        self.guard.open();
        self.engine.configure_element(&resolved);
        Ok(())
    }

    /// Closes the most recently opened element.
    ///
    /// Extra calls are absorbed by the nesting guard (with a one-shot
    /// warning) and never reach the engine.
    pub fn close_element(&mut self) {
        if self.guard.close() {
            self.engine.close_element();
        }
    }

    /// Declares a self-contained text leaf.
    ///
    /// The string is copied into the scratch arena; the engine sees a span
    /// that stays valid for the rest of the pass, which is exactly as long
    /// as it needs it (text measurement is deferred to layout end).
    pub fn text(&mut self, text: &str, config: &TextConfig) -> Result<(), ArenaOverflow> {
        let span = self.arena.insert(text)?;
        self.engine.text_element(span, config);
        Ok(())
    }

    // ── strings ───────────────────────────────────────────────────────────

    /// Interns a string for this frame and returns its engine-compatible
    /// span.
    pub fn intern(&mut self, text: &str) -> Result<TextSpan, ArenaOverflow> {
        self.arena.insert(text)
    }

    /// Resolves a span minted this frame, for render backends consuming
    /// [`TextCommand`](kiln_core::commands::TextCommand)s. Stale spans
    /// resolve to `None`.
    pub fn resolve_text(&self, span: TextSpan) -> Option<&str> {
        self.arena.resolve(span)
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Hashes an id label the way the engine does.
    pub fn element_id(&self, label: &str) -> ElementId {
        ElementId::from_label(label)
    }

    /// Whether the pointer is currently over the element labeled `label`.
    pub fn pointer_over(&self, label: &str) -> bool {
        self.engine.pointer_over(ElementId::from_label(label))
    }

    /// `true` exactly on the frame the primary button went down.
    pub fn mouse_pressed(&self) -> bool {
        self.engine.pointer_phase() == PointerPhase::PressedThisFrame
    }

    /// Bounding box the engine computed for `label` in the latest pass.
    pub fn element_bounds(&self, label: &str) -> Option<Rect> {
        self.engine.element_bounds(ElementId::from_label(label))
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    /// Frames begun since the session was created; wraps at `u32::MAX`.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Duration of the most recently completed layout pass.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Longest layout pass observed over the session's lifetime.
    pub fn max_frame_time(&self) -> Duration {
        self.max_frame_time
    }

    /// The engine, for host-specific calls outside the session protocol.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    fn resolve_declaration(
        &mut self,
        declaration: &Declaration<'_>,
    ) -> Result<ElementDeclaration, ArenaOverflow> {
        let (id, id_label) = match declaration.id {
            Some(label) => {
                let span = self.arena.insert(label)?;
                (Some(ElementId::from_label(label)), Some(span))
            }
            None => (None, None),
        };

        Ok(ElementDeclaration {
            id,
            id_label,
            layout: declaration.layout,
            background_color: declaration.background_color,
            corner_radius: declaration.corner_radius,
            clip: declaration.clip,
            floating: declaration.floating,
            border: declaration.border,
            image: declaration.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use kiln_core::commands::{RectangleCommand, RenderCommand};
    use kiln_core::coords::{CornerRadius, Vec2};
    use kiln_core::engine::ErrorSink;
    use kiln_core::paint::Color;

    #[derive(Debug, Default)]
    struct CallLog {
        initialized: bool,
        viewport: Viewport,
        pointer: (Vec2, bool),
        scroll: (Vec2, f32),
        begins: u32,
        ends: u32,
        opens: u32,
        closes: u32,
        configured: Vec<ElementDeclaration>,
        texts: Vec<(TextSpan, TextConfig)>,
        /// Text spans resolved through the arena at `end_layout` time.
        resolved_texts: Vec<String>,
    }

    /// Recording engine stub: counts calls and resolves deferred text at
    /// layout end, like the real engine would for measurement.
    #[derive(Default)]
    struct StubEngine {
        log: Rc<RefCell<CallLog>>,
        phase: PointerPhase,
        hover: Option<ElementId>,
        bounds: Option<(ElementId, Rect)>,
    }

    impl StubEngine {
        fn with_log() -> (Self, Rc<RefCell<CallLog>>) {
            let log = Rc::new(RefCell::new(CallLog::default()));
            (Self { log: Rc::clone(&log), ..Default::default() }, log)
        }
    }

    impl LayoutEngine for StubEngine {
        fn initialize(&mut self, viewport: Viewport, _measure: MeasureTextFn, _errors: ErrorSink) {
            let mut log = self.log.borrow_mut();
            log.initialized = true;
            log.viewport = viewport;
        }

        fn set_viewport(&mut self, viewport: Viewport) {
            self.log.borrow_mut().viewport = viewport;
        }

        fn set_pointer_state(&mut self, position: Vec2, down: bool) {
            self.log.borrow_mut().pointer = (position, down);
        }

        fn update_scroll_containers(&mut self, delta: Vec2, delta_time: f32) {
            self.log.borrow_mut().scroll = (delta, delta_time);
        }

        fn begin_layout(&mut self) {
            self.log.borrow_mut().begins += 1;
        }

        fn end_layout(&mut self, text: &dyn ResolveText) -> CommandList {
            let mut log = self.log.borrow_mut();
            log.ends += 1;

            let resolved: Vec<String> = log
                .texts
                .iter()
                .filter_map(|(span, _)| text.resolve(*span).map(str::to_owned))
                .collect();
            log.resolved_texts = resolved;

            let mut commands = CommandList::new();
            commands.push(RenderCommand::Rectangle(RectangleCommand {
                bounds: Rect::new(0.0, 0.0, log.viewport.width, log.viewport.height),
                color: Color::black(),
                corner_radius: CornerRadius::default(),
            }));
            commands
        }

        fn open_element(&mut self) {
            self.log.borrow_mut().opens += 1;
        }

        fn configure_element(&mut self, declaration: &ElementDeclaration) {
            self.log.borrow_mut().configured.push(*declaration);
        }

        fn close_element(&mut self) {
            self.log.borrow_mut().closes += 1;
        }

        fn text_element(&mut self, text: TextSpan, config: &TextConfig) {
            self.log.borrow_mut().texts.push((text, *config));
        }

        fn pointer_phase(&self) -> PointerPhase {
            self.phase
        }

        fn pointer_over(&self, id: ElementId) -> bool {
            self.hover == Some(id)
        }

        fn element_bounds(&self, id: ElementId) -> Option<Rect> {
            match self.bounds {
                Some((bid, rect)) if bid == id => Some(rect),
                _ => None,
            }
        }
    }

    fn measure_stub() -> MeasureTextFn {
        Box::new(|text, config| {
            Vec2::new(text.len() as f32 * 8.0, f32::from(config.font_size.max(1)))
        })
    }

    fn session() -> (FrameSession<StubEngine>, Rc<RefCell<CallLog>>) {
        let (engine, log) = StubEngine::with_log();
        (FrameSession::new(800, 600, engine, measure_stub()), log)
    }

    fn input_800x600() -> FrameInput {
        FrameInput {
            width: 800,
            height: 600,
            delta_time: 0.016,
            ..Default::default()
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_initializes_engine_with_viewport() {
        let (_session, log) = session();
        let log = log.borrow();
        assert!(log.initialized);
        assert_eq!(log.viewport, Viewport::new(800.0, 600.0));
    }

    #[test]
    fn zero_window_is_clamped_at_construction() {
        let (engine, log) = StubEngine::with_log();
        let session = FrameSession::new(0, 0, engine, measure_stub());
        assert_eq!(session.window_width(), 1);
        assert_eq!(session.window_height(), 1);
        assert_eq!(log.borrow().viewport, Viewport::new(1.0, 1.0));
    }

    // ── begin_frame ───────────────────────────────────────────────────────

    #[test]
    fn begin_frame_forwards_state() {
        let (mut session, log) = session();
        session.begin_frame(&FrameInput {
            width: 1024,
            height: 768,
            pointer_pos: Vec2::new(100.0, 50.0),
            pointer_down: true,
            scroll_delta: Vec2::new(0.0, -3.0),
            delta_time: 0.016,
        });

        let log = log.borrow();
        assert_eq!(log.viewport, Viewport::new(1024.0, 768.0));
        assert_eq!(log.pointer, (Vec2::new(100.0, 50.0), true));
        assert_eq!(log.scroll, (Vec2::new(0.0, -3.0), 0.016));
        assert_eq!(log.begins, 1);
        assert_eq!(session.frame_count(), 1);
        assert_eq!(session.window_width(), 1024);
        assert_eq!(session.window_height(), 768);
    }

    #[test]
    fn zero_viewport_is_never_forwarded() {
        let (mut session, log) = session();
        session.begin_frame(&FrameInput { width: 0, height: 0, ..Default::default() });

        assert_eq!(session.window_width(), 1);
        assert_eq!(session.window_height(), 1);
        assert_eq!(log.borrow().viewport, Viewport::new(1.0, 1.0));
    }

    #[test]
    fn frame_counter_wraps_to_zero_at_max() {
        let (mut session, _log) = session();
        session.frame_count = u32::MAX - 1;

        session.begin_frame(&input_800x600());
        assert_eq!(session.frame_count(), u32::MAX);

        session.begin_frame(&input_800x600());
        assert_eq!(session.frame_count(), 0);
    }

    #[test]
    fn begin_frame_reclaims_the_arena() {
        let (mut session, _log) = session();
        session.begin_frame(&input_800x600());
        let span = session.intern("transient").unwrap();
        assert_eq!(session.resolve_text(span), Some("transient"));

        session.begin_frame(&input_800x600());
        assert_eq!(session.resolve_text(span), None);
        // The arena starts over from the beginning.
        assert_eq!(session.intern("fresh").unwrap().start, 0);
    }

    // ── nesting recovery ──────────────────────────────────────────────────

    #[test]
    fn unclosed_elements_are_recovered_at_end_frame() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());

        for _ in 0..3 {
            session.open_element(&Declaration::new()).unwrap();
        }
        let commands = session.end_frame();

        let log = log.borrow();
        assert_eq!(log.opens, 3);
        assert_eq!(log.closes, 3);
        assert_eq!(session.guard.depth(), 0);
        assert!(session.guard.warned_unclosed());
        assert!(!commands.is_empty());
    }

    #[test]
    fn excess_closes_never_reach_the_engine() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());

        session.open_element(&Declaration::new()).unwrap();
        session.close_element();
        session.close_element();
        session.close_element();

        assert_eq!(log.borrow().closes, 1);
        assert!(session.guard.warned_underflow());

        let _ = session.end_frame();
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn element_nests_and_balances() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());

        session
            .element(&Declaration::new().id("outer"), |ui| {
                ui.element(&Declaration::new().id("inner"), |ui| {
                    ui.text("label", &TextConfig::default())
                })
            })
            .unwrap();

        let log = log.borrow();
        assert_eq!(log.opens, 2);
        assert_eq!(log.closes, 2);
        assert_eq!(log.texts.len(), 1);
        assert_eq!(session.guard.depth(), 0);
    }

    #[test]
    fn element_closes_even_when_children_fail() {
        let (engine, log) = StubEngine::with_log();
        let mut session =
            FrameSession::with_scratch_capacity(800, 600, engine, measure_stub(), 8);
        session.begin_frame(&input_800x600());

        let result = session.element(&Declaration::new(), |ui| {
            ui.text("far too long for eight bytes", &TextConfig::default())
        });

        assert!(result.is_err());
        let log = log.borrow();
        assert_eq!(log.opens, 1);
        assert_eq!(log.closes, 1);
        assert_eq!(session.guard.depth(), 0);
    }

    // ── declarations ──────────────────────────────────────────────────────

    #[test]
    fn id_labels_are_hashed_and_interned() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());
        session.leaf_element(&Declaration::new().id("button")).unwrap();

        let log = log.borrow();
        let decl = &log.configured[0];
        assert_eq!(decl.id, Some(ElementId::from_label("button")));
        let label = decl.id_label.expect("id label should be interned");
        assert_eq!(session.resolve_text(label), Some("button"));
    }

    #[test]
    fn anonymous_elements_carry_no_id() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());
        session.leaf_element(&Declaration::new()).unwrap();

        let log = log.borrow();
        assert_eq!(log.configured[0].id, None);
        assert_eq!(log.configured[0].id_label, None);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_spans_resolve_at_layout_end() {
        let (mut session, log) = session();
        session.begin_frame(&input_800x600());
        session.text("fps: 60", &TextConfig::default()).unwrap();
        session.text("frame 1", &TextConfig::default()).unwrap();
        let _ = session.end_frame();

        assert_eq!(log.borrow().resolved_texts, vec!["fps: 60", "frame 1"]);
    }

    #[test]
    fn arena_overflow_aborts_the_text_call() {
        let (engine, log) = StubEngine::with_log();
        let mut session =
            FrameSession::with_scratch_capacity(800, 600, engine, measure_stub(), 10);
        session.begin_frame(&input_800x600());

        session.text("hello", &TextConfig::default()).unwrap();
        let err = session.text("world!", &TextConfig::default()).unwrap_err();

        assert_eq!(err, ArenaOverflow { required: 7, remaining: 4 });
        assert_eq!(log.borrow().texts.len(), 1);
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_over_matches_hashed_label() {
        let (mut engine, _log) = StubEngine::with_log();
        engine.hover = Some(ElementId::from_label("button"));
        let session = FrameSession::new(800, 600, engine, measure_stub());

        assert!(session.pointer_over("button"));
        assert!(!session.pointer_over("other"));
    }

    #[test]
    fn mouse_pressed_only_on_press_frame() {
        let (mut engine, _log) = StubEngine::with_log();
        engine.phase = PointerPhase::PressedThisFrame;
        let session = FrameSession::new(800, 600, engine, measure_stub());
        assert!(session.mouse_pressed());

        let (mut engine, _log) = StubEngine::with_log();
        engine.phase = PointerPhase::Pressed;
        let session = FrameSession::new(800, 600, engine, measure_stub());
        assert!(!session.mouse_pressed());
    }

    #[test]
    fn element_bounds_queries_by_label() {
        let (mut engine, _log) = StubEngine::with_log();
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        engine.bounds = Some((ElementId::from_label("panel"), rect));
        let session = FrameSession::new(800, 600, engine, measure_stub());

        assert_eq!(session.element_bounds("panel"), Some(rect));
        assert_eq!(session.element_bounds("missing"), None);
    }

    // ── timing ────────────────────────────────────────────────────────────

    #[test]
    fn frame_time_tracks_maximum() {
        let (mut session, _log) = session();
        session.begin_frame(&input_800x600());
        let _ = session.end_frame();

        assert!(session.max_frame_time() >= session.frame_time());

        let first_max = session.max_frame_time();
        session.begin_frame(&input_800x600());
        let _ = session.end_frame();
        assert!(session.max_frame_time() >= first_max);
    }
}
