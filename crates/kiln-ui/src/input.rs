use kiln_core::coords::Vec2;

/// Snapshot of host-window state for one frame.
///
/// Built by the embedding application from its windowing layer each frame
/// and handed to [`FrameSession::begin_frame`](crate::session::FrameSession::begin_frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Window width in logical pixels. Zero is tolerated and clamped to 1.
    pub width: u32,
    /// Window height in logical pixels. Zero is tolerated and clamped to 1.
    pub height: u32,
    /// Pointer position in logical pixels.
    pub pointer_pos: Vec2,
    /// Whether the primary button is down.
    pub pointer_down: bool,
    /// Scroll wheel / trackpad delta accumulated this frame.
    pub scroll_delta: Vec2,
    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pointer_pos: Vec2::zero(),
            pointer_down: false,
            scroll_delta: Vec2::zero(),
            delta_time: 0.0,
        }
    }
}
