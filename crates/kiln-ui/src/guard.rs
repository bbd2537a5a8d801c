//! Element nesting bookkeeping.

use log::warn;

/// Tracks open/close balance for the elements declared in one frame.
///
/// An immediate-mode tree is rebuilt by plain user code every frame, and a
/// forgotten close (or one close too many) in frame N would otherwise leave
/// the engine's internal element stack tilted for every frame after it. The
/// guard absorbs both mistakes: excess closes saturate at zero and are not
/// forwarded, and [`close_all`](Self::close_all) drains whatever is still
/// open at frame end.
///
/// Each kind of mistake is reported once per session, not once per frame:
/// a layout bug at 60 frames per second must not flood the log. The flags
/// live on the guard itself so independent sessions warn independently.
#[derive(Debug, Default)]
pub struct NestingGuard {
    depth: u32,
    warned_unclosed: bool,
    warned_underflow: bool,
}

impl NestingGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an element open.
    #[inline]
    pub fn open(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Records an element close.
    ///
    /// Returns `true` if an element was actually open. On `false` the caller
    /// must not forward the close to the engine, so the engine's stack stays
    /// balanced even when authoring code over-closes.
    pub fn close(&mut self) -> bool {
        if self.depth == 0 {
            if !self.warned_underflow {
                warn!("close_element called but all elements are already closed");
                self.warned_underflow = true;
            }
            false
        } else {
            self.depth -= 1;
            true
        }
    }

    /// Closes every element still open, invoking `close_one` once per level.
    ///
    /// Runs at frame end so an unclosed element cannot leak into the next
    /// frame's pass. Terminates with depth 0 from any starting state.
    pub fn close_all(&mut self, mut close_one: impl FnMut()) {
        if self.depth > 0 && !self.warned_unclosed {
            warn!("an element was not closed before end of frame");
            self.warned_unclosed = true;
        }
        while self.depth > 0 {
            close_one();
            self.depth -= 1;
        }
    }

    /// Number of currently open elements.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the excess-close warning has fired this session.
    #[inline]
    pub fn warned_underflow(&self) -> bool {
        self.warned_underflow
    }

    /// Whether the unclosed-element warning has fired this session.
    #[inline]
    pub fn warned_unclosed(&self) -> bool {
        self.warned_unclosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── balanced use ──────────────────────────────────────────────────────

    #[test]
    fn balanced_opens_and_closes_return_to_zero() {
        let mut guard = NestingGuard::new();
        guard.open();
        guard.open();
        assert!(guard.close());
        assert!(guard.close());
        assert_eq!(guard.depth(), 0);
        assert!(!guard.warned_underflow());
        assert!(!guard.warned_unclosed());
    }

    // ── underflow ─────────────────────────────────────────────────────────

    #[test]
    fn close_at_zero_saturates_and_warns_once() {
        let mut guard = NestingGuard::new();
        assert!(!guard.close());
        assert_eq!(guard.depth(), 0);
        assert!(guard.warned_underflow());

        // Arbitrarily many repeat violations: still saturated, flag stays set.
        for _ in 0..100 {
            assert!(!guard.close());
        }
        assert_eq!(guard.depth(), 0);
        assert!(guard.warned_underflow());
    }

    #[test]
    fn underflow_then_reopen_still_balances() {
        let mut guard = NestingGuard::new();
        assert!(!guard.close());
        guard.open();
        assert!(guard.close());
        assert_eq!(guard.depth(), 0);
    }

    // ── close_all ─────────────────────────────────────────────────────────

    #[test]
    fn close_all_drains_any_depth() {
        let mut guard = NestingGuard::new();
        for _ in 0..5 {
            guard.open();
        }

        let mut calls = 0;
        guard.close_all(|| calls += 1);

        assert_eq!(calls, 5);
        assert_eq!(guard.depth(), 0);
        assert!(guard.warned_unclosed());
    }

    #[test]
    fn close_all_at_zero_is_silent() {
        let mut guard = NestingGuard::new();
        let mut calls = 0;
        guard.close_all(|| calls += 1);
        assert_eq!(calls, 0);
        assert!(!guard.warned_unclosed());
    }

    #[test]
    fn close_all_terminates_after_excess_closes() {
        let mut guard = NestingGuard::new();
        guard.open();
        assert!(guard.close());
        assert!(!guard.close());
        assert!(!guard.close());
        guard.open();
        guard.open();

        let mut calls = 0;
        guard.close_all(|| calls += 1);
        assert_eq!(calls, 2);
        assert_eq!(guard.depth(), 0);
    }

    #[test]
    fn warning_flags_are_independent() {
        let mut guard = NestingGuard::new();
        guard.close();
        assert!(guard.warned_underflow());
        assert!(!guard.warned_unclosed());

        guard.open();
        guard.close_all(|| {});
        assert!(guard.warned_unclosed());
    }
}
