//! Per-frame scratch string storage.

use std::fmt;

use kiln_core::strings::{ResolveText, TextSpan};

/// Default backing capacity, in bytes.
///
/// Generous for a UI that interns every label and formatted readout each
/// frame; sessions with unusual text volume can pass their own capacity.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 100_000;

/// An insertion did not fit in the remaining space.
///
/// The arena is left exactly as it was: a failed insert never moves the
/// cursor and never disturbs previously returned spans. Treat this as fatal
/// for the current layout-building call and propagate it; truncating or
/// handing out a colliding span would corrupt on-screen text silently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArenaOverflow {
    /// Bytes the insertion needed, terminator included.
    pub required: usize,
    /// Bytes that were left when the insertion was attempted.
    pub remaining: usize,
}

impl fmt::Display for ArenaOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scratch arena overflow: insertion needs {} bytes, {} remaining",
            self.required, self.remaining
        )
    }
}

impl std::error::Error for ArenaOverflow {}

/// Bump allocator for strings that live exactly one frame.
///
/// The layout engine defers text measurement until the end of a pass, so
/// every string handed to it must stay put for the rest of the frame. The
/// strings themselves are transient (formatted counters, concatenated
/// labels), which makes a monotonic buffer with frame-granularity
/// reclamation the right shape: [`insert`](Self::insert) bumps a cursor,
/// [`reset`](Self::reset) reclaims everything at once when the next pass
/// begins.
#[derive(Debug)]
pub struct ScratchArena {
    buffer: Box<[u8]>,
    cursor: usize,
}

impl ScratchArena {
    /// Creates an arena with `capacity` bytes of backing storage.
    pub fn new(capacity: usize) -> Self {
        Self { buffer: vec![0u8; capacity].into_boxed_slice(), cursor: 0 }
    }

    /// Reclaims the whole buffer.
    ///
    /// Spans from the previous frame are invalid from this point on; the
    /// bytes themselves are overwritten lazily by later inserts.
    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Copies `text` into the buffer and returns its span.
    ///
    /// A single space terminator follows every insertion. The engine's
    /// string views carry an explicit length and are never null-scanned, so
    /// the terminator only has to keep adjacent insertions from touching.
    pub fn insert(&mut self, text: &str) -> Result<TextSpan, ArenaOverflow> {
        let bytes = text.as_bytes();
        let required = bytes.len() + 1;
        let remaining = self.buffer.len() - self.cursor;
        if required > remaining {
            return Err(ArenaOverflow { required, remaining });
        }

        let start = self.cursor;
        self.buffer[start..start + bytes.len()].copy_from_slice(bytes);
        self.buffer[start + bytes.len()] = b' ';
        self.cursor = start + required;

        Ok(TextSpan::new(start, bytes.len()))
    }

    /// Bytes currently in use, terminators included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Total backing capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes still available this frame.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

impl Default for ScratchArena {
    fn default() -> Self {
        Self::new(DEFAULT_SCRATCH_CAPACITY)
    }
}

impl ResolveText for ScratchArena {
    /// `None` for spans that reach past the current cursor (stale or forged)
    /// or that do not cover whole UTF-8 sequences.
    fn resolve(&self, span: TextSpan) -> Option<&str> {
        let end = span.start.checked_add(span.len)?;
        if end > self.cursor {
            return None;
        }
        std::str::from_utf8(&self.buffer[span.start..end]).ok()
    }
}
