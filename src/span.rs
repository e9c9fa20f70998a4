//! Byte spans within a single source line.
//!
//! Offsets are UTF-8 byte positions into the line the match came from, so a
//! span always lies on char boundaries of that line.

use std::ops::Range;

/// Half-open byte range `[start, end)` inside one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSpan {
    pub start: usize,
    pub end: usize,
}

impl ByteSpan {
    /// Create a span. `end` is exclusive.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Two spans intersect when they share at least one byte.
    ///
    /// Touching spans (`a.end == b.start`) do not intersect.
    pub const fn intersects(&self, other: &ByteSpan) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl From<Range<usize>> for ByteSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
