//! Line and LineBlock types
//!
//! One `LineBlock` per input line: a break for blank lines, otherwise the
//! ordered segments of that line.

use smallvec::SmallVec;

use super::{Segment, SegmentKind};

/// Segment storage of a single line.
pub type Segments = SmallVec<[Segment; 4]>;

// =============================================================================
// Line
// =============================================================================

/// Ordered segments of one non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Line {
    segments: Segments,
}

impl Line {
    pub fn new(segments: Segments) -> Self {
        Self { segments }
    }

    /// Build a line from any segment iterator.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// First segment, if any. Block kinds (heading, bullet, numbered) can only
    /// appear here.
    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// True when the line is exactly one segment of `kind`.
    pub fn is_only(&self, kind: SegmentKind) -> bool {
        self.segments.len() == 1 && self.segments[0].kind() == kind
    }

    /// Concatenated display text, markers stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    pub(crate) fn write_plain(&self, out: &mut String) {
        for seg in &self.segments {
            out.push_str(seg.text());
        }
    }

    /// Canonical markup for this line. See [`Segment::write_markup`].
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    pub(crate) fn write_markup(&self, out: &mut String) {
        for seg in &self.segments {
            seg.write_markup(out);
        }
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// =============================================================================
// LineBlock
// =============================================================================

/// One input line: either a blank-line break or a line of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineBlock {
    Break,
    Line(Line),
}

impl LineBlock {
    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self, LineBlock::Break)
    }

    #[inline]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            LineBlock::Line(line) => Some(line),
            LineBlock::Break => None,
        }
    }

    /// Segments of this block, empty for a break.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        match self {
            LineBlock::Line(line) => line.segments(),
            LineBlock::Break => &[],
        }
    }
}

impl From<Line> for LineBlock {
    fn from(line: Line) -> Self {
        LineBlock::Line(line)
    }
}
