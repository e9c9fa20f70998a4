//! Document type and related utilities
//!
//! The root container for formatted output, with query and traversal APIs.

use super::{Line, LineBlock, Segment, SegmentKind};

// =============================================================================
// Document
// =============================================================================

/// Formatted text: one block per input line, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Document {
    blocks: Vec<LineBlock>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<LineBlock>) -> Self {
        Self { blocks }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, block: LineBlock) {
        self.blocks.push(block);
    }

    #[inline]
    pub fn blocks(&self) -> &[LineBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<LineBlock> {
        self.blocks
    }

    /// Number of blocks, breaks included
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over non-blank lines
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.blocks.iter().filter_map(LineBlock::as_line)
    }

    /// Iterate over every segment of every line, in reading order
    pub fn iter_segments(&self) -> impl Iterator<Item = &Segment> {
        self.lines().flat_map(Line::iter)
    }

    /// Find first segment matching predicate
    pub fn find_segment<F>(&self, predicate: F) -> Option<&Segment>
    where
        F: Fn(&Segment) -> bool,
    {
        self.iter_segments().find(|&seg| predicate(seg))
    }

    /// Count units of `kind`. `LineBreak` counts break blocks.
    pub fn count_kind(&self, kind: SegmentKind) -> usize {
        if kind == SegmentKind::LineBreak {
            return self.blocks.iter().filter(|b| b.is_break()).count();
        }
        self.iter_segments().filter(|seg| seg.kind() == kind).count()
    }

    pub fn has_kind(&self, kind: SegmentKind) -> bool {
        self.count_kind(kind) > 0
    }

    /// True when no line carries a styled segment.
    pub fn is_plain_only(&self) -> bool {
        self.iter_segments().all(Segment::is_plain)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text views
    // ─────────────────────────────────────────────────────────────────────────

    /// Display text with markers stripped; breaks become empty lines.
    pub fn plain_text(&self) -> String {
        self.join_lines(Line::write_plain)
    }

    /// Canonical markup that formats back to an equivalent document.
    pub fn to_markup(&self) -> String {
        self.join_lines(Line::write_markup)
    }

    fn join_lines(&self, write: fn(&Line, &mut String)) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if let LineBlock::Line(line) = block {
                write(line, &mut out);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a LineBlock;
    type IntoIter = std::slice::Iter<'a, LineBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl FromIterator<LineBlock> for Document {
    fn from_iter<I: IntoIterator<Item = LineBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
