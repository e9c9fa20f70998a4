//! The rich-text formatter.
//!
//! Splits input on `'\n'`, turns blank lines into breaks and every other line
//! into segments:
//!
//! 1. collect matches of every enabled pattern across the whole line
//! 2. resolve overlaps (earliest start, then declaration order)
//! 3. walk the kept matches left to right, filling gaps with plain text
//!
//! Formatting is total. Unmatched or malformed markup degrades to plain text.
//!
//! # Example
//!
//! ```
//! use kijani_richtext::{format, Segment};
//!
//! let doc = format("**Water** the *seedlings*");
//! let line = doc.lines().next().unwrap();
//! assert_eq!(line.segments()[0], Segment::bold("Water"));
//! assert_eq!(line.segments()[2], Segment::italic("seedlings"));
//! ```

use crate::algo::resolve_overlaps;
use crate::hash::StableHasher;
use crate::node::{Document, Line, LineBlock, Segment};
use crate::pattern::{collect_matches, is_marker_space, MarkerPattern, PatternSet, RawMatch};

// =============================================================================
// FormatConfig
// =============================================================================

/// Configuration for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatConfig {
    /// Patterns that may produce styled segments.
    pub patterns: PatternSet,
    /// Strip one trailing `'\r'` from every line before matching.
    pub normalize_crlf: bool,
}

impl FormatConfig {
    /// Every pattern enabled, CRLF input normalised.
    pub const ALL: Self = Self {
        patterns: PatternSet::ALL,
        normalize_crlf: true,
    };

    /// Bold and italic only. Useful for single-line titles and previews.
    pub const INLINE_ONLY: Self = Self {
        patterns: PatternSet::INLINE,
        normalize_crlf: true,
    };

    /// Create a config with the given pattern set.
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            patterns,
            ..Self::ALL
        }
    }

    pub fn with_pattern(mut self, pattern: MarkerPattern) -> Self {
        self.patterns = self.patterns.with(pattern);
        self
    }

    pub fn without_pattern(mut self, pattern: MarkerPattern) -> Self {
        self.patterns = self.patterns.without(pattern);
        self
    }

    pub fn with_normalize_crlf(mut self, normalize: bool) -> Self {
        self.normalize_crlf = normalize;
        self
    }

    /// Stable fingerprint, folded into cache keys.
    pub fn fingerprint(&self) -> u64 {
        StableHasher::new()
            .update(&[self.patterns.bits()])
            .update_bool(self.normalize_crlf)
            .finish()
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::ALL
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats markup text into a [`Document`].
///
/// Cheap to construct and `Sync`: share one formatter across threads.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format `content` into one block per line.
    ///
    /// Empty input gives an empty document. Any other input gives exactly one
    /// block per `'\n'`-separated line, so a trailing newline adds a break.
    pub fn format(&self, content: &str) -> Document {
        if content.is_empty() {
            return Document::new();
        }

        let mut doc = Document::with_capacity(content.bytes().filter(|&b| b == b'\n').count() + 1);
        for (index, line) in content.split('\n').enumerate() {
            let block = self.format_line(line);
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("line {index}: {} segment(s)", block.segments().len());
            }
            doc.push(block);
        }

        log::debug!(
            "formatted {} bytes into {} block(s)",
            content.len(),
            doc.len()
        );
        doc
    }

    /// Format optional content. `None` behaves like an empty string.
    pub fn format_opt(&self, content: Option<&str>) -> Document {
        content.map(|c| self.format(c)).unwrap_or_default()
    }

    /// Format a single line. `line` must not contain `'\n'`.
    pub fn format_line(&self, line: &str) -> LineBlock {
        let line = if self.config.normalize_crlf {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };

        if line.trim_matches(is_marker_space).is_empty() {
            return LineBlock::Break;
        }

        let (kept, stats) = resolve_overlaps(collect_matches(line, self.config.patterns));
        if stats.discarded() > 0 {
            log::trace!(
                "discarded {} of {} overlapping match(es)",
                stats.discarded(),
                stats.found
            );
        }

        LineBlock::Line(build_line(line, &kept))
    }
}

/// Emit gap text and kept matches in order. `kept` must be sorted and disjoint.
fn build_line(line: &str, kept: &[RawMatch<'_>]) -> Line {
    let mut out = Line::default();
    let mut cursor = 0;

    for m in kept {
        if m.span.start > cursor {
            out.push(Segment::plain(&line[cursor..m.span.start]));
        }
        out.push(m.to_segment());
        cursor = m.span.end;
    }

    if cursor < line.len() {
        out.push(Segment::plain(&line[cursor..]));
    }
    out
}

/// Format `content` with the default configuration.
pub fn format(content: &str) -> Document {
    Formatter::default().format(content)
}

/// Format optional content with the default configuration.
pub fn format_opt(content: Option<&str>) -> Document {
    Formatter::default().format_opt(content)
}

// =============================================================================
// Tests
// =============================================================================
