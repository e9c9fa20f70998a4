//! Marker patterns and raw match collection.
//!
//! Five patterns are scanned independently against a whole line. Inline
//! patterns (bold, italic) match anywhere; block patterns (heading, bullet,
//! numbered) are anchored to a line start and run to the next line
//! terminator.
//!
//! Lines are split on `'\n'` only, but `'\r'`, U+2028 and U+2029 still act
//! as line terminators inside a line: marker content never crosses one, and a
//! block pattern may start right after one.
//!
//! Declaration order matters: when two matches start at the same offset the
//! one whose pattern is declared first wins overlap resolution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::node::{Segment, SegmentKind};
use crate::span::ByteSpan;

// =============================================================================
// MarkerPattern
// =============================================================================

/// Markup patterns in declaration (tie-break) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerPattern {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `# text`, `## text`, `### text` at line start
    Heading,
    /// `• text` at line start
    Bullet,
    /// `12. text` at line start
    Numbered,
}

/// Characters that end a line for marker matching.
const LINE_TERMINATORS: [char; 3] = ['\r', '\u{2028}', '\u{2029}'];

// Any character but a line terminator.
const TEXT: &str = r"[^\r\x{2028}\x{2029}]";

// Marker whitespace: Unicode space separators, ASCII controls, BOM and line
// terminators. Must agree with `is_marker_space`.
const SPACE: &str = r"[\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// Indexed by `MarkerPattern as usize`. Block patterns are anchored with `\A`
// and run against the rest of the line from each line start.
static REGEXES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        format!(r"\*\*({TEXT}*?)\*\*"),
        format!(r"\*({TEXT}*?)\*"),
        format!(r"\A#{{1,3}}{SPACE}({TEXT}+)"),
        format!(r"\A•{SPACE}({TEXT}+)"),
        format!(r"\A([0-9]+)\.{SPACE}({TEXT}+)"),
    ]
    .map(|src| Regex::new(&src).expect("marker patterns are valid regexes"))
});

/// Whitespace as seen by the chat frontend when it trims a line.
pub(crate) fn is_marker_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Offsets where a block marker may begin: the line start and the byte after
/// every line terminator.
fn line_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        line.char_indices()
            .filter(|(_, c)| LINE_TERMINATORS.contains(c))
            .map(|(i, c)| i + c.len_utf8()),
    )
}

impl MarkerPattern {
    /// Every pattern, in declaration order.
    pub const ALL: [MarkerPattern; 5] = [
        MarkerPattern::Bold,
        MarkerPattern::Italic,
        MarkerPattern::Heading,
        MarkerPattern::Bullet,
        MarkerPattern::Numbered,
    ];

    /// Segment kind produced by a match of this pattern.
    pub const fn kind(self) -> SegmentKind {
        match self {
            Self::Bold => SegmentKind::Bold,
            Self::Italic => SegmentKind::Italic,
            Self::Heading => SegmentKind::Heading,
            Self::Bullet => SegmentKind::Bullet,
            Self::Numbered => SegmentKind::Numbered,
        }
    }

    /// Block patterns are anchored to a line start.
    pub const fn is_block(self) -> bool {
        matches!(self, Self::Heading | Self::Bullet | Self::Numbered)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    fn regex(self) -> &'static Regex {
        &REGEXES[self as usize]
    }

    /// Collect every match of this pattern in `line`, left to right.
    fn scan<'a>(self, line: &'a str, out: &mut Vec<RawMatch<'a>>) {
        if !self.is_block() {
            for caps in self.regex().captures_iter(line) {
                self.push_match(&caps, 0, out);
            }
            return;
        }

        // Line starts inside an earlier match are skipped.
        let mut resume = 0;
        for start in line_starts(line) {
            if start < resume || start >= line.len() {
                continue;
            }
            if let Some(caps) = self.regex().captures(&line[start..]) {
                resume = self.push_match(&caps, start, out);
            }
        }
    }

    /// Push one match whose haystack began at `offset` in the line. Returns
    /// the end of the match in line coordinates.
    fn push_match<'a>(self, caps: &Captures<'a>, offset: usize, out: &mut Vec<RawMatch<'a>>) -> usize {
        let Some(whole) = caps.get(0) else { return offset };
        let range = whole.range();
        let span = ByteSpan::from(range.start + offset..range.end + offset);

        let (ordinal, content) = match self {
            Self::Numbered => (caps.get(1).map(|m| m.as_str()), caps.get(2)),
            _ => (None, caps.get(1)),
        };
        // An empty pair such as `**` or `****` displays its own markers.
        let content = content
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(whole.as_str());

        out.push(RawMatch {
            span,
            pattern: self,
            content,
            ordinal,
        });
        span.end
    }
}

// =============================================================================
// PatternSet
// =============================================================================

/// Set of enabled marker patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternSet(u8);

impl PatternSet {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1_1111);
    /// Bold and italic only.
    pub const INLINE: Self = Self(0b0_0011);
    /// Heading, bullet and numbered only.
    pub const BLOCK: Self = Self(0b1_1100);

    #[inline]
    pub const fn contains(self, pattern: MarkerPattern) -> bool {
        self.0 & pattern.bit() != 0
    }

    #[inline]
    pub const fn with(self, pattern: MarkerPattern) -> Self {
        Self(self.0 | pattern.bit())
    }

    #[inline]
    pub const fn without(self, pattern: MarkerPattern) -> Self {
        Self(self.0 & !pattern.bit())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bit representation, stable across releases.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Enabled patterns in declaration order.
    pub fn iter(self) -> impl Iterator<Item = MarkerPattern> {
        MarkerPattern::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<MarkerPattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = MarkerPattern>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

// =============================================================================
// RawMatch
// =============================================================================

/// One pattern match inside a line, before overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Byte span of the whole match, markers included.
    pub span: ByteSpan,
    pub pattern: MarkerPattern,
    /// Display text with markers stripped.
    pub content: &'a str,
    /// Digit string of a numbered item.
    pub ordinal: Option<&'a str>,
}

impl RawMatch<'_> {
    /// Convert into the output segment for this match.
    pub fn to_segment(&self) -> Segment {
        match self.pattern {
            MarkerPattern::Bold => Segment::bold(self.content),
            MarkerPattern::Italic => Segment::italic(self.content),
            MarkerPattern::Heading => Segment::heading(self.content),
            MarkerPattern::Bullet => Segment::bullet(self.content),
            MarkerPattern::Numbered => Segment::numbered(self.ordinal.unwrap_or_default(), self.content),
        }
    }
}

/// Collect matches of every enabled pattern across `line`.
///
/// Output is grouped by pattern in declaration order, each group in
/// left-to-right order. Matches of different patterns may overlap.
pub fn collect_matches(line: &str, patterns: PatternSet) -> Vec<RawMatch<'_>> {
    let mut out = Vec::new();
    for pattern in patterns.iter() {
        pattern.scan(line, &mut out);
    }
    out
}
