//! Output node types: `Segment`, `Line`, `LineBlock` and `Document`.
//!
//! A formatted document is a flat list of line blocks. Each non-blank input
//! line becomes a `Line` of segments; each blank line becomes a break.
//!
//! # Key Features
//!
//! - `Segment` is a tagged variant, one per markup kind, so rendering hosts
//!   dispatch with a single `match`
//! - Segment text is a `CompactString`: short chat fragments stay inline
//! - Lines keep their segments in a `SmallVec`, most lines have few segments

mod document;
mod line;

pub use document::Document;
pub use line::{Line, LineBlock, Segments};

use compact_str::CompactString;

// =============================================================================
// SegmentKind
// =============================================================================

/// Fieldless discriminant of every output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    Plain,
    Bold,
    Italic,
    Heading,
    Bullet,
    Numbered,
    /// Blank input line. Only ever produced as `LineBlock::Break`.
    LineBreak,
}

impl SegmentKind {
    /// Stable lowercase name, used in logs and snapshots.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading => "heading",
            Self::Bullet => "bullet",
            Self::Numbered => "numbered",
            Self::LineBreak => "line-break",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Segment
// =============================================================================

/// One styled or plain run of text within a line.
///
/// Styled variants carry their content with the markers already stripped.
/// `Plain` carries source text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Plain(CompactString),
    Bold(CompactString),
    Italic(CompactString),
    Heading(CompactString),
    Bullet(CompactString),
    /// `ordinal` is the digit string exactly as written, never renumbered.
    Numbered {
        ordinal: CompactString,
        text: CompactString,
    },
}

impl Segment {
    pub fn plain(text: impl Into<CompactString>) -> Self {
        Self::Plain(text.into())
    }

    pub fn bold(text: impl Into<CompactString>) -> Self {
        Self::Bold(text.into())
    }

    pub fn italic(text: impl Into<CompactString>) -> Self {
        Self::Italic(text.into())
    }

    pub fn heading(text: impl Into<CompactString>) -> Self {
        Self::Heading(text.into())
    }

    pub fn bullet(text: impl Into<CompactString>) -> Self {
        Self::Bullet(text.into())
    }

    pub fn numbered(ordinal: impl Into<CompactString>, text: impl Into<CompactString>) -> Self {
        Self::Numbered {
            ordinal: ordinal.into(),
            text: text.into(),
        }
    }

    // Generates for each variant (plain -> Plain, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&str>
    impl_segment_accessors!(plain, bold, italic, heading, bullet);

    impl_segment_kind!(Plain, Bold, Italic, Heading, Bullet; Numbered);

    /// Check if this is a Numbered segment
    #[inline]
    pub fn is_numbered(&self) -> bool {
        matches!(self, Self::Numbered { .. })
    }

    /// Display text, markers stripped.
    #[inline]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t)
            | Self::Bold(t)
            | Self::Italic(t)
            | Self::Heading(t)
            | Self::Bullet(t)
            | Self::Numbered { text: t, .. } => t.as_str(),
        }
    }

    /// Ordinal of a numbered item, `None` for every other kind.
    #[inline]
    pub fn ordinal(&self) -> Option<&str> {
        match self {
            Self::Numbered { ordinal, .. } => Some(ordinal.as_str()),
            _ => None,
        }
    }

    /// Anything but plain text.
    #[inline]
    pub fn is_styled(&self) -> bool {
        !self.is_plain()
    }

    /// Write this segment back as canonical markup.
    ///
    /// Headings always come back with a single `#`, since the level is not kept.
    pub fn write_markup(&self, out: &mut String) {
        match self {
            Self::Plain(t) => out.push_str(t),
            Self::Bold(t) => {
                out.push_str("**");
                out.push_str(t);
                out.push_str("**");
            }
            Self::Italic(t) => {
                out.push('*');
                out.push_str(t);
                out.push('*');
            }
            Self::Heading(t) => {
                out.push_str("# ");
                out.push_str(t);
            }
            Self::Bullet(t) => {
                out.push_str("• ");
                out.push_str(t);
            }
            Self::Numbered { ordinal, text } => {
                out.push_str(ordinal);
                out.push_str(". ");
                out.push_str(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Segment: Send, Sync, Clone);
    static_assertions::assert_impl_all!(SegmentKind: Send, Sync, Copy);

    #[test]
    fn test_accessors() {
        let seg = Segment::bold("hi");
        assert!(seg.is_bold());
        assert!(!seg.is_italic());
        assert_eq!(seg.as_bold(), Some("hi"));
        assert_eq!(seg.as_plain(), None);
        assert_eq!(seg.kind(), SegmentKind::Bold);
        assert!(seg.is_styled());
    }

    #[test]
    fn test_numbered_fields() {
        let seg = Segment::numbered("12", "Twelfth");
        assert!(seg.is_numbered());
        assert_eq!(seg.kind(), SegmentKind::Numbered);
        assert_eq!(seg.ordinal(), Some("12"));
        assert_eq!(seg.text(), "Twelfth");
        assert_eq!(Segment::plain("x").ordinal(), None);
    }

    #[test]
    fn test_write_markup() {
        let mut out = String::new();
        for seg in [
            Segment::bold("a"),
            Segment::plain(" "),
            Segment::italic("b"),
        ] {
            seg.write_markup(&mut out);
        }
        assert_eq!(out, "**a** *b*");

        let mut out = String::new();
        Segment::numbered("007", "x").write_markup(&mut out);
        assert_eq!(out, "007. x");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SegmentKind::LineBreak.to_string(), "line-break");
        assert_eq!(SegmentKind::Numbered.name(), "numbered");
    }
}
