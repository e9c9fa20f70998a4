//! Snapshot support for formatted documents.
//!
//! Documents are stored in a flat rkyv layout: a list of blocks, each with a
//! list of tagged segments. Decoding validates magic bytes, schema version and
//! segment tags before rebuilding the document.

use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};

use crate::error::{RichTextError, RichTextResult};
use crate::node::{Document, Line, LineBlock, Segment};

/// Current schema version for snapshot validation.
/// Increment this when making breaking changes to SerDocument structure.
pub const SCHEMA_VERSION: u32 = 1;

/// Magic bytes for kijani-richtext snapshots.
pub const MAGIC: [u8; 4] = *b"KJRT";

// Segment tags. Never renumber.
const TAG_PLAIN: u8 = 0;
const TAG_BOLD: u8 = 1;
const TAG_ITALIC: u8 = 2;
const TAG_HEADING: u8 = 3;
const TAG_BULLET: u8 = 4;
const TAG_NUMBERED: u8 = 5;

// =============================================================================
// Flat types
// =============================================================================

/// Serializable document.
#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerDocument {
    /// Magic bytes for validation
    magic: [u8; 4],
    /// Schema version for compatibility checking
    schema_version: u32,
    blocks: Vec<SerBlock>,
}

/// Serializable block. A break has no segments.
#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerBlock {
    is_break: bool,
    segments: Vec<SerSegment>,
}

/// Serializable segment. `ordinal` is empty unless `tag` is numbered.
#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerSegment {
    tag: u8,
    text: String,
    ordinal: String,
}

// =============================================================================
// Encoding
// =============================================================================

/// Serialize a document to bytes.
pub fn to_bytes(doc: &Document) -> RichTextResult<Vec<u8>> {
    let ser_doc = to_serializable(doc);
    let bytes = rkyv::to_bytes::<RkyvError>(&ser_doc)?;
    Ok(bytes.to_vec())
}

fn to_serializable(doc: &Document) -> SerDocument {
    let blocks = doc
        .blocks()
        .iter()
        .map(|block| match block {
            LineBlock::Break => SerBlock {
                is_break: true,
                segments: Vec::new(),
            },
            LineBlock::Line(line) => SerBlock {
                is_break: false,
                segments: line.iter().map(to_ser_segment).collect(),
            },
        })
        .collect();

    SerDocument {
        magic: MAGIC,
        schema_version: SCHEMA_VERSION,
        blocks,
    }
}

fn to_ser_segment(segment: &Segment) -> SerSegment {
    let tag = match segment {
        Segment::Plain(_) => TAG_PLAIN,
        Segment::Bold(_) => TAG_BOLD,
        Segment::Italic(_) => TAG_ITALIC,
        Segment::Heading(_) => TAG_HEADING,
        Segment::Bullet(_) => TAG_BULLET,
        Segment::Numbered { .. } => TAG_NUMBERED,
    };
    SerSegment {
        tag,
        text: segment.text().to_string(),
        ordinal: segment.ordinal().unwrap_or_default().to_string(),
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Deserialize bytes to a document.
///
/// # Errors
///
/// Returns an error if:
/// - Archive data cannot be validated
/// - Magic bytes don't match (not a kijani-richtext snapshot)
/// - Schema version is incompatible
/// - A block or segment is malformed
pub fn from_bytes(bytes: &[u8]) -> RichTextResult<Document> {
    // Callers hand us arbitrary slices; rkyv needs the archive aligned.
    let mut aligned: AlignedVec = AlignedVec::new();
    aligned.extend_from_slice(bytes);

    let archived = rkyv::access::<ArchivedSerDocument, RkyvError>(&aligned[..])?;

    let magic: [u8; 4] = archived.magic;
    if magic != MAGIC {
        return Err(RichTextError::InvalidMagic {
            expected: MAGIC,
            found: magic,
        });
    }

    let version = archived.schema_version.to_native();
    if version != SCHEMA_VERSION {
        return Err(RichTextError::VersionMismatch {
            expected: SCHEMA_VERSION,
            found: version,
        });
    }

    let mut doc = Document::with_capacity(archived.blocks.len());
    for (index, block) in archived.blocks.iter().enumerate() {
        if block.is_break {
            if !block.segments.is_empty() {
                return Err(RichTextError::corrupted(format!("break block {index} has segments")));
            }
            doc.push(LineBlock::Break);
            continue;
        }
        if block.segments.is_empty() {
            return Err(RichTextError::corrupted(format!("line block {index} has no segments")));
        }
        let mut line = Line::default();
        for segment in block.segments.iter() {
            line.push(from_ser_segment(segment)?);
        }
        doc.push(LineBlock::Line(line));
    }
    Ok(doc)
}

fn from_ser_segment(segment: &ArchivedSerSegment) -> RichTextResult<Segment> {
    let text = segment.text.as_str();
    let segment = match segment.tag {
        TAG_PLAIN => Segment::plain(text),
        TAG_BOLD => Segment::bold(text),
        TAG_ITALIC => Segment::italic(text),
        TAG_HEADING => Segment::heading(text),
        TAG_BULLET => Segment::bullet(text),
        TAG_NUMBERED => Segment::numbered(segment.ordinal.as_str(), text),
        other => return Err(RichTextError::corrupted(format!("unknown segment tag {other}"))),
    };
    Ok(segment)
}
