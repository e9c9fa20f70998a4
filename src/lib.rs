//! kijani-richtext - Rich-text formatting for chat and post bodies
//!
//! ## Core Concepts
//!
//! **Line blocks**: input is split on `'\n'`; every blank line becomes a
//! break and every other line an ordered list of segments.
//!
//! **Segments**: a tagged variant per markup kind (plain, bold, italic,
//! heading, bullet, numbered item) with markers already stripped, so a
//! rendering host only needs one `match`.
//!
//! **Overlap resolution**: all patterns are matched independently against a
//! line; the earliest-starting match wins and ties go to the pattern declared
//! first (bold, italic, heading, bullet, numbered).
//!
//! ## Modules
//! - `format`: `Formatter` and `FormatConfig`
//! - `pattern`: marker patterns and raw matches
//! - `algo`: overlap resolution
//! - `node`: Segment/Line/LineBlock/Document types
//! - `render`: HTML rendering
//! - `cache`: shared memoising cache
//! - `batch`: many-text formatting
//! - `serialize`: rkyv snapshots (`cache` feature)
//!
//! ## Usage
//!
//! ```
//! use kijani_richtext::{format, render_document, RenderConfig, SegmentKind};
//!
//! let doc = format("# Watering\n\n• Water **deeply**\n2. Mulch");
//! assert_eq!(doc.len(), 4);
//! assert_eq!(doc.count_kind(SegmentKind::Heading), 1);
//!
//! let html = render_document(&doc, &RenderConfig::BARE);
//! assert!(html.starts_with("<div class=\"rich-text-content\"><div><h4>Watering</h4></div><br />"));
//! ```

#[macro_use]
mod macros;

/// Node types: Segment, Line, LineBlock, Document
pub mod node;

/// Marker patterns and match collection
pub mod pattern;

/// Algorithms: overlap resolution
pub mod algo;

/// Formatter and its configuration
pub mod format;

/// Byte spans inside a line
pub mod span;

/// Stable hashing for cache keys
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering
pub mod render;

/// Batch formatting
pub mod batch;

/// Shared format cache
pub mod cache;

/// Snapshot serialization
#[cfg(feature = "cache")]
pub mod serialize;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Document, Line, LineBlock, Segment, SegmentKind, Segments};

// Formatting
pub use format::{format, format_opt, FormatConfig, Formatter};
pub use pattern::{MarkerPattern, PatternSet};

// Rendering
pub use render::{render_document, render_document_bytes, render_line, RenderConfig};

// Batch
pub use batch::format_batch;

// Cache types
pub use cache::{CacheEntry, CacheKey, CacheStats, SharedFormatCache};

// Hashing
pub use hash::StableHasher;

// Span
pub use span::ByteSpan;

// Error types
pub use error::{RichTextError, RichTextResult};

// Re-export rkyv for downstream snapshot handling (only available with cache feature)
#[cfg(feature = "cache")]
pub use rkyv;
