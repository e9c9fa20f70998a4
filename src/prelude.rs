//! Prelude module for common imports.
//!
//! ```
//! use kijani_richtext::prelude::*;
//!
//! let doc = Formatter::new(FormatConfig::INLINE_ONLY).format("*hi*");
//! assert!(doc.has_kind(SegmentKind::Italic));
//! ```

// Node types
pub use crate::node::{Document, Line, LineBlock, Segment, SegmentKind};

// Formatting
pub use crate::format::{format, format_opt, FormatConfig, Formatter};
pub use crate::pattern::{MarkerPattern, PatternSet};

// Algorithms
pub use crate::algo::{resolve_overlaps, OverlapStats};

// Batch
pub use crate::batch::format_batch;

// Cache
pub use crate::cache::{CacheEntry, CacheKey, CacheStats, SharedFormatCache};

// Render
pub use crate::render::{render_document, render_document_bytes, render_line, RenderConfig};

// Error
pub use crate::error::{RichTextError, RichTextResult};

// Serialization
#[cfg(feature = "cache")]
pub use crate::serialize::{from_bytes, to_bytes, SCHEMA_VERSION};
