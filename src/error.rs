//! Error types for kijani-richtext.
//!
//! Formatting itself is total and never fails. Errors only arise when a
//! formatted document snapshot is decoded from bytes.

use thiserror::Error;

/// Errors that can occur while encoding or decoding document snapshots.
#[derive(Debug, Error)]
pub enum RichTextError {
    /// Snapshot was written with an incompatible schema version
    #[error("snapshot version mismatch: expected v{expected}, found v{found}")]
    VersionMismatch {
        /// Expected schema version
        expected: u32,
        /// Found schema version
        found: u32,
    },

    /// Snapshot data is structurally valid but semantically broken
    #[error("snapshot corrupted: {0}")]
    Corrupted(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Magic bytes validation failed
    #[error("invalid snapshot format: expected magic bytes {expected:?}, found {found:?}")]
    InvalidMagic {
        /// Expected magic bytes
        expected: [u8; 4],
        /// Found magic bytes
        found: [u8; 4],
    },
}

/// Result type alias for snapshot operations.
pub type RichTextResult<T> = Result<T, RichTextError>;

impl RichTextError {
    /// Create a corruption error with a message.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }

    /// Create a serialization error from any error type.
    pub fn serialize(err: impl std::error::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

#[cfg(feature = "cache")]
impl From<rkyv::rancor::Error> for RichTextError {
    fn from(err: rkyv::rancor::Error) -> Self {
        Self::serialize(err)
    }
}
