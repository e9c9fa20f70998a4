//! Algorithm implementations for formatting.
//!
//! - `overlap`: greedy overlap resolution between raw pattern matches

mod overlap;

pub use overlap::{resolve_overlaps, OverlapStats};
