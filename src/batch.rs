//! Batch formatting of many independent texts.
//!
//! Output order always matches input order. With the `parallel` feature the
//! texts are formatted on the rayon pool; a single text is still formatted
//! sequentially.

use crate::format::Formatter;
use crate::node::Document;

/// Format every text in `contents` with `formatter`.
#[cfg(feature = "parallel")]
pub fn format_batch<S>(formatter: &Formatter, contents: &[S]) -> Vec<Document>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    log::debug!("formatting batch of {} text(s) in parallel", contents.len());
    contents
        .par_iter()
        .map(|content| formatter.format(content.as_ref()))
        .collect()
}

/// Format every text in `contents` with `formatter`.
#[cfg(not(feature = "parallel"))]
pub fn format_batch<S>(formatter: &Formatter, contents: &[S]) -> Vec<Document>
where
    S: AsRef<str> + Sync,
{
    log::debug!("formatting batch of {} text(s)", contents.len());
    contents
        .iter()
        .map(|content| formatter.format(content.as_ref()))
        .collect()
}
