//! Greedy overlap resolution for pattern matches.
//!
//! Matches from all patterns are ordered by start offset, ties broken by
//! pattern declaration order. Walking that order, a match is kept only if its
//! span intersects no span kept so far. Discarded matches vanish entirely;
//! their text is not re-emitted as plain text unless a gap covers it.
//!
//! Earliest start wins, which is not the same as longest match wins:
//! `*a **b* c**` keeps the two italics and drops the bold.

use crate::pattern::RawMatch;

/// Counters from one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapStats {
    /// Matches considered
    pub found: usize,
    /// Matches that survived
    pub kept: usize,
}

impl OverlapStats {
    pub fn discarded(&self) -> usize {
        self.found - self.kept
    }
}

/// Resolve overlapping matches. The result is sorted by start offset and
/// pairwise disjoint.
///
/// Every match must be non-empty. Runs in `O(n log n)` for `n` matches.
pub fn resolve_overlaps<'a>(mut matches: Vec<RawMatch<'a>>) -> (Vec<RawMatch<'a>>, OverlapStats) {
    let found = matches.len();
    matches.sort_by_key(|m| (m.span.start, m.pattern));

    let mut kept: Vec<RawMatch<'a>> = Vec::with_capacity(found);
    for candidate in matches {
        debug_assert!(!candidate.span.is_empty());
        // `kept` is sorted and disjoint and no candidate starts before the
        // last kept one, so only the last kept span can intersect.
        let clear = kept.last().is_none_or(|last| !last.span.intersects(&candidate.span));
        if clear {
            kept.push(candidate);
        }
    }

    let stats = OverlapStats {
        found,
        kept: kept.len(),
    };
    (kept, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{collect_matches, MarkerPattern, PatternSet};
    use crate::span::ByteSpan;

    fn raw(start: usize, end: usize, pattern: MarkerPattern) -> RawMatch<'static> {
        RawMatch {
            span: ByteSpan::new(start, end),
            pattern,
            content: "",
            ordinal: None,
        }
    }

    #[test]
    fn test_tie_break_uses_declaration_order() {
        // input order deliberately puts the italic first
        let (kept, stats) = resolve_overlaps(vec![
            raw(0, 2, MarkerPattern::Italic),
            raw(0, 8, MarkerPattern::Bold),
        ]);
        assert_eq!(kept, vec![raw(0, 8, MarkerPattern::Bold)]);
        assert_eq!(stats, OverlapStats { found: 2, kept: 1 });
        assert_eq!(stats.discarded(), 1);
    }

    #[test]
    fn test_earlier_start_beats_longer_match() {
        let (kept, _) = resolve_overlaps(vec![
            raw(3, 11, MarkerPattern::Bold),
            raw(0, 4, MarkerPattern::Italic),
        ]);
        assert_eq!(kept, vec![raw(0, 4, MarkerPattern::Italic)]);
    }

    #[test]
    fn test_touching_spans_both_survive() {
        let (kept, _) = resolve_overlaps(vec![
            raw(5, 9, MarkerPattern::Italic),
            raw(0, 5, MarkerPattern::Bold),
        ]);
        assert_eq!(
            kept,
            vec![raw(0, 5, MarkerPattern::Bold), raw(5, 9, MarkerPattern::Italic)]
        );
    }

    #[test]
    fn test_partial_overlap_from_real_line() {
        let line = "**a *b** c*";
        let (kept, stats) = resolve_overlaps(collect_matches(line, PatternSet::ALL));
        assert_eq!(stats.found, 4);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].pattern, MarkerPattern::Bold);
        assert_eq!(kept[0].content, "a *b");
        assert_eq!(kept[0].span, ByteSpan::new(0, 8));
    }

    #[test]
    fn test_nested_span_dropped_after_later_kept_span() {
        // the bold swallows two italics; the one touching its end survives
        let (kept, stats) = resolve_overlaps(vec![
            raw(0, 20, MarkerPattern::Bold),
            raw(2, 6, MarkerPattern::Italic),
            raw(18, 24, MarkerPattern::Italic),
            raw(20, 22, MarkerPattern::Italic),
        ]);
        assert_eq!(
            kept,
            vec![raw(0, 20, MarkerPattern::Bold), raw(20, 22, MarkerPattern::Italic)]
        );
        assert_eq!(stats.discarded(), 2);
    }

    #[test]
    fn test_long_asterisk_run() {
        use std::time::{Duration, Instant};

        // 25_000 empty bold pairs and one trailing empty italic pair
        let line = "*".repeat(100_002);
        let started = Instant::now();
        let (kept, stats) = resolve_overlaps(collect_matches(&line, PatternSet::ALL));
        let elapsed = started.elapsed();

        assert_eq!(stats.found, 25_000 + 50_001);
        assert_eq!(kept.len(), 25_001);
        assert!(kept[..25_000].iter().all(|m| m.pattern == MarkerPattern::Bold));
        assert_eq!(kept[25_000].pattern, MarkerPattern::Italic);
        assert_eq!(kept[25_000].span, ByteSpan::new(100_000, 100_002));
        assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    }

    #[test]
    fn test_result_is_disjoint_and_sorted() {
        let line = "*a* **b** *c* ***d*** 1. e";
        let (kept, _) = resolve_overlaps(collect_matches(line, PatternSet::ALL));
        for pair in kept.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }
}
