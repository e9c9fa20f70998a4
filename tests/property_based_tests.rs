// Property-based tests using proptest
// Random inputs for the formatter's line, overlap and de-marking guarantees

use kijani_richtext::{format, LineBlock, Segment};
use proptest::prelude::*;

/// Build one inline-marked line and the text it should display.
fn marked_line(words: &[(u8, String)]) -> (String, String) {
    let mut source = Vec::with_capacity(words.len());
    let mut shown = Vec::with_capacity(words.len());
    for (style, word) in words {
        source.push(match style {
            1 => format!("**{word}**"),
            2 => format!("*{word}*"),
            _ => word.clone(),
        });
        shown.push(word.clone());
    }
    (source.join(" "), shown.join(" "))
}

// Property: text without markup characters passes through verbatim,
// one plain segment per non-blank line
proptest! {
    #[test]
    fn markup_free_lines_are_verbatim(
        lines in prop::collection::vec("[a-zA-Z0-9 ,!?()'-]{0,40}", 1..8)
    ) {
        let input = lines.join("\n");
        let doc = format(&input);

        if input.is_empty() {
            prop_assert!(doc.is_empty());
        } else {
            prop_assert_eq!(doc.len(), lines.len());
            for (block, line) in doc.blocks().iter().zip(&lines) {
                if line.trim().is_empty() {
                    prop_assert_eq!(block, &LineBlock::Break);
                } else {
                    prop_assert_eq!(block.segments(), &[Segment::plain(line.as_str())][..]);
                }
            }
        }
    }
}

// Property: the formatter is total and keeps one block per input line
proptest! {
    #[test]
    fn any_input_yields_one_block_per_line(input in "\\PC{0,60}(\n\\PC{0,20}){0,3}") {
        let doc = format(&input);
        let expected = if input.is_empty() { 0 } else { input.split('\n').count() };
        prop_assert_eq!(doc.len(), expected);
        for line in doc.lines() {
            prop_assert!(!line.is_empty());
        }
    }
}

// Property: de-marked output contains no markup, so formatting it again
// yields plain text only
proptest! {
    #[test]
    fn demarked_text_reformats_as_plain(
        words in prop::collection::vec((0u8..3, "[a-z]{1,8}"), 1..6)
    ) {
        let (source, shown) = marked_line(&words);
        let doc = format(&source);

        let styled = words.iter().filter(|(style, _)| *style != 0).count();
        prop_assert_eq!(doc.iter_segments().filter(|s| s.is_styled()).count(), styled);
        prop_assert_eq!(doc.plain_text(), shown.clone());

        let again = format(&doc.plain_text());
        prop_assert!(again.is_plain_only());
        prop_assert_eq!(again.plain_text(), shown);
    }
}

// Property: block markers take the whole line and keep numbered ordinals verbatim
proptest! {
    #[test]
    fn block_markers_claim_the_line(
        ordinal in "[0-9]{1,4}",
        words in prop::collection::vec((0u8..3, "[a-z]{1,8}"), 1..4)
    ) {
        let (body, _) = marked_line(&words);
        let doc = format(&format!("{ordinal}. {body}\n• {body}\n## {body}"));

        let segments: Vec<&Segment> = doc.iter_segments().collect();
        prop_assert_eq!(segments.len(), 3);
        prop_assert_eq!(segments[0], &Segment::numbered(ordinal.as_str(), body.as_str()));
        prop_assert_eq!(segments[1], &Segment::bullet(body.as_str()));
        prop_assert_eq!(segments[2], &Segment::heading(body.as_str()));
    }
}
