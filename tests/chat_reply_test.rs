// End-to-end checks on an assistant reply as the chat view receives it

use std::sync::Arc;

use kijani_richtext::prelude::*;

const SOIL_REPLY: &str = "\u{1f331} Soil preparation is key to success! Here's how:

**Soil Testing:**
- Check pH level (most trees prefer 6.0-7.0)
- Test drainage by digging test holes

**Preparation Steps:**
1. Clear weeds and grass (2m radius)
2. Dig hole 2x wider than root ball
3. Mix soil with compost (1:1 ratio)

**Care Tips:**\u{20}
• Water regularly for first 2 years
• Mulch around the base

Would you like *specific* variety recommendations?";

#[test]
fn soil_reply_structure() {
    let doc = format(SOIL_REPLY);

    assert_eq!(doc.len(), 16);
    assert_eq!(doc.count_kind(SegmentKind::LineBreak), 4);
    assert_eq!(doc.count_kind(SegmentKind::Bold), 3);
    assert_eq!(doc.count_kind(SegmentKind::Numbered), 3);
    assert_eq!(doc.count_kind(SegmentKind::Bullet), 2);
    assert_eq!(doc.count_kind(SegmentKind::Italic), 1);
    assert_eq!(doc.count_kind(SegmentKind::Heading), 0);

    // dashes are not bullet markers
    let dash = doc.blocks()[3].segments();
    assert_eq!(dash, &[Segment::plain("- Check pH level (most trees prefer 6.0-7.0)")][..]);

    // trailing space after a bold label stays as plain text
    let care = doc.blocks()[11].segments();
    assert_eq!(care, &[Segment::bold("Care Tips:"), Segment::plain(" ")][..]);

    let ordinals: Vec<&str> = doc.iter_segments().filter_map(Segment::ordinal).collect();
    assert_eq!(ordinals, vec!["1", "2", "3"]);
}

#[test]
fn soil_reply_renders_and_caches() {
    let cache = SharedFormatCache::new();
    let formatter = Formatter::default();

    // two polls of the same conversation
    let first = cache.get_or_format(&formatter, SOIL_REPLY);
    let second = cache.get_or_format(&formatter, SOIL_REPLY);
    assert!(Arc::ptr_eq(&first, &second));

    let html = render_document(&first, &RenderConfig::STYLED.with_class("chat-bubble"));
    assert!(html.starts_with("<div class=\"rich-text-content chat-bubble\">"));
    assert_eq!(html.matches("<br />").count(), 4);
    assert!(html.contains("<span class=\"text-primary-600 font-bold\">2.</span><span>Dig hole 2x wider than root ball</span>"));
    assert!(html.contains("<em class=\"italic text-primary-600\">specific</em>"));
}

#[test]
fn batch_matches_single_formatting() {
    let replies = [SOIL_REPLY, "", "**ok**", "   "];
    let formatter = Formatter::default();
    let docs = format_batch(&formatter, &replies[..]);
    for (doc, reply) in docs.iter().zip(replies) {
        assert_eq!(doc, &formatter.format(reply));
    }
}

#[cfg(feature = "cache")]
#[test]
fn soil_reply_snapshot() {
    let doc = format(SOIL_REPLY);
    let bytes = to_bytes(&doc).expect("encode snapshot");
    assert_eq!(from_bytes(&bytes).expect("decode snapshot"), doc);
}
