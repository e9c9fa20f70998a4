//! HTML Rendering for formatted documents
//!
//! Renders documents to HTML strings using the chat UI's element and class
//! vocabulary: `<strong>` / `<em>` for inline styles, `<h4>` for headings and a
//! marker/content row for bullets and numbered items.

use crate::node::{Document, Line, LineBlock, Segment};

// =============================================================================
// RenderConfig
// =============================================================================

/// Class of the wrapper element, always emitted.
pub const WRAPPER_CLASS: &str = "rich-text-content";

/// Configuration for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Extra classes appended to the wrapper `<div>`.
    pub extra_class: String,
    /// Whether to emit styling classes on inner elements.
    pub emit_classes: bool,
}

impl RenderConfig {
    /// Styled output matching the chat UI.
    pub const STYLED: Self = Self {
        extra_class: String::new(),
        emit_classes: true,
    };

    /// Semantic elements only, no styling classes.
    pub const BARE: Self = Self {
        extra_class: String::new(),
        emit_classes: false,
    };

    /// Create a new config.
    pub fn new(emit_classes: bool) -> Self {
        Self {
            extra_class: String::new(),
            emit_classes,
        }
    }

    /// Append classes to the wrapper element.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = class.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::STYLED
    }
}

// Class lists of the chat UI, in element order.
mod class {
    pub const LINE: &str = "mb-1";
    pub const BOLD: &str = "font-bold text-primary-700";
    pub const ITALIC: &str = "italic text-primary-600";
    pub const HEADING: &str = "font-bold text-lg text-primary-800 mt-3 mb-2";
    pub const ROW: &str = "flex items-start space-x-2 ml-4 my-1";
    pub const BULLET_MARK: &str = "text-primary-600 font-bold mt-1";
    pub const NUMBER_MARK: &str = "text-primary-600 font-bold";
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a document to HTML bytes.
pub fn render_document_bytes(doc: &Document, config: &RenderConfig) -> Vec<u8> {
    render_document(doc, config).into_bytes()
}

/// Render a document to an HTML string.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    let mut output = String::new();

    output.push_str("<div class=\"");
    output.push_str(WRAPPER_CLASS);
    let extra = config.extra_class.trim();
    if !extra.is_empty() {
        output.push(' ');
        output.push_str(&escape_attr(extra));
    }
    output.push_str("\">");

    for block in doc {
        match block {
            LineBlock::Break => output.push_str("<br />"),
            LineBlock::Line(line) => {
                open_tag(&mut output, "div", class::LINE, config);
                render_segments(line, config, &mut output);
                output.push_str("</div>");
            }
        }
    }

    output.push_str("</div>");
    output
}

/// Render the segments of a single line, without line or wrapper elements.
pub fn render_line(line: &Line, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_segments(line, config, &mut output);
    output
}

fn render_segments(line: &Line, config: &RenderConfig, output: &mut String) {
    for segment in line {
        render_segment(segment, config, output);
    }
}

/// Render one segment to HTML.
fn render_segment(segment: &Segment, config: &RenderConfig, output: &mut String) {
    match segment {
        Segment::Plain(text) => wrap(output, "span", "", text, config),
        Segment::Bold(text) => wrap(output, "strong", class::BOLD, text, config),
        Segment::Italic(text) => wrap(output, "em", class::ITALIC, text, config),
        Segment::Heading(text) => wrap(output, "h4", class::HEADING, text, config),
        Segment::Bullet(text) => list_row(output, class::BULLET_MARK, "•", text, config),
        Segment::Numbered { ordinal, text } => {
            let marker = format!("{ordinal}.");
            list_row(output, class::NUMBER_MARK, &marker, text, config);
        }
    }
}

/// Marker column plus content column.
fn list_row(output: &mut String, marker_class: &str, marker: &str, text: &str, config: &RenderConfig) {
    open_tag(output, "div", class::ROW, config);
    wrap(output, "span", marker_class, marker, config);
    wrap(output, "span", "", text, config);
    output.push_str("</div>");
}

fn wrap(output: &mut String, tag: &str, class: &str, text: &str, config: &RenderConfig) {
    open_tag(output, tag, class, config);
    output.push_str(&escape_html(text));
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn open_tag(output: &mut String, tag: &str, class: &str, config: &RenderConfig) {
    output.push('<');
    output.push_str(tag);
    if config.emit_classes && !class.is_empty() {
        output.push_str(" class=\"");
        output.push_str(class);
        output.push('"');
    }
    output.push('>');
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================
