//! HTML output writer.
//!
//! Serializes a [`UiNode`] tree into HTML, one top-level element per line.
//! Text content is escaped; keys and styling hints land on the element as
//! `data-key` and `class` attributes.

use crate::ui::UiNode;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use lessonmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.write_str("<p>");
/// writer.write_escaped_text("a < b");
/// writer.write_str("</p>");
/// assert_eq!(writer.into_string(), "<p>a &lt; b</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with capacity sized for an input document.
    ///
    /// The keyed markup roughly doubles the input; reserve accordingly.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len * 2),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text content with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        html_escape::encode_text_to_vec(text, &mut self.out);
    }

    /// Write an attribute value with double-quote escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        html_escape::encode_double_quoted_attribute_to_vec(attr, &mut self.out);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only str input and escaped output are ever written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Serialize a full node sequence, one top-level element per line.
    pub fn write_document(&mut self, nodes: &[UiNode<'_>]) {
        for node in nodes {
            self.write_node(node);
            self.newline();
        }
    }

    /// Serialize nodes inline, without separating newlines.
    pub fn write_nodes(&mut self, nodes: &[UiNode<'_>]) {
        for node in nodes {
            self.write_node(node);
        }
    }

    fn write_node(&mut self, node: &UiNode<'_>) {
        match node {
            UiNode::Text(text) => self.write_escaped_text(text),
            UiNode::Element { tag, key, children } => {
                self.write_str("<");
                self.write_str(tag.name());
                self.write_str(" class=\"");
                self.write_str(tag.css_class());
                self.write_str("\" data-key=\"");
                self.write_escaped_attr(key);
                self.write_str("\">");
                self.write_nodes(children);
                self.write_str("</");
                self.write_str(tag.name());
                self.write_str(">");
            }
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
