//! lessonmark: lesson content renderer
//!
//! Turns a loosely structured lesson text blob (pseudo-markdown) into an
//! ordered sequence of typed blocks, a keyed UI node tree, and an HTML
//! serialization. Content that already looks like HTML is detected up front
//! and passed through untouched.
//!
//! # Design Principles
//! - Pure functions only: no I/O, no shared state, no hidden lifecycle
//! - No regex: byte-level scanning for the HTML sniff and bold markers
//! - Permissive grammar: every string is valid input, nothing ever panics
//! - Zero-copy spans: block content borrows from the input document
//!
//! The pipeline is safe to run concurrently on independent inputs; each
//! invocation allocates only local state.

pub mod block;
pub mod inline;
pub mod mode;
pub mod render;
pub mod ui;

// Re-export primary types
pub use block::{assemble, Block, LineClass};
pub use inline::{tokenize, InlineSpan, SpanKind, Spans};
pub use mode::{detect, Mode};
pub use render::HtmlWriter;
pub use ui::{build_nodes, Tag, UiNode};

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Sniff the document for HTML-style tags and pass hits through raw.
    /// Disable when the caller already knows the content is structured.
    pub detect_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { detect_html: true }
    }
}

/// Render lesson content to HTML.
///
/// This is the primary API for simple use cases. The document is sniffed
/// once: HTML-like content is handed through byte for byte (trusted-editor
/// boundary, not sanitized here), anything else goes through the structured
/// pipeline.
///
/// # Example
/// ```
/// let html = lessonmark::to_html("## Intro\n\n- **bold** item");
/// assert!(html.contains("<h2"));
/// assert!(html.contains("<strong"));
/// ```
pub fn to_html(content: &str) -> String {
    to_html_with_options(content, &Options::default())
}

/// Render lesson content to HTML with options.
pub fn to_html_with_options(content: &str, options: &Options) -> String {
    let mode = if options.detect_html {
        mode::detect(content)
    } else {
        Mode::Structured
    };
    to_html_with_mode(content, mode)
}

/// Render with an explicit, already-decided mode, bypassing the sniff.
///
/// Lets a caller with a real content-type flag skip the heuristic entirely.
pub fn to_html_with_mode(content: &str, mode: Mode) -> String {
    match mode {
        Mode::RawHtml => content.to_owned(),
        Mode::Structured => {
            let blocks = assemble(content);
            let nodes = build_nodes(&blocks);
            let mut writer = HtmlWriter::with_capacity_for(content.len());
            writer.write_document(&nodes);
            writer.into_string()
        }
    }
}
