//! Document mode selection.
//!
//! Lesson content originates either as hand-authored pseudo-markdown or as
//! HTML produced by a rich-text editor, and the viewer must not re-parse or
//! double-escape already-formatted HTML. The whole document is sniffed once
//! for an HTML-style tag before the structured pipeline runs.
//!
//! This is a heuristic, not a content-type flag. Callers that know the real
//! format can bypass it via [`crate::to_html_with_mode`].

/// How a raw document should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The document contains HTML-style tags; hand it through untouched.
    RawHtml,
    /// The document is parsed as line-oriented pseudo-markdown.
    Structured,
}

/// Classify a whole document.
///
/// A document is [`Mode::RawHtml`] if it contains `<`, an optional `/`, an
/// ASCII letter, and a later `>` anywhere; otherwise it is
/// [`Mode::Structured`]. Never fails: absence of the pattern is the default.
///
/// # Example
/// ```
/// use lessonmark::mode::{detect, Mode};
///
/// assert_eq!(detect("<p>hi</p>"), Mode::RawHtml);
/// assert_eq!(detect("- a\n- b"), Mode::Structured);
/// ```
pub fn detect(content: &str) -> Mode {
    if contains_tag(content.as_bytes()) {
        Mode::RawHtml
    } else {
        Mode::Structured
    }
}

/// Scan for an HTML-style opening or closing tag.
///
/// The tag body is not required to be well-formed: `<p`, `</p`, `<Div` all
/// qualify as soon as a `>` follows anywhere to the right.
fn contains_tag(bytes: &[u8]) -> bool {
    let mut pos = 0;
    while let Some(found) = memchr::memchr(b'<', &bytes[pos..]) {
        let mut i = pos + found + 1;
        if bytes.get(i) == Some(&b'/') {
            i += 1;
        }
        if bytes.get(i).is_some_and(|b| b.is_ascii_alphabetic()) {
            // No `>` to the right of this point means no later candidate
            // can close either.
            return memchr::memchr(b'>', &bytes[i..]).is_some();
        }
        pos = pos + found + 1;
    }
    false
}
