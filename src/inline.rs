//! Inline span tokenizing.
//!
//! A line of lesson text is split into plain-text runs and bold runs
//! delimited by complete `**…**` pairs. The grammar is deliberately
//! permissive: there is no nesting, an unterminated marker stays literal,
//! and any input string yields a valid span list.

use smallvec::SmallVec;

/// Kind of an inline fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text run.
    Text,
    /// Bold-emphasis run (delimiters already stripped).
    Bold,
}

/// A typed fragment of one line, borrowing from the input document.
///
/// Concatenating the `value`s of a line's spans in order (re-wrapping bold
/// values in `**`) reconstructs the line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSpan<'a> {
    pub kind: SpanKind,
    pub value: &'a str,
}

impl<'a> InlineSpan<'a> {
    /// Plain text span.
    #[inline]
    pub fn text(value: &'a str) -> Self {
        Self {
            kind: SpanKind::Text,
            value,
        }
    }

    /// Bold span.
    #[inline]
    pub fn bold(value: &'a str) -> Self {
        Self {
            kind: SpanKind::Bold,
            value,
        }
    }
}

/// Span storage; most lines hold only a handful of spans.
pub type Spans<'a> = SmallVec<[InlineSpan<'a>; 4]>;

/// Split a line into text and bold spans.
///
/// Only complete `**…**` pairs whose interior is one or more non-asterisk
/// bytes are recognized. A stray `**` with no closing pair renders as
/// literal text, and `**a**b**c**` is matched pairwise — bold(`a`),
/// text(`b`), bold(`c`) — never as nested emphasis.
///
/// The empty line yields a single empty text span; consumers render empty
/// values as nothing.
pub fn tokenize(line: &str) -> Spans<'_> {
    let bytes = line.as_bytes();
    let mut spans = Spans::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(found) = memchr::memchr(b'*', &bytes[pos..]) {
        let open = pos + found;
        // An opener is two consecutive asterisks.
        if open + 1 >= bytes.len() || bytes[open + 1] != b'*' {
            pos = open + 1;
            continue;
        }
        let interior = open + 2;
        let Some(rel) = memchr::memchr(b'*', &bytes[interior..]) else {
            // No further asterisk anywhere: nothing left can close.
            break;
        };
        let close = interior + rel;
        if close == interior {
            // Empty interior (`***…`): slide one byte and retry.
            pos = open + 1;
            continue;
        }
        if close + 1 < bytes.len() && bytes[close + 1] == b'*' {
            if text_start < open {
                spans.push(InlineSpan::text(&line[text_start..open]));
            }
            spans.push(InlineSpan::bold(&line[interior..close]));
            pos = close + 2;
            text_start = pos;
        } else {
            // Lone asterisk after the interior: cannot close this pair and
            // cannot open a new one, so resume past it.
            pos = close + 1;
        }
    }

    if text_start < line.len() || spans.is_empty() {
        spans.push(InlineSpan::text(&line[text_start..]));
    }
    spans
}
