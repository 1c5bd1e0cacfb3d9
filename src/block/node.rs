//! Block node types.

use crate::inline::Spans;

/// Structural unit of the assembler's output.
///
/// The ordered block sequence is the sole output of [`assemble`]; ownership
/// moves whole to the renderer bridge.
///
/// [`assemble`]: crate::block::assemble
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Section heading (`## `).
    Heading2 {
        /// Inline content.
        spans: Spans<'a>,
    },
    /// Sub-section heading (`### `).
    Heading3 {
        /// Inline content.
        spans: Spans<'a>,
    },
    /// A bare text line.
    Paragraph {
        /// Inline content.
        spans: Spans<'a>,
    },
    /// One or more consecutive `- ` lines, grouped into a single list.
    ListBlock {
        /// One span sequence per list item, in source order. Never empty.
        items: Vec<Spans<'a>>,
    },
    /// A blank source line, rendered as vertical whitespace.
    Spacer,
}
