//! Block assembly: the line loop and the list accumulator.

use crate::inline::tokenize;

use super::classifier::{classify, LineClass};
use super::node::Block;

/// Buffers consecutive `- ` lines until a non-list line closes the group.
///
/// An explicit two-state machine: the buffer is the sole payload of the
/// accumulating state, so a flush while not in a list is trivially a no-op
/// and an empty list block can never be emitted.
#[derive(Debug, Default)]
enum ListAccumulator<'a> {
    #[default]
    NotInList,
    AccumulatingList(Vec<&'a str>),
}

impl<'a> ListAccumulator<'a> {
    /// Append one item's content, entering the accumulating state if needed.
    fn push(&mut self, content: &'a str) {
        match self {
            Self::NotInList => *self = Self::AccumulatingList(vec![content]),
            Self::AccumulatingList(buffer) => buffer.push(content),
        }
    }

    /// Close the pending group, if any, and return to `NotInList`.
    ///
    /// Each buffered item is tokenized independently; buffer order is
    /// preserved. Idempotent when the buffer is empty.
    fn flush(&mut self) -> Option<Block<'a>> {
        match std::mem::take(self) {
            Self::NotInList => None,
            Self::AccumulatingList(buffer) => Some(Block::ListBlock {
                items: buffer.into_iter().map(tokenize).collect(),
            }),
        }
    }
}

/// Assemble a raw document into an ordered block sequence.
///
/// A single left-to-right pass over the lines (`str::lines`, which also
/// normalizes `\r\n` endings). A blank line first closes any open list and
/// then contributes its own spacer, so one input line can yield two output
/// blocks; a list running to end of input is closed by the final flush.
///
/// Deterministic and total: degenerate inputs (empty string, only blank
/// lines) yield valid, possibly empty, sequences. The empty document yields
/// the empty sequence; a document of a single newline yields one spacer.
pub fn assemble(document: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut lists = ListAccumulator::default();

    for line in document.lines() {
        match classify(line.trim()) {
            LineClass::Blank => {
                blocks.extend(lists.flush());
                blocks.push(Block::Spacer);
            }
            LineClass::ListItem(content) => lists.push(content),
            LineClass::Heading3(content) => {
                blocks.extend(lists.flush());
                blocks.push(Block::Heading3 {
                    spans: tokenize(content),
                });
            }
            LineClass::Heading2(content) => {
                blocks.extend(lists.flush());
                blocks.push(Block::Heading2 {
                    spans: tokenize(content),
                });
            }
            LineClass::Paragraph(content) => {
                blocks.extend(lists.flush());
                blocks.push(Block::Paragraph {
                    spans: tokenize(content),
                });
            }
        }
    }

    blocks.extend(lists.flush());
    blocks
}
