//! Line-oriented block assembly.
//!
//! The block layer is line-oriented and handles:
//! - Blank lines (spacers)
//! - `- ` list items, grouped into list blocks
//! - `## ` and `### ` headings
//! - Paragraphs

mod assembler;
mod classifier;
mod node;

pub use assembler::assemble;
pub use classifier::{classify, LineClass};
pub use node::Block;
