//! Keyed UI node tree.
//!
//! Bridges the assembled block sequence to a host presentation layer: one
//! element per block, a position-stable key on every element, and a
//! block-level styling hint per tag (heading size, list style, spacing).
//! The mapping is pure; keys never collide within one build.

use crate::block::Block;
use crate::inline::{InlineSpan, SpanKind, Spans};

/// Element kind in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Section heading.
    Heading2,
    /// Sub-section heading.
    Heading3,
    /// Paragraph.
    Paragraph,
    /// Unordered-list container.
    List,
    /// One list item.
    ListItem,
    /// Bold-emphasis run.
    Bold,
    /// Fixed-height empty block standing in for a blank source line.
    Spacer,
}

impl Tag {
    /// HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Paragraph => "p",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Bold => "strong",
            Self::Spacer => "div",
        }
    }

    /// Styling hint: CSS class carrying the per-tag size and spacing.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Heading2 => "lesson-heading-2",
            Self::Heading3 => "lesson-heading-3",
            Self::Paragraph => "lesson-paragraph",
            Self::List => "lesson-list",
            Self::ListItem => "lesson-list-item",
            Self::Bold => "lesson-bold",
            Self::Spacer => "lesson-spacer",
        }
    }
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiNode<'a> {
    /// Keyed element with children.
    Element {
        /// Element kind.
        tag: Tag,
        /// Stable for the node's position within one build.
        key: String,
        /// Child nodes, in order.
        children: Vec<UiNode<'a>>,
    },
    /// Text leaf. Empty text renders as nothing.
    Text(&'a str),
}

/// Render a span sequence as inline nodes.
///
/// Plain runs stay text leaves; bold runs become keyed elements under the
/// given prefix.
pub fn span_nodes<'a>(spans: &[InlineSpan<'a>], key_prefix: &str) -> Vec<UiNode<'a>> {
    spans
        .iter()
        .enumerate()
        .map(|(i, span)| match span.kind {
            SpanKind::Text => UiNode::Text(span.value),
            SpanKind::Bold => UiNode::Element {
                tag: Tag::Bold,
                key: format!("{key_prefix}-b{i}"),
                children: vec![UiNode::Text(span.value)],
            },
        })
        .collect()
}

/// Map an assembled block sequence onto the UI node tree.
///
/// Keys follow `{tag}-{index}` for top-level blocks and `li-{block}-{item}`
/// for list items.
pub fn build_nodes<'a>(blocks: &[Block<'a>]) -> Vec<UiNode<'a>> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| match block {
            Block::Heading2 { spans } => block_element(Tag::Heading2, index, spans),
            Block::Heading3 { spans } => block_element(Tag::Heading3, index, spans),
            Block::Paragraph { spans } => block_element(Tag::Paragraph, index, spans),
            Block::Spacer => UiNode::Element {
                tag: Tag::Spacer,
                key: format!("spacer-{index}"),
                children: Vec::new(),
            },
            Block::ListBlock { items } => UiNode::Element {
                tag: Tag::List,
                key: format!("ul-{index}"),
                children: items
                    .iter()
                    .enumerate()
                    .map(|(item, spans)| {
                        let key = format!("li-{index}-{item}");
                        let children = span_nodes(spans, &key);
                        UiNode::Element {
                            tag: Tag::ListItem,
                            key,
                            children,
                        }
                    })
                    .collect(),
            },
        })
        .collect()
}

fn block_element<'a>(tag: Tag, index: usize, spans: &Spans<'a>) -> UiNode<'a> {
    let key = format!("{}-{index}", tag.name());
    let children = span_nodes(spans, &key);
    UiNode::Element { tag, key, children }
}
