//! Per-line classification.

/// Structural class of one trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// `- ` prefix; payload is the text after the marker, not re-trimmed.
    ListItem(&'a str),
    /// `### ` prefix.
    Heading3(&'a str),
    /// `## ` prefix.
    Heading2(&'a str),
    /// Anything else; payload is the full trimmed line.
    Paragraph(&'a str),
}

/// Classify a trimmed line. First match wins.
///
/// `"### "` is checked before `"## "` so the longer, more specific prefix
/// cannot be swallowed by the shorter one. List markers never collide with
/// heading markers, so they are checked first.
pub fn classify(trimmed: &str) -> LineClass<'_> {
    if trimmed.is_empty() {
        LineClass::Blank
    } else if let Some(content) = trimmed.strip_prefix("- ") {
        LineClass::ListItem(content)
    } else if let Some(content) = trimmed.strip_prefix("### ") {
        LineClass::Heading3(content)
    } else if let Some(content) = trimmed.strip_prefix("## ") {
        LineClass::Heading2(content)
    } else {
        LineClass::Paragraph(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert_eq!(classify(""), LineClass::Blank);
    }

    #[test]
    fn test_list_item() {
        assert_eq!(classify("- a"), LineClass::ListItem("a"));
    }

    #[test]
    fn test_list_item_keeps_extra_whitespace() {
        // Only the single separating space belongs to the marker
        assert_eq!(classify("-  indented"), LineClass::ListItem(" indented"));
    }

    #[test]
    fn test_heading_precedence() {
        assert_eq!(classify("### Title"), LineClass::Heading3("Title"));
        assert_eq!(classify("## Title"), LineClass::Heading2("Title"));
    }

    #[test]
    fn test_heading_marker_without_space_is_paragraph() {
        assert_eq!(classify("##x"), LineClass::Paragraph("##x"));
        assert_eq!(classify("###"), LineClass::Paragraph("###"));
    }

    #[test]
    fn test_dash_without_space_is_paragraph() {
        assert_eq!(classify("-a"), LineClass::Paragraph("-a"));
        assert_eq!(classify("-"), LineClass::Paragraph("-"));
    }

    #[test]
    fn test_four_hashes_is_paragraph() {
        // Only levels 2 and 3 exist in this grammar
        assert_eq!(classify("#### deep"), LineClass::Paragraph("#### deep"));
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify("plain text"), LineClass::Paragraph("plain text"));
    }
}
