use lessonmark::{assemble, to_html, tokenize, SpanKind};
use proptest::prelude::*;

proptest! {
    /// The pipeline is total: no input string may panic it.
    #[test]
    fn never_panics(input in "[ -~\t\r\n]{0,200}") {
        let _ = to_html(&input);
    }

    /// Arbitrary unicode lines cannot panic the tokenizer either.
    #[test]
    fn tokenize_never_panics(line in ".*") {
        let _ = tokenize(&line);
    }

    /// Pure function: re-running yields a structurally equal sequence.
    #[test]
    fn assemble_is_deterministic(input in "[a-z*#\\- \n]{0,120}") {
        prop_assert_eq!(assemble(&input), assemble(&input));
    }

    /// Re-wrapping bold spans in their delimiters reconstructs the line.
    #[test]
    fn spans_reconstruct_line(line in "[^\r\n]*") {
        let mut rebuilt = String::new();
        for span in tokenize(&line) {
            match span.kind {
                SpanKind::Text => rebuilt.push_str(span.value),
                SpanKind::Bold => {
                    rebuilt.push_str("**");
                    rebuilt.push_str(span.value);
                    rebuilt.push_str("**");
                }
            }
        }
        prop_assert_eq!(rebuilt, line);
    }

    /// Bold spans never contain asterisks or their delimiters.
    #[test]
    fn bold_interiors_are_asterisk_free(line in "[*a-z ]{0,32}") {
        for span in tokenize(&line) {
            if span.kind == SpanKind::Bold {
                prop_assert!(!span.value.is_empty());
                prop_assert!(!span.value.contains('*'));
            }
        }
    }

    /// Block count never exceeds lines + 1 (a blank line can add two blocks,
    /// but only by also closing a list that consumed earlier lines).
    #[test]
    fn block_count_is_bounded(input in "([a-z*#\\- ]{0,12}\n){0,16}") {
        let lines = input.lines().count();
        prop_assert!(assemble(&input).len() <= lines + 1);
    }
}
