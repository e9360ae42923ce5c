//! Paragraphs: the fallback for any line no other rule claims.

use crate::syntax::{Node, Span};

use super::lines::LineBuffer;
use super::utils::is_blank;
use super::{DocumentParser, Rule};

/// Rewrite a trailing `::` literal marker. Returns the replacement line (if
/// any text remains) or `None` when the line does not end with `::`.
///
/// - `text::` becomes `text:`
/// - `text ::` becomes `text`
/// - a bare `::` disappears
fn strip_literal_marker(line: &str) -> Option<String> {
    let before = line.trim().strip_suffix("::")?;
    let replacement = if before.trim().is_empty() {
        String::new()
    } else if before.ends_with(char::is_whitespace) {
        before.trim_end().to_string()
    } else {
        format!("{before}:")
    };
    Some(replacement)
}

pub(super) struct ParagraphRule;

impl Rule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn applies(&self, _parser: &DocumentParser<'_>) -> bool {
        true
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        // Separating blank line: nothing to collect.
        if is_blank(parser.current_line()) {
            return None;
        }

        let mut buffer = LineBuffer::new();
        buffer.push(parser.current_line());
        while parser.cursor.peek_next().is_some_and(|next| !is_blank(next)) {
            parser.cursor.advance();
            buffer.push(parser.current_line());
        }

        if let Some(last) = buffer.pop() {
            match strip_literal_marker(&last) {
                Some(replacement) => {
                    parser.state.next_indented_block_is_literal = true;
                    if !replacement.is_empty() {
                        buffer.push(replacement);
                    }
                }
                None => buffer.push(last),
            }
        }

        let lines = buffer.into_lines();
        if lines.iter().all(|line| is_blank(line)) {
            return None;
        }
        Some(Node::Paragraph(Span::from_lines(&lines)))
    }
}
