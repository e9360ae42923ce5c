use crate::syntax::Node;

use super::lines::LineBuffer;
use super::utils::{dedent, is_blank, is_block_line, is_indented, trim_blank_lines};
use super::{DocumentParser, Rule};

/// An indented block that is not literal: its dedented content is parsed as a
/// nested document.
pub(super) struct BlockQuoteRule;

impl Rule for BlockQuoteRule {
    fn name(&self) -> &'static str {
        "block_quote"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        !parser.state.next_indented_block_is_literal
            && parser
                .cursor
                .current()
                .is_some_and(|line| !is_blank(line) && is_indented(line, 1))
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let first_line = parser.line_number();
        let mut buffer = LineBuffer::new();
        buffer.push(parser.current_line());
        while parser
            .cursor
            .peek_next()
            .is_some_and(|next| is_block_line(next, 1))
        {
            parser.cursor.advance();
            buffer.push(parser.current_line());
        }

        let lines = trim_blank_lines(dedent(buffer.lines()));
        if lines.is_empty() {
            return None;
        }
        log::trace!("Block quote of {} lines at line {first_line}", lines.len());
        Some(Node::Quote(parser.sub_parse(lines, first_line)))
    }
}
