use crate::syntax::{CodeBlock, Node};

use super::lines::LineBuffer;
use super::utils::{dedent, is_block_line, trim_blank_lines};
use super::{DocumentParser, Rule};

/// The indented block after a `::` paragraph or a directive header, kept
/// verbatim.
pub(super) struct LiteralBlockRule;

impl LiteralBlockRule {
    /// Consume the block as code. Also used by directives for their content.
    pub(super) fn read_block(parser: &mut DocumentParser<'_>) -> Option<CodeBlock> {
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
        parser.state.next_indented_block_is_literal = false;

        let lines = trim_blank_lines(dedent(buffer.lines()));
        if lines.is_empty() {
            return None;
        }
        Some(CodeBlock::new(lines.join("\n")))
    }
}

impl Rule for LiteralBlockRule {
    fn name(&self) -> &'static str {
        "literal_block"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser.state.next_indented_block_is_literal
            && parser
                .cursor
                .current()
                .is_some_and(|line| is_block_line(line, 1))
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        Self::read_block(parser).map(Node::Code)
    }
}
