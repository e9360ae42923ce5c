use crate::syntax::Node;

use super::utils::{is_blank, is_indented};
use super::{DocumentParser, Rule};

fn is_comment(line: &str) -> bool {
    line.starts_with(".. ")
}

/// `.. text` lines and the indented lines below them. Consumed without
/// producing a node.
pub(super) struct CommentRule;

impl Rule for CommentRule {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser.cursor.current().is_some_and(is_comment)
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        while parser
            .cursor
            .peek_next()
            .is_some_and(|next| !is_blank(next) && is_indented(next, 1))
        {
            parser.cursor.advance();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment(".. a comment"));
        assert!(!is_comment("..not a comment"));
        assert!(!is_comment("text"));
    }
}
