use crate::parser::line_data::{LinkKind, parse_link};
use crate::syntax::Node;

use super::{DocumentParser, Rule};

/// Hyperlink targets. Every target is registered in the environment; only
/// anchors leave a node behind, so renderers can emit an id at that spot.
pub(super) struct LinkRule;

impl Rule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser
            .cursor
            .current()
            .is_some_and(|line| parse_link(line).is_some())
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let link = parse_link(parser.current_line())?;
        parser.environment.set_link(&link.name, &link.url);

        match link.kind {
            LinkKind::Anchor => Some(Node::Anchor {
                name: link.name.trim().to_lowercase(),
            }),
            LinkKind::Url => None,
        }
    }
}
