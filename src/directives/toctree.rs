use crate::syntax::{CodeBlock, Node, Toc};

use super::{Directive, DirectiveContext, DirectiveError, DirectiveHandler};

/// `.. toctree::` lists the documents that make up a table of contents, one
/// per line of its body.
pub struct ToctreeDirective;

impl DirectiveHandler for ToctreeDirective {
    fn name(&self) -> &str {
        "toctree"
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let max_depth = match directive.options.text("maxdepth") {
            Some(value) => Some(value.trim().parse::<usize>().map_err(|_| {
                DirectiveError::InvalidOption {
                    option: "maxdepth".to_string(),
                    value: value.to_string(),
                    reason: "expected a positive number".to_string(),
                }
            })?),
            None => None,
        };

        let entries = content
            .iter()
            .flat_map(CodeBlock::lines)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        ctx.push_node(Node::Toc(Toc {
            entries,
            max_depth,
            hidden: directive.options.flag("hidden"),
        }));
        Ok(())
    }
}
