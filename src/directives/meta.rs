use crate::syntax::{CodeBlock, Node};

use super::{Directive, DirectiveContext, DirectiveError, DirectiveHandler};

/// `.. meta::` turns each option into a document metadata entry.
pub struct MetaDirective;

impl DirectiveHandler for MetaDirective {
    fn name(&self) -> &str {
        "meta"
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        _content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        if directive.options.is_empty() {
            return Err(DirectiveError::Custom(
                "the \"meta\" directive needs at least one option".to_string(),
            ));
        }
        for (name, value) in directive.options.iter() {
            ctx.push_node(Node::Meta {
                name: name.to_string(),
                value: value.as_text().unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }
}
