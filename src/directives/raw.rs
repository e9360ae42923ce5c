use crate::syntax::{CodeBlock, Node};

use super::{
    Directive, DirectiveContext, DirectiveError, DirectiveHandler, require_content, require_data,
};

/// `.. raw:: html` passes its body through to the named output format.
pub struct RawDirective;

impl DirectiveHandler for RawDirective {
    fn name(&self) -> &str {
        "raw"
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let format = require_data(directive)?.to_lowercase();
        let content = require_content(directive, content)?.content;
        ctx.push_node(Node::Raw { format, content });
        Ok(())
    }
}
