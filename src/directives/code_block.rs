use crate::syntax::{CodeBlock, Node};

use super::{Directive, DirectiveContext, DirectiveError, DirectiveHandler, require_content};

/// `.. code-block:: language` with the literal body as code.
pub struct CodeBlockDirective;

impl DirectiveHandler for CodeBlockDirective {
    fn name(&self) -> &str {
        "code-block"
    }

    fn aliases(&self) -> &[&str] {
        &["code", "sourcecode"]
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let mut code = require_content(directive, content)?;
        let language = directive.data.trim();
        code.language = (!language.is_empty()).then(|| language.to_string());
        code.line_numbers = directive.options.flag("linenos");
        ctx.push_node(Node::Code(code));
        Ok(())
    }
}
