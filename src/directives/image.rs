use crate::syntax::{CodeBlock, Image, Node};

use super::{Directive, DirectiveContext, DirectiveError, DirectiveHandler, require_data};

pub struct ImageDirective;

impl DirectiveHandler for ImageDirective {
    fn name(&self) -> &str {
        "image"
    }

    fn aliases(&self) -> &[&str] {
        &["figure"]
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        _content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let url = require_data(directive)?.to_string();
        let options = directive
            .options
            .iter()
            .map(|(key, value)| {
                let value = value.as_text().unwrap_or_default().to_string();
                (key.to_string(), value)
            })
            .collect();
        ctx.push_node(Node::Image(Image { url, options }));
        Ok(())
    }
}
