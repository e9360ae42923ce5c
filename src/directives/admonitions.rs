use crate::syntax::{Admonition, CodeBlock, Node, Span};

use super::{Directive, DirectiveContext, DirectiveError, DirectiveHandler, require_data};

const KINDS: &[&str] = &[
    "note",
    "warning",
    "tip",
    "hint",
    "important",
    "caution",
    "attention",
    "danger",
    "error",
];

/// Callout boxes. The named kinds (`note`, `warning`, ...) treat the header
/// data as the first line of the body; the generic `admonition` directive uses
/// it as the title instead.
pub struct AdmonitionDirective {
    kind: &'static str,
}

impl AdmonitionDirective {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }

    pub fn generic() -> Self {
        Self::new("admonition")
    }

    /// The generic directive plus every named kind.
    pub fn all() -> impl Iterator<Item = Self> {
        std::iter::once(Self::generic()).chain(KINDS.iter().map(|&kind| Self::new(kind)))
    }

    fn is_generic(&self) -> bool {
        self.kind == "admonition"
    }
}

impl DirectiveHandler for AdmonitionDirective {
    fn name(&self) -> &str {
        self.kind
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let body = content.map(|code| code.content).unwrap_or_default();

        let (title, body) = if self.is_generic() {
            (Some(Span::new(require_data(directive)?)), body)
        } else {
            match directive.data.trim() {
                "" => (None, body),
                data if body.is_empty() => (None, data.to_string()),
                data => (None, format!("{data}\n{body}")),
            }
        };

        if title.is_none() && body.trim().is_empty() {
            return Err(DirectiveError::MissingContent {
                directive: directive.name.clone(),
            });
        }

        let children = ctx.parse_fragment(&body);
        ctx.push_node(Node::Admonition(Admonition {
            kind: self.kind.to_string(),
            title,
            children,
        }));
        Ok(())
    }
}
