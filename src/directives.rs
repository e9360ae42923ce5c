//! Directive handlers and the registry the parser dispatches through.
//!
//! A directive is a `.. name:: data` line followed by an option list and an
//! indented content block. The block parser only recognises that shape; what a
//! directive means is decided by the [`DirectiveHandler`] registered under its
//! name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::environment::Environment;
use crate::parser::block_parser::DocumentParser;
use crate::syntax::{CodeBlock, Document, Node};

mod admonitions;
mod code_block;
mod image;
mod meta;
mod raw;
mod toctree;

pub use admonitions::AdmonitionDirective;
pub use code_block::CodeBlockDirective;
pub use image::ImageDirective;
pub use meta::MetaDirective;
pub use raw::RawDirective;
pub use toctree::ToctreeDirective;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionValue {
    Text(String),
    /// An option written without a value, e.g. `:hidden:`.
    Flag,
}

impl OptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            OptionValue::Flag => None,
        }
    }
}

/// Field list following a directive header, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectiveOptions {
    entries: Vec<(String, OptionValue)>,
}

impl DirectiveOptions {
    /// Set an option. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: OptionValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_text)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub name: String,
    /// Substitution name from `.. |name| directive::`.
    pub variable: Option<String>,
    pub data: String,
    pub options: DirectiveOptions,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable: None,
            data: String::new(),
            options: DirectiveOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    MissingArgument { directive: String },
    MissingContent { directive: String },
    InvalidOption { option: String, value: String, reason: String },
    Custom(String),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::MissingArgument { directive } => {
                write!(f, "the \"{directive}\" directive requires an argument")
            }
            DirectiveError::MissingContent { directive } => {
                write!(f, "the \"{directive}\" directive requires content")
            }
            DirectiveError::InvalidOption {
                option,
                value,
                reason,
            } => write!(f, "invalid value \"{value}\" for option \"{option}\": {reason}"),
            DirectiveError::Custom(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for DirectiveError {}

/// What a handler can do while processing a directive: emit nodes, read and
/// write the environment, and parse nested markup.
pub struct DirectiveContext<'a, 'p> {
    parser: &'a mut DocumentParser<'p>,
    line: usize,
    content_line: usize,
}

impl<'a, 'p> DirectiveContext<'a, 'p> {
    pub(crate) fn new(parser: &'a mut DocumentParser<'p>, line: usize, content_line: usize) -> Self {
        Self {
            parser,
            line,
            content_line,
        }
    }

    pub fn push_node(&mut self, node: Node) {
        self.parser.push_node(node);
    }

    pub fn environment(&mut self) -> &mut Environment {
        self.parser.environment_mut()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.parser.environment().current_file_name()
    }

    /// Source line of the directive header.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parse markup with a fresh parse state that shares this document's
    /// environment. Used for directive bodies such as admonitions.
    pub fn parse_fragment(&mut self, text: &str) -> Document {
        let lines = text.lines().map(str::to_string).collect();
        self.parser.sub_parse(lines, self.content_line)
    }
}

pub trait DirectiveHandler: Send + Sync {
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError>;
}

#[derive(Clone, Default)]
pub struct DirectiveRegistry {
    handlers: HashMap<String, Arc<dyn DirectiveHandler>>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(CodeBlockDirective);
        registry.register(RawDirective);
        registry.register(ImageDirective);
        registry.register(MetaDirective);
        registry.register(ToctreeDirective);
        for admonition in AdmonitionDirective::all() {
            registry.register(admonition);
        }
        registry
    }

    /// Register a handler under its name and aliases, replacing any handler
    /// already registered under one of them.
    pub fn register(&mut self, handler: impl DirectiveHandler + 'static) {
        let handler: Arc<dyn DirectiveHandler> = Arc::new(handler);
        let names = std::iter::once(handler.name()).chain(handler.aliases().iter().copied());
        let names: Vec<String> = names.map(str::to_lowercase).collect();
        for name in names {
            log::trace!("Registering directive handler for {name:?}");
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(&name.to_lowercase()).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn DirectiveHandler>> {
        self.handlers.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

/// Content of a directive that must have a body.
fn require_content(
    directive: &Directive,
    content: Option<CodeBlock>,
) -> Result<CodeBlock, DirectiveError> {
    content.ok_or_else(|| DirectiveError::MissingContent {
        directive: directive.name.clone(),
    })
}

/// Directive data that must not be empty.
fn require_data(directive: &Directive) -> Result<&str, DirectiveError> {
    match directive.data.trim() {
        "" => Err(DirectiveError::MissingArgument {
            directive: directive.name.clone(),
        }),
        data => Ok(data),
    }
}
