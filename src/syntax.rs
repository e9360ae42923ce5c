//! Document tree produced by the block parser.
//!
//! The tree is flat at the section level: sections are delimited by
//! [`Node::SectionBegin`] and [`Node::SectionEnd`] markers inside the node
//! sequence instead of owning their children. Nested containers (quotes, list
//! items, definitions, admonitions) own a full [`Document`] of their own.

use serde::Serialize;

mod tables;

pub use tables::{Table, TableKind};

/// Raw inline content. Inline markup is resolved later by the renderer, so a
/// span only carries the source text with its lines joined by `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: Span,
    pub level: usize,
}

impl Title {
    pub fn new(text: Span, level: usize) -> Self {
        Self { text, level }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: String,
    pub line_numbers: bool,
}

impl CodeBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Marker as written in the source, e.g. `*`, `1.` or `(a)`.
    pub marker: String,
    pub children: Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionList {
    pub items: Vec<DefinitionListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionListItem {
    pub term: Span,
    pub classifiers: Vec<Span>,
    pub definition: Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admonition {
    /// Directive name, e.g. `note` or `warning`.
    pub kind: String,
    pub title: Option<Span>,
    pub children: Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub options: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toc {
    pub entries: Vec<String>,
    pub max_depth: Option<usize>,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Title(Title),
    SectionBegin(Title),
    SectionEnd(Title),
    Separator { level: usize },
    Paragraph(Span),
    Quote(Document),
    Code(CodeBlock),
    Table(Table),
    Anchor { name: String },
    List(List),
    DefinitionList(DefinitionList),
    Admonition(Admonition),
    Raw { format: String, content: String },
    Image(Image),
    Toc(Toc),
    Meta { name: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Top-level titles in document order.
    pub fn titles(&self) -> impl Iterator<Item = &Title> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Title(title) => Some(title),
            _ => None,
        })
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_joins_lines_with_newlines() {
        let span = Span::from_lines(&["line one", "line two"]);
        assert_eq!(span.as_str(), "line one\nline two");
    }

    #[test]
    fn blank_span_is_empty() {
        assert!(Span::from_lines(&["", "  "]).is_empty());
        assert!(!Span::new("x").is_empty());
    }

    #[test]
    fn titles_skips_other_nodes() {
        let title = Title::new(Span::new("Intro"), 1);
        let doc = Document {
            nodes: vec![
                Node::SectionBegin(title.clone()),
                Node::Title(title.clone()),
                Node::Paragraph(Span::new("body")),
                Node::SectionEnd(title.clone()),
            ],
        };
        let titles: Vec<_> = doc.titles().collect();
        assert_eq!(titles, vec![&title]);
    }

    #[test]
    fn nodes_serialize_with_type_tag() {
        let node = Node::Paragraph(Span::new("hello"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["text"], "hello");

        let separator = serde_json::to_value(Node::Separator { level: 2 }).unwrap();
        assert_eq!(separator["type"], "separator");
        assert_eq!(separator["level"], 2);
    }
}
