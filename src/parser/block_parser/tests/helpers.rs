use crate::directives::{Directive, DirectiveContext, DirectiveError, DirectiveHandler};
use crate::environment::Environment;
use crate::parser::Parser;
use crate::syntax::{CodeBlock, Document, Node, Span};

pub fn parse_blocks(input: &str) -> Document {
    parse_with_env(input).0
}

pub fn parse_with_env(input: &str) -> (Document, Environment) {
    let parser = Parser::default();
    let mut env = parser.environment();
    let doc = parser.parse(&mut env, input);
    (doc, env)
}

/// Short name of each node, for comparing document shapes.
pub fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Title(_) => "title",
        Node::SectionBegin(_) => "section_begin",
        Node::SectionEnd(_) => "section_end",
        Node::Separator { .. } => "separator",
        Node::Paragraph(_) => "paragraph",
        Node::Quote(_) => "quote",
        Node::Code(_) => "code",
        Node::Table(_) => "table",
        Node::Anchor { .. } => "anchor",
        Node::List(_) => "list",
        Node::DefinitionList(_) => "definition_list",
        Node::Admonition(_) => "admonition",
        Node::Raw { .. } => "raw",
        Node::Image(_) => "image",
        Node::Toc(_) => "toc",
        Node::Meta { .. } => "meta",
    }
}

pub fn kinds(doc: &Document) -> Vec<&'static str> {
    doc.nodes().iter().map(node_kind).collect()
}

pub fn assert_block_kinds(input: &str, expected: &[&str]) {
    let doc = parse_blocks(input);
    assert_eq!(
        kinds(&doc),
        expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

pub fn paragraphs(doc: &Document) -> Vec<&str> {
    doc.nodes()
        .iter()
        .filter_map(|node| match node {
            Node::Paragraph(span) => Some(span.as_str()),
            _ => None,
        })
        .collect()
}

/// Section markers must balance, and never close more than they opened.
pub fn assert_sections_balanced(doc: &Document) {
    let mut depth: i64 = 0;
    for node in doc.nodes() {
        match node {
            Node::SectionBegin(_) => depth += 1,
            Node::SectionEnd(_) => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0, "section closed before it was opened: {doc:#?}");
    }
    assert_eq!(depth, 0, "unbalanced sections: {doc:#?}");
}

/// Echoes what the parser dispatched as a paragraph.
pub struct EchoDirective;

impl DirectiveHandler for EchoDirective {
    fn name(&self) -> &str {
        "echo"
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        directive: &Directive,
        content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        let options: Vec<String> = directive
            .options
            .iter()
            .map(|(key, value)| format!("{key}={}", value.as_text().unwrap_or("<flag>")))
            .collect();
        let summary = format!(
            "data={} options=[{}] content={:?}",
            directive.data,
            options.join(","),
            content.map(|c| c.content)
        );
        ctx.push_node(Node::Paragraph(Span::new(summary)));
        Ok(())
    }
}

pub struct FailingDirective;

impl DirectiveHandler for FailingDirective {
    fn name(&self) -> &str {
        "fail"
    }

    fn process(
        &self,
        _ctx: &mut DirectiveContext<'_, '_>,
        _directive: &Directive,
        _content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        Err(DirectiveError::Custom("boom".to_string()))
    }
}

/// A handler with a bug: indexes past the end of its (empty) content.
pub struct PanickingDirective;

impl DirectiveHandler for PanickingDirective {
    fn name(&self) -> &str {
        "crash"
    }

    fn process(
        &self,
        ctx: &mut DirectiveContext<'_, '_>,
        _directive: &Directive,
        _content: Option<CodeBlock>,
    ) -> Result<(), DirectiveError> {
        ctx.push_node(Node::Paragraph(Span::new("before the crash")));
        let lines: Vec<&str> = Vec::new();
        ctx.push_node(Node::Paragraph(Span::new(lines[0])));
        Ok(())
    }
}

pub fn parser_with_test_directives() -> Parser {
    let mut parser = Parser::default();
    parser.register_directive(EchoDirective);
    parser.register_directive(FailingDirective);
    parser.register_directive(PanickingDirective);
    parser
}
