use crate::diagnostics::{Diagnostic, DiagnosticKind, Location};
use crate::directives::DirectiveRegistry;
use crate::environment::Environment;
use crate::syntax::{Document, Node, Title};

mod blockquotes;
mod comments;
mod definition_lists;
mod directives;
mod lines;
mod links;
mod lists;
mod literal_blocks;
mod paragraphs;
mod state;
pub(crate) mod tables;
mod titles;
mod utils;

use blockquotes::BlockQuoteRule;
use comments::CommentRule;
use definition_lists::DefinitionListRule;
use directives::DirectiveRule;
use lines::LineCursor;
use links::LinkRule;
use lists::ListRule;
use literal_blocks::LiteralBlockRule;
use paragraphs::ParagraphRule;
use state::ParseState;
use tables::TableRule;
use titles::{TitleRule, TransitionRule};

/// A production: recognises the construct starting at the cursor and
/// consumes it. `apply` leaves the cursor on the last line it consumed.
pub(crate) trait Rule {
    fn name(&self) -> &'static str;

    fn applies(&self, parser: &DocumentParser<'_>) -> bool;

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node>;
}

/// Tried in order at every line; the first rule that applies wins.
const PRODUCTIONS: &[&dyn Rule] = &[
    &TitleRule,
    &TransitionRule,
    &LinkRule,
    &LiteralBlockRule,
    &BlockQuoteRule,
    &ListRule,
    &DirectiveRule,
    &CommentRule,
    &DefinitionListRule,
    &TableRule,
    &ParagraphRule,
];

pub(crate) struct DocumentParser<'a> {
    cursor: LineCursor,
    state: ParseState,
    environment: &'a mut Environment,
    directives: &'a DirectiveRegistry,
    document: Document,
    /// Added to the cursor position to get the source line number.
    line_offset: usize,
}

impl<'a> DocumentParser<'a> {
    pub(crate) fn new(
        lines: Vec<String>,
        environment: &'a mut Environment,
        directives: &'a DirectiveRegistry,
        line_offset: usize,
    ) -> Self {
        Self {
            cursor: LineCursor::new(lines),
            state: ParseState::default(),
            environment,
            directives,
            document: Document::new(),
            line_offset,
        }
    }

    pub(crate) fn parse(mut self) -> Document {
        log::debug!("Starting document parse at line {}", self.line_offset);

        while self.cursor.is_valid() {
            self.parse_line();
            self.cursor.advance();
        }

        for title in self.state.close_all_sections() {
            self.document.push(Node::SectionEnd(title));
        }

        log::debug!("Parsed {} nodes", self.document.len());
        self.document
    }

    fn parse_line(&mut self) {
        log::trace!(
            "Parsing line {}: {:?}",
            self.line_number(),
            self.current_line()
        );

        for rule in PRODUCTIONS {
            if !rule.applies(self) {
                continue;
            }
            log::trace!("Rule {} applies at line {}", rule.name(), self.line_number());
            if let Some(node) = rule.apply(self) {
                self.document.push(node);
            }
            return;
        }

        log::error!("No rule matched line {}", self.line_number());
        let location = Location::new(self.environment.current_file_name(), self.line_number());
        let message = format!("No rule matched line \"{}\"", self.current_line());
        self.environment.add_diagnostic(
            Diagnostic::error(DiagnosticKind::NoRuleMatched, message).at(location),
        );
    }

    /// Parse `lines` as a nested document sharing this parse's environment.
    /// `first_line` is the source line number of `lines[0]`.
    ///
    /// Like top-level input, the lines get a leading blank line so that rules
    /// which need a line before them (lists) also apply to the first one.
    pub(crate) fn sub_parse(&mut self, lines: Vec<String>, first_line: usize) -> Document {
        let lines = std::iter::once(String::new()).chain(lines).collect();
        let line_offset = first_line.saturating_sub(1);
        DocumentParser::new(lines, &mut *self.environment, self.directives, line_offset).parse()
    }

    /// Close the sections a new title ends and open its own.
    fn begin_section(&mut self, title: &Title) {
        for closed in self.state.enter_title(title) {
            self.document.push(Node::SectionEnd(closed));
        }
        self.document.push(Node::SectionBegin(title.clone()));
    }

    fn current_line(&self) -> &str {
        self.cursor.current().unwrap_or_default()
    }

    pub(crate) fn line_number(&self) -> usize {
        self.line_offset + self.cursor.position()
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.document.push(node);
    }

    pub(crate) fn environment(&self) -> &Environment {
        &*self.environment
    }

    pub(crate) fn environment_mut(&mut self) -> &mut Environment {
        &mut *self.environment
    }
}
