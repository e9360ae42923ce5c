//! Definition lists: an unindented term line followed by an indented
//! definition.
//!
//! ```text
//! term : classifier
//!     Definition text.
//! ```

use crate::syntax::{DefinitionList, DefinitionListItem, Node, Span};

use super::lines::LineBuffer;
use super::utils::{dedent, is_blank, is_indented, trim_blank_lines};
use super::{DocumentParser, Rule};

fn is_definition(line: &str) -> bool {
    !is_blank(line) && is_indented(line, 1)
}

fn is_term(line: &str) -> bool {
    !is_blank(line) && !is_indented(line, 1)
}

#[derive(Debug)]
struct RawTerm {
    term: String,
    classifiers: Vec<String>,
    line: usize,
    definition: Vec<String>,
}

fn split_terms(lines: &[String], first_line: usize) -> Vec<RawTerm> {
    let mut terms: Vec<RawTerm> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if is_term(line) {
            let mut parts = line.trim().split(" : ").map(|part| part.trim().to_string());
            terms.push(RawTerm {
                term: parts.next().unwrap_or_default(),
                classifiers: parts.filter(|part| !part.is_empty()).collect(),
                line: first_line + i,
                definition: Vec::new(),
            });
        } else if let Some(term) = terms.last_mut() {
            term.definition.push(line.clone());
        }
    }

    terms
}

pub(super) struct DefinitionListRule;

impl Rule for DefinitionListRule {
    fn name(&self) -> &'static str {
        "definition_list"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser.cursor.current().is_some_and(is_term)
            && parser.cursor.peek_next().is_some_and(is_definition)
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let first_line = parser.line_number();
        let mut buffer = LineBuffer::new();
        buffer.push(parser.current_line());

        while let Some(next) = parser.cursor.peek_next() {
            let continues = is_blank(next)
                || is_indented(next, 1)
                || parser.cursor.peek_nth(2).is_some_and(is_definition);
            if !continues {
                break;
            }
            parser.cursor.advance();
            buffer.push(parser.current_line());
        }

        let lines = trim_blank_lines(buffer.into_lines());
        let items = split_terms(&lines, first_line)
            .into_iter()
            .map(|raw| {
                let definition = trim_blank_lines(dedent(&raw.definition));
                DefinitionListItem {
                    term: Span::new(raw.term),
                    classifiers: raw.classifiers.into_iter().map(Span::new).collect(),
                    definition: parser.sub_parse(definition, raw.line + 1),
                }
            })
            .collect();

        Some(Node::DefinitionList(DefinitionList { items }))
    }
}
