use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::diagnostics::{Diagnostic, DiagnosticKind, Location};
use crate::directives::{Directive, DirectiveContext};
use crate::parser::line_data::{parse_directive_header, parse_directive_option};
use crate::syntax::{CodeBlock, Node};

use super::literal_blocks::LiteralBlockRule;
use super::utils::{is_blank, is_block_line};
use super::{DocumentParser, Rule};

/// `.. name:: data` headers with their options and indented content. The
/// registered handler decides what, if anything, ends up in the document.
pub(super) struct DirectiveRule;

impl Rule for DirectiveRule {
    fn name(&self) -> &'static str {
        "directive"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser
            .cursor
            .current()
            .is_some_and(|line| parse_directive_header(line).is_some())
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let opening = parser.current_line().to_string();
        let line = parser.line_number();
        let mut directive = parse_directive_header(&opening)?;

        while let Some((key, value)) = parser.cursor.peek_next().and_then(parse_directive_option) {
            parser.cursor.advance();
            directive.options.insert(key, value);
        }

        parser.state.next_indented_block_is_literal = true;
        let mut content_line = line + 1;
        let content = if parser
            .cursor
            .peek_next()
            .is_some_and(|next| is_block_line(next, 1))
        {
            parser.cursor.advance();
            let mut blank = 0;
            while parser.cursor.peek_nth(blank).is_some_and(is_blank) {
                blank += 1;
            }
            content_line = parser.line_number() + blank;
            LiteralBlockRule::read_block(parser)
        } else {
            None
        };
        parser.state.next_indented_block_is_literal = false;

        dispatch(parser, &directive, content, &opening, line, content_line);
        None
    }
}

fn dispatch(
    parser: &mut DocumentParser<'_>,
    directive: &Directive,
    content: Option<CodeBlock>,
    opening: &str,
    line: usize,
    content_line: usize,
) {
    let directives = parser.directives;
    let file = parser.environment.current_file_name().map(str::to_string);
    let location = Location::new(file.as_deref(), line);
    let in_file = file
        .as_deref()
        .map(|f| format!(" in \"{f}\""))
        .unwrap_or_default();

    let Some(handler) = directives.get(&directive.name) else {
        let message = format!(
            "Unknown directive \"{}\"{in_file} for line \"{opening}\"",
            directive.name
        );
        parser.environment.add_diagnostic(
            Diagnostic::warning(DiagnosticKind::UnknownDirective, message).at(location),
        );
        return;
    };

    log::debug!("Dispatching directive {:?} at line {line}", directive.name);
    let mut ctx = DirectiveContext::new(parser, line, content_line);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        handler.process(&mut ctx, directive, content)
    }));
    let reason = match outcome {
        Ok(Ok(())) => return,
        Ok(Err(err)) => err.to_string(),
        Err(payload) => {
            log::error!("Directive {:?} panicked at line {line}", directive.name);
            panic_message(&*payload)
        }
    };

    let message = format!(
        "Error while processing \"{}\" directive{in_file}: {reason}",
        directive.name
    );
    parser.environment.add_diagnostic(
        Diagnostic::warning(DiagnosticKind::DirectiveFailure, message).at(location),
    );
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
