//! Section titles and transitions.
//!
//! A title is a line of text underlined, and optionally overlined, with a
//! repeated punctuation character. The level is not fixed by the character:
//! the first character seen in a document is level one, the next new one
//! level two, and so on.

use crate::syntax::{Node, Span, Title};

use super::utils::is_blank;
use super::{DocumentParser, Rule};

const HEADER_LETTERS: [char; 32] = [
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Bare markers that look like decoration but introduce literal blocks and
/// comments.
const MARKERS: [&str; 2] = ["::", ".."];

/// The decoration character of a line made of one repeated header letter.
pub(crate) fn special_line_letter(line: &str) -> Option<char> {
    if MARKERS.contains(&line) {
        return None;
    }
    let mut chars = line.chars();
    let letter = chars.next()?;
    if !HEADER_LETTERS.contains(&letter) || line.chars().count() < 2 {
        return None;
    }
    chars.all(|c| c == letter).then_some(letter)
}

fn overline_letter(line: &str, next: Option<&str>) -> Option<char> {
    let letter = special_line_letter(line)?;
    next.filter(|next| !is_blank(next))?;
    Some(letter)
}

fn underline_letter(line: &str, next: Option<&str>) -> Option<char> {
    if is_blank(line) {
        return None;
    }
    special_line_letter(next?)
}

pub(super) struct TitleRule;

impl Rule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        let Some(line) = parser.cursor.current() else {
            return false;
        };
        let next = parser.cursor.peek_next();
        overline_letter(line, next).is_some() || underline_letter(line, next).is_some()
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let overline = overline_letter(parser.current_line(), parser.cursor.peek_next());
        if overline.is_some() {
            parser.cursor.advance();
        }
        let text = parser.current_line().trim().to_string();

        let mut underline = underline_letter(parser.current_line(), parser.cursor.peek_next());
        if let Some(letter) = underline {
            if overline.is_none_or(|over| over == letter) {
                parser.cursor.advance();
            } else {
                underline = None;
            }
        }

        let letter = overline.or(underline)?;
        let level = parser.environment.title_level(letter);
        log::debug!("Title {text:?} with {letter:?} at level {level}");

        let title = Title::new(Span::new(text), level);
        parser.begin_section(&title);
        Some(Node::Title(title))
    }
}

/// A lone decoration line surrounded by blank lines.
pub(super) struct TransitionRule;

impl Rule for TransitionRule {
    fn name(&self) -> &'static str {
        "transition"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser
            .cursor
            .current()
            .and_then(special_line_letter)
            .is_some()
            && parser.cursor.peek_next().is_none_or(is_blank)
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let letter = special_line_letter(parser.current_line())?;
        let level = parser.environment.title_level(letter);
        Some(Node::Separator { level })
    }
}
