use std::cmp::Ordering;

use crate::syntax::Title;

/// Context carried between rule invocations of a single parse. Nested parses
/// start from a fresh state.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParseState {
    /// Set by a paragraph ending in `::` and by directives; the next indented
    /// block is then read as literal text.
    pub(crate) next_indented_block_is_literal: bool,
    pub(crate) last_title: Option<Title>,
    pub(crate) open_sections: Vec<Title>,
}

impl ParseState {
    /// Record a new title and return the sections it closes, innermost first.
    pub(crate) fn enter_title(&mut self, title: &Title) -> Vec<Title> {
        let mut closed = Vec::new();

        if let Some(last) = &self.last_title {
            match title.level.cmp(&last.level) {
                Ordering::Less => {
                    while self
                        .open_sections
                        .last()
                        .is_some_and(|open| open.level >= title.level)
                    {
                        closed.extend(self.open_sections.pop());
                    }
                }
                Ordering::Equal => closed.extend(self.open_sections.pop()),
                Ordering::Greater => {}
            }
        }

        self.open_sections.push(title.clone());
        self.last_title = Some(title.clone());
        closed
    }

    /// Drain every open section, innermost first.
    pub(crate) fn close_all_sections(&mut self) -> Vec<Title> {
        let mut closed = std::mem::take(&mut self.open_sections);
        closed.reverse();
        closed
    }
}
