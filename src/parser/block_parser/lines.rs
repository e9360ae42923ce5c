//! Forward-only access to the lines of a document.

/// Peekable cursor over owned lines. The position only ever moves forward.
#[derive(Debug, Clone)]
pub(crate) struct LineCursor {
    lines: Vec<String>,
    pos: usize,
}

impl LineCursor {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    /// The line under the cursor, or `None` once the input is exhausted.
    pub(crate) fn current(&self) -> Option<&str> {
        self.lines.get(self.pos).map(String::as_str)
    }

    pub(crate) fn peek_next(&self) -> Option<&str> {
        self.peek_nth(1)
    }

    /// The line `n` positions ahead of the cursor.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&str> {
        self.lines.get(self.pos + n).map(String::as_str)
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn at_start(&self) -> bool {
        self.pos == 0
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.pos < self.lines.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

/// Lines a rule collects while scanning ahead.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.lines.pop()
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
