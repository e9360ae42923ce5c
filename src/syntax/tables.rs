use serde::Serialize;

use super::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// `+----+----+` bordered tables.
    Grid,
    /// `====  ====` column-aligned tables.
    Simple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub kind: TableKind,
    pub columns: usize,
    pub header: Vec<Vec<Span>>,
    pub rows: Vec<Vec<Span>>,
}

impl Table {
    pub fn new(kind: TableKind, columns: usize) -> Self {
        Self {
            kind,
            columns,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Text of every cell in `row`, for quick comparisons.
    pub fn row_text(row: &[Span]) -> Vec<&str> {
        row.iter().map(Span::as_str).collect()
    }
}
