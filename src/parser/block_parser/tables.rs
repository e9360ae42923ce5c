//! Grid and simple tables.
//!
//! Grid tables are drawn with `+`, `-`, `=` and `|`; simple tables only use
//! runs of `=` (or `-`) separated by spaces to mark the columns. Both start
//! with a separator line, whose runs fix the column boundaries for the whole
//! table.

use crate::syntax::{Node, Span, Table, TableKind};

use super::utils::{indentation, is_blank};
use super::{DocumentParser, Rule};

/// A recognised table separator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSeparatorLine {
    /// Grid separator drawn with `=`, closing the header rows.
    pub header: bool,
    pub kind: TableKind,
    /// Column boundaries as character offsets into the source line.
    pub columns: Vec<(usize, usize)>,
    pub line_char: char,
}

/// Recognise a grid (`+---+---+`, `+===+===+`) or simple (`===  ===`) table
/// separator. Simple separators need at least two columns.
pub fn parse_table_separator(line: &str) -> Option<TableSeparatorLine> {
    let indent = indentation(line);
    let trimmed = line.trim();
    if !trimmed.is_ascii() {
        return None;
    }
    let bytes = trimmed.as_bytes();

    match *bytes.first()? {
        b'+' => {
            let line_char = *bytes.get(1)?;
            if !matches!(line_char, b'-' | b'=')
                || !trimmed.ends_with('+')
                || !bytes.iter().all(|&b| b == b'+' || b == line_char)
            {
                return None;
            }

            let plus_positions: Vec<usize> = bytes
                .iter()
                .enumerate()
                .filter_map(|(i, &b)| (b == b'+').then_some(i))
                .collect();
            let columns: Vec<(usize, usize)> = plus_positions
                .windows(2)
                .filter(|pair| pair[1] > pair[0] + 1)
                .map(|pair| (indent + pair[0] + 1, indent + pair[1]))
                .collect();
            if columns.is_empty() {
                return None;
            }

            Some(TableSeparatorLine {
                header: line_char == b'=',
                kind: TableKind::Grid,
                columns,
                line_char: line_char as char,
            })
        }
        line_char @ (b'=' | b'-') => {
            if !bytes.iter().all(|&b| b == line_char || b == b' ') {
                return None;
            }

            let mut columns = Vec::new();
            let mut start = None;
            for (i, &b) in bytes.iter().enumerate() {
                match (b == line_char, start) {
                    (true, None) => start = Some(i),
                    (false, Some(s)) => {
                        columns.push((indent + s, indent + i));
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = start {
                columns.push((indent + s, indent + bytes.len()));
            }
            if columns.len() < 2 {
                return None;
            }

            Some(TableSeparatorLine {
                header: false,
                kind: TableKind::Simple,
                columns,
                line_char: line_char as char,
            })
        }
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum TableLine {
    Separator(TableSeparatorLine),
    Content(String),
}

/// Characters `start..end` of `line`, or to the end of the line without `end`.
fn slice_chars(line: &str, start: usize, end: Option<usize>) -> String {
    let chars = line.chars().skip(start);
    match end {
        Some(end) => chars.take(end.saturating_sub(start)).collect(),
        None => chars.collect(),
    }
}

fn append_cell(cell: &mut String, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if !cell.is_empty() {
        cell.push('\n');
    }
    cell.push_str(text);
}

fn into_row(cells: Vec<String>) -> Vec<Span> {
    cells.into_iter().map(Span::new).collect()
}

fn build_grid(columns: &[(usize, usize)], lines: Vec<TableLine>) -> Table {
    let mut table = Table::new(TableKind::Grid, columns.len());
    let mut rows: Vec<Vec<Span>> = Vec::new();
    let mut row: Option<Vec<String>> = None;

    for line in lines {
        match line {
            TableLine::Content(content) => {
                let cells = row.get_or_insert_with(|| vec![String::new(); columns.len()]);
                for (cell, &(start, end)) in cells.iter_mut().zip(columns) {
                    append_cell(cell, &slice_chars(&content, start, Some(end)));
                }
            }
            TableLine::Separator(separator) => {
                if let Some(cells) = row.take() {
                    rows.push(into_row(cells));
                }
                if separator.header && !table.has_header() {
                    table.header = std::mem::take(&mut rows);
                }
            }
        }
    }
    if let Some(cells) = row.take() {
        rows.push(into_row(cells));
    }

    table.rows = rows;
    table
}

fn build_simple(columns: &[(usize, usize)], lines: Vec<TableLine>) -> Table {
    let mut table = Table::new(TableKind::Simple, columns.len());
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut separators = 0;
    let mut header_end = None;

    for line in lines {
        match line {
            TableLine::Separator(_) => {
                separators += 1;
                if separators == 2 {
                    header_end = Some(rows.len());
                }
            }
            TableLine::Content(content) if is_blank(&content) => {}
            TableLine::Content(content) => {
                let cells: Vec<String> = columns
                    .iter()
                    .enumerate()
                    .map(|(i, &(start, _))| {
                        let end = columns.get(i + 1).map(|&(next, _)| next);
                        slice_chars(&content, start, end).trim().to_string()
                    })
                    .collect();

                let section_start = header_end.filter(|_| separators >= 2).unwrap_or(0);
                let continues = cells[0].is_empty() && rows.len() > section_start;
                match rows.last_mut() {
                    Some(previous) if continues => {
                        for (cell, text) in previous.iter_mut().zip(&cells) {
                            append_cell(cell, text);
                        }
                    }
                    _ => rows.push(cells),
                }
            }
        }
    }

    let mut rows: Vec<Vec<Span>> = rows.into_iter().map(into_row).collect();
    if separators >= 3
        && let Some(header_end) = header_end
    {
        let body = rows.split_off(header_end);
        table.header = rows;
        rows = body;
    }
    table.rows = rows;
    table
}

pub(super) struct TableRule;

impl Rule for TableRule {
    fn name(&self) -> &'static str {
        "table"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        parser
            .cursor
            .current()
            .is_some_and(|line| parse_table_separator(line).is_some())
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let first = parse_table_separator(parser.current_line())?;
        let kind = first.kind;
        let columns = first.columns.clone();
        let mut lines = vec![TableLine::Separator(first)];
        let mut separators = 1;

        while let Some(next) = parser.cursor.peek_next() {
            if let Some(separator) = parse_table_separator(next) {
                parser.cursor.advance();
                lines.push(TableLine::Separator(separator));
                separators += 1;
                if parser.cursor.peek_next().is_none_or(is_blank) {
                    break;
                }
                continue;
            }

            if is_blank(next) {
                // Grid tables never contain blank lines; simple tables only
                // between rows once the header is closed.
                let after = parser.cursor.peek_nth(2);
                if kind == TableKind::Grid || separators < 2 || after.is_none_or(is_blank) {
                    break;
                }
            }

            let content = next.to_string();
            parser.cursor.advance();
            lines.push(TableLine::Content(content));
        }

        log::debug!(
            "Parsed {:?} table with {} columns over {} lines",
            kind,
            columns.len(),
            lines.len()
        );

        let table = match kind {
            TableKind::Grid => build_grid(&columns, lines),
            TableKind::Simple => build_simple(&columns, lines),
        };
        Some(Node::Table(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_separators() {
        let sep = parse_table_separator("+------+------+").unwrap();
        assert_eq!(sep.kind, TableKind::Grid);
        assert!(!sep.header);
        assert_eq!(sep.columns, vec![(1, 7), (8, 14)]);

        let header = parse_table_separator("+======+======+").unwrap();
        assert!(header.header);
        assert_eq!(header.line_char, '=');
    }

    #[test]
    fn indented_separator_keeps_absolute_offsets() {
        let sep = parse_table_separator("  +---+").unwrap();
        assert_eq!(sep.columns, vec![(3, 6)]);
    }

    #[test]
    fn simple_separators() {
        let sep = parse_table_separator("=====  ======").unwrap();
        assert_eq!(sep.kind, TableKind::Simple);
        assert_eq!(sep.columns, vec![(0, 5), (7, 13)]);
        assert_eq!(sep.line_char, '=');
    }

    #[test]
    fn malformed_separators() {
        assert_eq!(parse_table_separator("======"), None);
        assert_eq!(parse_table_separator("+--=--+"), None);
        assert_eq!(parse_table_separator("+-----"), None);
        assert_eq!(parse_table_separator("| A | B |"), None);
        assert_eq!(parse_table_separator("== text =="), None);
        assert_eq!(parse_table_separator(""), None);
    }

    #[test]
    fn slices_by_characters() {
        assert_eq!(slice_chars("| é  | b |", 1, Some(5)), " é  ");
        assert_eq!(slice_chars("abc", 1, None), "bc");
        assert_eq!(slice_chars("ab", 5, Some(8)), "");
    }
}
