use super::helpers::{assert_block_kinds, kinds, parse_blocks};
use crate::syntax::{Node, Table, TableKind};

fn only_table(input: &str) -> Table {
    let doc = parse_blocks(input);
    match doc.nodes() {
        [Node::Table(table), ..] => table.clone(),
        other => panic!("expected a table first, got {other:?}"),
    }
}

fn texts(rows: &[Vec<crate::syntax::Span>]) -> Vec<Vec<&str>> {
    rows.iter().map(|row| Table::row_text(row)).collect()
}

#[test]
fn grid_table_with_header() {
    let table = only_table(
        "+-----+-----+\n\
         | A   | B   |\n\
         +=====+=====+\n\
         | 1   | 2   |\n\
         +-----+-----+\n",
    );
    assert_eq!(table.kind, TableKind::Grid);
    assert_eq!(table.columns, 2);
    assert_eq!(texts(&table.header), vec![vec!["A", "B"]]);
    assert_eq!(texts(&table.rows), vec![vec!["1", "2"]]);
}

#[test]
fn grid_cells_span_several_lines() {
    let table = only_table("+---+---+\n| a | b |\n| c |   |\n+---+---+\n");
    assert!(!table.has_header());
    assert_eq!(texts(&table.rows), vec![vec!["a\nc", "b"]]);
}

#[test]
fn simple_table_with_header() {
    let table = only_table(
        "=====  =====\n\
         Name   Value\n\
         =====  =====\n\
         foo    1\n\
         bar    2\n\
         =====  =====\n",
    );
    assert_eq!(table.kind, TableKind::Simple);
    assert_eq!(texts(&table.header), vec![vec!["Name", "Value"]]);
    assert_eq!(texts(&table.rows), vec![vec!["foo", "1"], vec!["bar", "2"]]);
}

#[test]
fn simple_table_continuation_rows() {
    let table = only_table("=====  =====\nfirst  a\n       b\nsecond c\n=====  =====\n");
    assert!(!table.has_header());
    assert_eq!(
        texts(&table.rows),
        vec![vec!["first", "a\nb"], vec!["second", "c"]]
    );
}

#[test]
fn table_followed_by_paragraph() {
    assert_block_kinds(
        "+---+---+\n| a | b |\n+---+---+\n\nAfter\n",
        &["table", "paragraph"],
    );
}

#[test]
fn unclosed_grid_keeps_its_last_row() {
    let doc = parse_blocks("+---+---+\n| a | b |\n\nAfter\n");
    assert_eq!(kinds(&doc), vec!["table", "paragraph"]);
    let Node::Table(table) = &doc.nodes()[0] else {
        panic!("expected a table");
    };
    assert_eq!(texts(&table.rows), vec![vec!["a", "b"]]);
}
