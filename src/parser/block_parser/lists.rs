//! Bullet and enumerated lists.

use crate::parser::line_data::parse_list_marker;
use crate::syntax::{List, ListItem, Node};

use super::lines::LineBuffer;
use super::utils::{indentation, is_blank, is_block_line, strip_indent, trim_blank_lines};
use super::{DocumentParser, Rule};

#[derive(Debug)]
struct RawItem {
    marker: String,
    line: usize,
    lines: Vec<String>,
}

/// Split list lines into items. A marker line starts a new item; other lines
/// are continuation text, dedented to the column the item text starts at.
fn split_items(lines: &[String], first_line: usize) -> Vec<RawItem> {
    let mut items: Vec<RawItem> = Vec::new();
    let mut offset = 0;

    for (i, line) in lines.iter().enumerate() {
        if let Some(marker) = parse_list_marker(line, None) {
            offset = marker.offset;
            items.push(RawItem {
                marker: marker.marker,
                line: first_line + i,
                lines: vec![line.get(marker.offset..).unwrap_or_default().to_string()],
            });
            continue;
        }

        let Some(item) = items.last_mut() else {
            continue;
        };
        if item.lines.iter().all(|l| is_blank(l)) && !is_blank(line) {
            // Item text started on the next line; its indentation sets the column.
            offset = indentation(line);
        }
        item.lines.push(strip_indent(line, offset).to_string());
    }

    items
}

pub(super) struct ListRule;

impl Rule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn applies(&self, parser: &DocumentParser<'_>) -> bool {
        !parser.cursor.at_start()
            && parser
                .cursor
                .current()
                .is_some_and(|line| parse_list_marker(line, None).is_some())
    }

    fn apply(&self, parser: &mut DocumentParser<'_>) -> Option<Node> {
        let first_line = parser.line_number();
        let first = parse_list_marker(parser.current_line(), None)?;
        let ordered = first.is_ordered();
        let mut offset = first.offset;

        let mut buffer = LineBuffer::new();
        buffer.push(parser.current_line());

        while let Some(next) = parser.cursor.peek_next() {
            if let Some(marker) = parse_list_marker(next, Some(first.normalized.as_str())) {
                offset = marker.offset;
            } else if !is_block_line(next, offset.max(1)) {
                break;
            }
            parser.cursor.advance();
            if offset <= 1 {
                offset = indentation(parser.current_line());
            }
            buffer.push(parser.current_line());
        }

        let lines = trim_blank_lines(buffer.into_lines());
        let items = split_items(&lines, first_line)
            .into_iter()
            .map(|item| ListItem {
                marker: item.marker,
                children: parser.sub_parse(trim_blank_lines(item.lines), item.line),
            })
            .collect();

        Some(Node::List(List { ordered, items }))
    }
}
