use super::helpers::{assert_block_kinds, kinds, paragraphs, parse_blocks};
use crate::syntax::{List, Node};

fn list(node: &Node) -> &List {
    match node {
        Node::List(list) => list,
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn bullet_list_then_paragraph() {
    let doc = parse_blocks("- one\n- two\n\nAfter\n");
    assert_eq!(kinds(&doc), vec!["list", "paragraph"]);

    let list = list(&doc.nodes()[0]);
    assert!(!list.ordered);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].marker, "-");
    assert_eq!(paragraphs(&list.items[0].children), vec!["one"]);
    assert_eq!(paragraphs(&list.items[1].children), vec!["two"]);
}

#[test]
fn enumerated_list_is_ordered() {
    let doc = parse_blocks("1. first\n2. second\n");
    let list = list(&doc.nodes()[0]);
    assert!(list.ordered);
    assert_eq!(list.items[1].marker, "2.");
}

#[test]
fn continuation_lines_join_the_item() {
    let doc = parse_blocks("- item one\n  continues\n- two\n");
    let list = list(&doc.nodes()[0]);
    assert_eq!(list.items.len(), 2);
    assert_eq!(paragraphs(&list.items[0].children), vec!["item one\ncontinues"]);
}

#[test]
fn nested_list_inside_an_item() {
    let doc = parse_blocks("- one\n\n  - nested\n  - deeper\n\n- two\n");
    assert_eq!(kinds(&doc), vec!["list"]);

    let outer = list(&doc.nodes()[0]);
    assert_eq!(outer.items.len(), 2);
    assert_eq!(kinds(&outer.items[0].children), vec!["paragraph", "list"]);
    assert_eq!(list(&outer.items[0].children.nodes()[1]).items.len(), 2);
}

#[test]
fn different_bullet_starts_a_new_list() {
    assert_block_kinds("- a\n* b\n", &["list", "list"]);
}

#[test]
fn list_after_paragraph() {
    assert_block_kinds("Items:\n\n- a\n- b\n", &["paragraph", "list"]);
}

#[test]
fn item_text_can_be_a_list() {
    let doc = parse_blocks("- - inner one\n  - inner two\n");
    let outer = list(&doc.nodes()[0]);
    assert_eq!(outer.items.len(), 1);
    assert_eq!(kinds(&outer.items[0].children), vec!["list"]);
    assert_eq!(list(&outer.items[0].children.nodes()[0]).items.len(), 2);
}
