use super::helpers::{kinds, parse_with_env};
use crate::syntax::Node;

#[test]
fn targets_register_and_anchors_leave_nodes() {
    let input = "Intro\n\n.. _python: https://python.org\n.. _install:\n\n__ https://anon.example\n";
    let (doc, env) = parse_with_env(input);

    assert_eq!(kinds(&doc), vec!["paragraph", "anchor"]);
    assert!(matches!(&doc.nodes()[1], Node::Anchor { name } if name == "install"));

    assert_eq!(env.link("python"), Some("https://python.org"));
    assert_eq!(env.link("install"), Some("#install"));
    assert_eq!(env.link("_"), Some("https://anon.example"));
    assert!(env.diagnostics().is_empty());
}

#[test]
fn names_are_case_insensitive() {
    let (_, env) = parse_with_env(".. _`Read The Docs`: https://readthedocs.org\n");
    assert_eq!(env.link("read the docs"), Some("https://readthedocs.org"));
    assert_eq!(env.link("READ THE DOCS"), Some("https://readthedocs.org"));
}

#[test]
fn later_target_wins() {
    let (_, env) = parse_with_env(".. _site: https://old.example\n.. _site: https://new.example\n");
    assert_eq!(env.link("site"), Some("https://new.example"));
}

#[test]
fn quoted_anchor_is_lowercased() {
    let (doc, _) = parse_with_env(".. _`Getting Started`:\n\nText\n");
    assert!(matches!(&doc.nodes()[0], Node::Anchor { name } if name == "getting started"));
}

#[test]
fn comments_produce_nothing() {
    let (doc, env) = parse_with_env(".. a comment\n   that continues\n\nText\n");
    assert_eq!(kinds(&doc), vec!["paragraph"]);
    assert!(env.links().is_empty());
}
