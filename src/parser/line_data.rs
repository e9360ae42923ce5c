//! Recognisers for single source lines: hyperlink targets, directive headers,
//! directive options and list markers.

use std::sync::OnceLock;

use regex::Regex;

use crate::directives::{Directive, OptionValue};
use crate::environment::ANONYMOUS_LINK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `.. _name: url` and anonymous `__ url` targets.
    Url,
    /// `.. _name:` with nothing after the colon; points at its own location.
    Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub name: String,
    pub url: String,
    pub kind: LinkKind,
}

impl LinkTarget {
    fn url(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim().to_string(),
            kind: LinkKind::Url,
        }
    }

    fn anchor(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: format!("#{name}"),
            kind: LinkKind::Anchor,
        }
    }
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid line pattern"))
}

/// Parse a hyperlink target line.
pub fn parse_link(line: &str) -> Option<LinkTarget> {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    static PLAIN: OnceLock<Regex> = OnceLock::new();
    static ANONYMOUS: OnceLock<Regex> = OnceLock::new();
    static QUOTED_ANCHOR: OnceLock<Regex> = OnceLock::new();
    static PLAIN_ANCHOR: OnceLock<Regex> = OnceLock::new();

    let line = line.trim();

    if let Some(caps) = regex(&QUOTED, r"^\.\. _`(.+)`: (.+)$").captures(line) {
        return Some(LinkTarget::url(&caps[1], &caps[2]));
    }
    if let Some(caps) = regex(&PLAIN, r"^\.\. _(.+?): (.+)$").captures(line) {
        return Some(LinkTarget::url(&caps[1], &caps[2]));
    }
    if let Some(caps) = regex(&ANONYMOUS, r"^__ (.+)$").captures(line) {
        return Some(LinkTarget::url(ANONYMOUS_LINK, &caps[1]));
    }
    if let Some(caps) = regex(&QUOTED_ANCHOR, r"^\.\. _`(.+)`:$").captures(line) {
        return Some(LinkTarget::anchor(&caps[1]));
    }
    if let Some(caps) = regex(&PLAIN_ANCHOR, r"^\.\. _(.+):$").captures(line) {
        return Some(LinkTarget::anchor(&caps[1]));
    }

    None
}

/// Parse a `.. [|variable| ]name:: data` directive header.
pub fn parse_directive_header(line: &str) -> Option<Directive> {
    static HEADER: OnceLock<Regex> = OnceLock::new();

    let caps = regex(&HEADER, r"^\.\. (?:\|(.+?)\| )?(\S+?)::(?: (.*))?$").captures(line)?;

    let mut directive = Directive::new(&caps[2]);
    directive.variable = caps.get(1).map(|m| m.as_str().to_string());
    directive.data = caps
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    Some(directive)
}

/// Parse an indented `:key: value` (or bare `:key:`) directive option line.
pub fn parse_directive_option(line: &str) -> Option<(String, OptionValue)> {
    static VALUE: OnceLock<Regex> = OnceLock::new();
    static FLAG: OnceLock<Regex> = OnceLock::new();

    if let Some(caps) = regex(&VALUE, r"^\s+:(.+?): (.*)$").captures(line) {
        let value = caps[2].trim();
        let value = if value.is_empty() {
            OptionValue::Flag
        } else {
            OptionValue::Text(value.to_string())
        };
        return Some((caps[1].trim().to_string(), value));
    }
    if let Some(caps) = regex(&FLAG, r"^\s+:(.+?):\s*$").captures(line) {
        return Some((caps[1].trim().to_string(), OptionValue::Flag));
    }

    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// Marker as written, e.g. `-`, `12.` or `(3)`.
    pub marker: String,
    /// Marker with digits replaced by `d`, so `1.` and `12.` compare equal.
    pub normalized: String,
    /// Column where the item text starts.
    pub offset: usize,
}

impl ListMarker {
    /// Enumerated markers are longer than a single bullet character.
    pub fn is_ordered(&self) -> bool {
        self.marker.chars().count() > 1
    }
}

/// Recognise a bullet or enumerated list item line. With `expected`, only a
/// marker of the same normalised shape matches.
pub fn parse_list_marker(line: &str, expected: Option<&str>) -> Option<ListMarker> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    static DIGITS: OnceLock<Regex> = OnceLock::new();

    let caps = regex(
        &MARKER,
        r"^([-+*\x{2022}\x{2023}\x{2043}]|(?:[\d#]+\.|[\d#]+\)|\([\d#]+\)))(?:\s+|$)",
    )
    .captures(line)?;

    let marker = caps[1].to_string();
    let normalized = regex(&DIGITS, r"\d+").replace_all(&marker, "d").into_owned();
    if expected.is_some_and(|expected| expected != normalized) {
        return None;
    }

    Some(ListMarker {
        marker,
        normalized,
        offset: caps[0].len(),
    })
}
