//! Document-wide registry shared by every rule and every nested parse.

use std::collections::{HashMap, VecDeque};

use crate::diagnostics::{Diagnostic, DiagnosticKind, Location};

/// Name used for anonymous hyperlink targets (`__ url`).
pub const ANONYMOUS_LINK: &str = "_";

#[derive(Debug, Clone)]
pub struct Environment {
    link_targets: HashMap<String, String>,
    anonymous: VecDeque<String>,
    /// Decoration letters in first-seen order. Index + 1 is the assigned level.
    title_letters: Vec<char>,
    diagnostics: Vec<Diagnostic>,
    current_file: Option<String>,
    initial_header_level: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Environment {
    pub fn new(initial_header_level: usize) -> Self {
        Self {
            link_targets: HashMap::new(),
            anonymous: VecDeque::new(),
            title_letters: Vec::new(),
            diagnostics: Vec::new(),
            current_file: None,
            initial_header_level: initial_header_level.max(1),
        }
    }

    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.current_file = Some(name.into());
        self
    }

    pub fn with_link_targets<I, K, V>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, url) in targets {
            self.set_link(name.as_ref(), url.as_ref());
        }
        self
    }

    pub fn current_file_name(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn set_current_file_name(&mut self, name: Option<String>) {
        self.current_file = name;
    }

    pub fn initial_header_level(&self) -> usize {
        self.initial_header_level
    }

    /// Level assigned to a decoration letter, starting at 1. Unknown letters
    /// are appended, so the first letter ever seen is level 1, the second
    /// distinct one level 2, and so on.
    pub fn level_of(&mut self, letter: char) -> usize {
        match self.title_letters.iter().position(|&l| l == letter) {
            Some(index) => index + 1,
            None => {
                self.title_letters.push(letter);
                self.title_letters.len()
            }
        }
    }

    /// Section level for a decoration letter, offset by the initial header level.
    pub fn title_level(&mut self, letter: char) -> usize {
        self.initial_header_level + self.level_of(letter) - 1
    }

    pub fn title_letters(&self) -> &[char] {
        &self.title_letters
    }

    /// Queue a name for the next anonymous target (`__ url`) to bind to.
    pub fn push_anonymous(&mut self, name: impl Into<String>) {
        self.anonymous.push_back(name.into());
    }

    pub fn set_link(&mut self, name: &str, url: &str) {
        let mut name = name.trim().to_lowercase();
        if name == ANONYMOUS_LINK
            && let Some(anonymous) = self.anonymous.pop_front()
        {
            name = anonymous.trim().to_lowercase();
        }
        log::trace!("Registering link target {name:?} -> {url:?}");
        self.link_targets.insert(name, url.trim().to_string());
    }

    pub fn link(&self, name: &str) -> Option<&str> {
        self.link_targets
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn links(&self) -> &HashMap<String, String> {
        &self.link_targets
    }

    /// Look up a target for a reference found at `line`, recording a
    /// diagnostic when nothing was registered under that name.
    pub fn resolve_link(&mut self, name: &str, line: usize) -> Option<String> {
        if let Some(url) = self.link(name) {
            return Some(url.to_string());
        }
        let message = match &self.current_file {
            Some(file) => format!("Found unknown reference \"{}\" in file \"{file}\"", name.trim()),
            None => format!("Found unknown reference \"{}\"", name.trim()),
        };
        let location = Location::new(self.current_file.as_deref(), line);
        self.add_diagnostic(
            Diagnostic::warning(DiagnosticKind::MalformedReference, message).at(location),
        );
        None
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Forget title levels and pending anonymous names before parsing an
    /// unrelated document. Link targets are kept for cross-document references.
    pub fn reset(&mut self) {
        self.title_letters.clear();
        self.anonymous.clear();
        self.diagnostics.clear();
    }
}
