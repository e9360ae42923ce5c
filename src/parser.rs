//! Parser entry points.

use crate::config::Config;
use crate::directives::{DirectiveHandler, DirectiveRegistry};
use crate::environment::Environment;
use crate::syntax::Document;

pub(crate) mod block_parser;
pub mod line_data;

pub use block_parser::tables::{TableSeparatorLine, parse_table_separator};

/// Split a source document into lines the rules can work on: line endings
/// normalised, trailing whitespace removed, and a leading blank line added so
/// cursor positions match 1-based source line numbers.
fn prepare_lines(input: &str) -> Vec<String> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    std::iter::once(String::new())
        .chain(normalized.lines().map(|line| line.trim_end().to_string()))
        .collect()
}

/// A configured parser. Holds the directive table; every call to
/// [`Parser::parse`] works on the caller's [`Environment`].
#[derive(Debug, Clone)]
pub struct Parser {
    config: Config,
    directives: DirectiveRegistry,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Parser {
    pub fn new(config: Config) -> Self {
        let mut directives = DirectiveRegistry::with_builtins();
        for name in &config.directives.disabled {
            if !directives.contains(name) {
                log::warn!("Cannot disable unknown directive {name:?}");
            }
        }

        let disabled: Vec<String> = directives
            .names()
            .into_iter()
            .filter(|name| config.directives.is_disabled(name))
            .map(str::to_string)
            .collect();
        for name in disabled {
            log::debug!("Disabled directive {name:?}");
            directives.unregister(&name);
        }
        Self { config, directives }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    pub fn directives_mut(&mut self) -> &mut DirectiveRegistry {
        &mut self.directives
    }

    pub fn register_directive(&mut self, handler: impl DirectiveHandler + 'static) {
        self.directives.register(handler);
    }

    /// A fresh environment seeded from the configuration.
    pub fn environment(&self) -> Environment {
        Environment::new(self.config.initial_header_level)
            .with_link_targets(self.config.links.iter())
    }

    /// Parse a whole document.
    pub fn parse(&self, environment: &mut Environment, input: &str) -> Document {
        let lines = prepare_lines(input);
        log::debug!("Parsing document of {} lines", lines.len() - 1);
        self.parse_lines(environment, lines)
    }

    /// Parse already split lines with a fresh parse state. Nested content
    /// is parsed this way; the environment is shared with the caller.
    pub fn parse_lines(&self, environment: &mut Environment, lines: Vec<String>) -> Document {
        block_parser::DocumentParser::new(lines, environment, &self.directives, 0).parse()
    }
}
