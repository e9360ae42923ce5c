pub mod config;
pub mod diagnostics;
pub mod directives;
pub mod environment;
pub mod parser;
pub mod syntax;

pub use config::Config;
pub use config::ConfigBuilder;
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use directives::{DirectiveHandler, DirectiveRegistry};
pub use environment::Environment;
pub use parser::Parser;
pub use syntax::{Document, Node};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a reStructuredText document into a [`Document`].
///
/// Uses the built-in directives and a fresh [`Environment`], which is
/// returned alongside the document so callers can inspect link targets and
/// diagnostics.
///
/// # Examples
///
/// ```rust
/// let input = "Title\n=====\n\nSome text.";
/// let (document, environment) = rstdoc::parse(input, None);
/// assert!(environment.diagnostics().is_empty());
/// println!("{:#?}", document);
/// ```
///
/// # Arguments
///
/// * `input` - The document source
/// * `config` - Optional configuration (defaults to default config)
pub fn parse(input: &str, config: Option<Config>) -> (Document, Environment) {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let parser = Parser::new(config.unwrap_or_default());
    let mut environment = parser.environment();
    let document = parser.parse(&mut environment, input);
    (document, environment)
}

pub fn parse_with_defaults(input: &str) -> Document {
    parse(input, None).0
}
