use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rstdoc")]
#[command(author, version)]
#[command(about = "A parser for reStructuredText documents")]
#[command(
    long_about = "rstdoc parses reStructuredText documents into a structured document tree: \
    sections, titles, paragraphs, literal blocks, block quotes, lists, definition lists, \
    tables, hyperlink targets and directives. It reports unknown or failing directives \
    as diagnostics instead of aborting."
)]
#[command(after_help = "\
EXAMPLES:

    # Print the document tree of a file
    rstdoc parse index.rst

    # Parse from stdin and print JSON
    cat index.rst | rstdoc parse --json

    # Report diagnostics (exit code 1 if any)
    rstdoc check index.rst

    # Use custom config
    rstdoc parse --config custom.toml index.rst

CONFIGURATION:

rstdoc looks for configuration files in this order:
  1. Explicit --config path
  2. rstdoc.toml or .rstdoc.toml in current/parent directories
  3. ~/.config/rstdoc/config.toml (XDG)
  4. Built-in defaults

Example .rstdoc.toml:

    initial_header_level = 1

    [directives]
    disabled = [\"raw\"]

    [links]
    python = \"https://www.python.org\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, rstdoc will \
        search for .rstdoc.toml or rstdoc.toml in the current directory and its parents, \
        then fall back to ~/.config/rstdoc/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and display the document tree
    #[command(
        long_about = "Parse a document and display the resulting document tree. Diagnostics \
        such as unknown directives are printed to stderr; the exit code is 0 unless the \
        input cannot be read."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    rstdoc parse index.rst

    # Parse from stdin
    echo 'Title' | rstdoc parse

    # Machine-readable output
    rstdoc parse --json index.rst")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report diagnostics without printing the tree
    #[command(
        long_about = "Parse a document and report diagnostics only. Exits with code 1 if \
        any diagnostic was produced, which makes it usable in CI pipelines."
    )]
    Check {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
