use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser as _;

use rstdoc::diagnostics::{Diagnostic, Severity};
use rstdoc::{Config, Document, Environment, Parser};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = rstdoc::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn parse_file(cfg: Config, file: &Option<PathBuf>) -> io::Result<(Document, Environment)> {
    let input = read_all(file.as_ref())?;
    let parser = Parser::new(cfg);
    let mut environment = parser.environment();
    let file_name = file.as_ref().and_then(|p| p.to_str()).map(str::to_string);
    environment.set_current_file_name(file_name);
    let document = parser.parse(&mut environment, &input);
    Ok((document, environment))
}

fn print_diagnostics(diagnostics: &[Diagnostic], file: Option<&PathBuf>) {
    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };
        let line = diag.location.as_ref().map_or(0, |l| l.line);

        eprintln!(
            "{severity_str}[{}]: {} at {}:{}",
            diag.code(),
            diag.message,
            file_name,
            line
        );
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, json } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let (document, environment) = parse_file(cfg, &file)?;

            if json {
                let out = serde_json::to_string_pretty(&document).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                println!("{:#?}", document);
            }

            print_diagnostics(environment.diagnostics(), file.as_ref());
            Ok(())
        }
        Commands::Check { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let (_, environment) = parse_file(cfg, &file)?;
            let diagnostics = environment.diagnostics();

            if diagnostics.is_empty() {
                if file.is_some() {
                    println!("No issues found");
                }
                return Ok(());
            }

            print_diagnostics(diagnostics, file.as_ref());
            eprintln!("\nFound {} issue(s)", diagnostics.len());
            std::process::exit(1);
        }
    }
}
