use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Directive table configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectiveConfig {
    /// Built-in directives that should not be registered. Uses of a disabled
    /// directive are reported as unknown.
    pub disabled: Vec<String>,
}

impl DirectiveConfig {
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|d| d.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Level given to the first decoration style seen in a document.
    pub initial_header_level: usize,
    pub directives: DirectiveConfig,
    /// Link targets known before parsing starts, e.g. shared across a project.
    pub links: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_header_level: 1,
            directives: DirectiveConfig::default(),
            links: BTreeMap::new(),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn initial_header_level(mut self, level: usize) -> Self {
        self.config.initial_header_level = level;
        self
    }

    pub fn disable_directive(mut self, name: impl Into<String>) -> Self {
        self.config.directives.disabled.push(name.into());
        self
    }

    pub fn link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.links.insert(name.into(), url.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".rstdoc.toml", "rstdoc.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CANDIDATE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    })
}

fn xdg_config_path() -> Option<PathBuf> {
    let xdg = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(|xdg| Path::new(&xdg).join("rstdoc").join("config.toml"));
    let home = env::var("HOME").ok().map(|home| {
        Path::new(&home)
            .join(".config")
            .join("rstdoc")
            .join("config.toml")
    });
    xdg.into_iter().chain(home).find(|p| p.is_file())
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .rstdoc.toml, rstdoc.toml
/// 3) XDG: $XDG_CONFIG_HOME/rstdoc/config.toml or ~/.config/rstdoc/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
