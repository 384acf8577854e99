//! Environment configuration for the `ctxhelp` binary.

use std::env;
use std::path::PathBuf;

use crate::data::source::HelpMapSource;

/// Path to a help-map file used instead of the embedded map.
pub const MAP_ENV: &str = "CTXHELP_MAP";
/// `tracing` filter directive, e.g. `ctxhelp=debug`.
pub const LOG_ENV: &str = "CTXHELP_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub map_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            map_path: non_empty_var(MAP_ENV).map(PathBuf::from),
            log_filter: non_empty_var(LOG_ENV),
        }
    }

    pub fn source(&self) -> HelpMapSource {
        match &self.map_path {
            Some(path) => HelpMapSource::File(path.clone()),
            None => HelpMapSource::Embedded,
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
