//! Help-map sources: embedded webhelp data, a file on disk, or in-memory text.
//! Accepts a bare JSON array or the `define(function() { return [...]; });` module
//! the webhelp bundle ships.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::data::entry::HelpEntry;
use crate::error::{Error, Result};

/// Context-help map of the WiFi driver documentation, compiled into the crate.
pub const EMBEDDED_HELP_MAP: &str = include_str!("../../data/context-help-map.js");

#[derive(Debug, Clone)]
pub enum HelpMapSource {
    Embedded,
    File(PathBuf),
    Text(String),
}

impl HelpMapSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        HelpMapSource::File(path.as_ref().to_path_buf())
    }

    pub fn read_text(&self) -> Result<Cow<'_, str>> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(EMBEDDED_HELP_MAP)),
            Self::File(path) => Ok(Cow::Owned(fs::read_to_string(path)?)),
            Self::Text(text) => Ok(Cow::Borrowed(text)),
        }
    }
}

impl fmt::Display for HelpMapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Text(_) => write!(f, "inline"),
        }
    }
}

/// Strip the AMD module wrapper if present, returning the JSON array text.
pub fn unwrap_module(text: &str) -> Result<&str> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('[') {
        return Ok(trimmed);
    }
    if !trimmed.starts_with("define") {
        // Not a module; let serde report what it is.
        return Ok(trimmed);
    }
    let body_start = trimmed.find("return").map_or(0, |pos| pos + "return".len());
    let open = trimmed[body_start..]
        .find('[')
        .map(|pos| body_start + pos)
        .ok_or(Error::MissingArray)?;
    match trimmed.rfind(']') {
        Some(close) if close > open => Ok(&trimmed[open..=close]),
        // Truncated array; serde reports where it ends.
        _ => Ok(&trimmed[open..]),
    }
}

/// Parse source text into raw JSON records without schema checks.
pub fn parse_records(text: &str) -> Result<Vec<Value>> {
    let json = unwrap_module(text)?;
    Ok(serde_json::from_str(json)?)
}

/// Parse source text into entries, failing on the first malformed record.
pub fn parse_help_map(text: &str) -> Result<Vec<HelpEntry>> {
    parse_records(text)?
        .iter()
        .enumerate()
        .map(|(index, record)| HelpEntry::from_record(index, record))
        .collect()
}
