//! Context-sensitive help lookup for the WiFi driver documentation.
//!
//! A [`Resolver`] maps API identifiers (`WDRV_WINC_Open`, ...) to the webhelp
//! topic that documents them.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod resolver;

pub use data::entry::HelpEntry;
pub use data::source::{HelpMapSource, EMBEDDED_HELP_MAP};
pub use error::{Error, MalformedReason, Result};
pub use resolver::{Duplicate, Resolver};
