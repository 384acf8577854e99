use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::data::entry::HelpEntry;
use crate::data::source::parse_records;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub record_count: usize,
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

/// True for `GUID-<uuid>.html`, the file naming the webhelp generator uses.
pub fn is_guid_topic_path(path: &str) -> bool {
    path.strip_prefix("GUID-")
        .and_then(|rest| rest.strip_suffix(".html"))
        .is_some_and(|guid| guid.len() == 36 && Uuid::parse_str(guid).is_ok())
}

/// Check a help-map source and collect every issue instead of stopping at the first.
/// Only an unreadable or unparseable source is an `Err`; record problems go in the report.
pub fn validate_help_map(text: &str) -> Result<ValidationReport> {
    let records = parse_records(text)?;
    let mut report = ValidationReport {
        record_count: records.len(),
        ..ValidationReport::default()
    };

    // (appname, appid) -> (first index, path)
    let mut seen: HashMap<(String, String), (usize, String)> = HashMap::new();
    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let context = format!("record[{index}]");
        let entry = match HelpEntry::from_record(index, record) {
            Ok(entry) => entry,
            Err(Error::MalformedData { reason, .. }) => {
                report.push(ValidationSeverity::Error, context, reason.to_string());
                continue;
            }
            Err(err) => return Err(err),
        };

        let key = (entry.application_name.clone(), entry.identifier.clone());
        match seen.get(&key) {
            Some((first, path)) if *path != entry.resource_path => report.push(
                ValidationSeverity::Warning,
                context.clone(),
                format!(
                    "duplicate appid '{}' (first at record[{first}]) maps to '{}', overriding '{path}'",
                    entry.identifier, entry.resource_path
                ),
            ),
            Some((first, _)) => report.push(
                ValidationSeverity::Info,
                context.clone(),
                format!(
                    "duplicate appid '{}' repeats record[{first}]",
                    entry.identifier
                ),
            ),
            None => {
                seen.insert(key, (index, entry.resource_path.clone()));
            }
        }

        if !is_guid_topic_path(&entry.resource_path) {
            report.push(
                ValidationSeverity::Info,
                context,
                format!("path '{}' is not a GUID topic file", entry.resource_path),
            );
        }
        entries.push((index, entry));
    }

    for (index, entry) in &entries {
        let stripped = entry
            .identifier
            .trim_end_matches(|c: char| c.is_ascii_punctuation() && c != '_');
        if stripped.is_empty() || stripped == entry.identifier {
            continue;
        }
        let key = (entry.application_name.clone(), stripped.to_string());
        if let Some((base_index, _)) = seen.get(&key) {
            report.push(
                ValidationSeverity::Info,
                format!("record[{index}]"),
                format!(
                    "appid '{}' is a punctuation variant of '{stripped}' (record[{base_index}])",
                    entry.identifier
                ),
            );
        }
    }

    Ok(report)
}
