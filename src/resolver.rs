//! Read-only index from help identifiers to topic paths.
//! Load once at startup, then share by reference (or `Arc`) with every caller that needs F1 help.

use std::collections::{BTreeSet, HashMap};

use crate::data::entry::HelpEntry;
use crate::data::source::{parse_help_map, HelpMapSource};
use crate::error::Result;

/// An identifier seen more than once during load. The later record wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub application_name: String,
    pub identifier: String,
    pub overridden_path: String,
    pub retained_path: String,
    /// Position of the winning record in the source.
    pub index: usize,
}

#[derive(Debug, Default)]
pub struct Resolver {
    /// appname -> appid -> path
    by_app: HashMap<String, HashMap<String, String>>,
    duplicates: Vec<Duplicate>,
}

impl Resolver {
    /// Read and index a help map. Fails on the first malformed record; nothing is indexed then.
    pub fn load(source: &HelpMapSource) -> Result<Resolver> {
        let text = source.read_text()?;
        let entries = parse_help_map(&text)?;
        let resolver = Self::from_entries(entries)?;
        tracing::debug!(
            source = %source,
            entries = resolver.count(),
            duplicates = resolver.duplicates.len(),
            "help map loaded"
        );
        Ok(resolver)
    }

    /// Index entries in order, last write wins for repeated identifiers.
    pub fn from_entries(entries: impl IntoIterator<Item = HelpEntry>) -> Result<Resolver> {
        let entries: Vec<HelpEntry> = entries.into_iter().collect();
        for (index, entry) in entries.iter().enumerate() {
            entry.check(index)?;
        }

        let mut resolver = Resolver::default();
        for (index, entry) in entries.into_iter().enumerate() {
            resolver.insert(index, entry);
        }
        Ok(resolver)
    }

    fn insert(&mut self, index: usize, entry: HelpEntry) {
        let HelpEntry {
            application_name,
            identifier,
            resource_path,
        } = entry;
        let scope = self.by_app.entry(application_name.clone()).or_default();
        let Some(previous) = scope.insert(identifier.clone(), resource_path.clone()) else {
            return;
        };

        if previous == resource_path {
            tracing::debug!(
                appname = %application_name,
                appid = %identifier,
                index,
                "duplicate help entry repeats the same path"
            );
        } else {
            tracing::warn!(
                appname = %application_name,
                appid = %identifier,
                index,
                overridden = %previous,
                retained = %resource_path,
                "duplicate help entry; keeping the later path"
            );
        }
        self.duplicates.push(Duplicate {
            application_name,
            identifier,
            overridden_path: previous,
            retained_path: resource_path,
            index,
        });
    }

    /// Topic path for `identifier` in the default (empty) application scope.
    /// `None` means no help is available; exact, case-sensitive match only.
    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        self.resolve_in(identifier, "")
    }

    /// Topic path for `identifier` within `application_name`.
    pub fn resolve_in(&self, identifier: &str, application_name: &str) -> Option<&str> {
        self.by_app
            .get(application_name)?
            .get(identifier)
            .map(String::as_str)
    }

    /// Number of distinct (appname, appid) keys.
    pub fn count(&self) -> usize {
        self.by_app.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    /// Application names present, sorted.
    pub fn applications(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_app.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every identifier in `application_name` that resolves to `resource_path`, sorted.
    pub fn identifiers_for(&self, resource_path: &str, application_name: &str) -> Vec<&str> {
        let Some(scope) = self.by_app.get(application_name) else {
            return Vec::new();
        };
        scope
            .iter()
            .filter(|(_, path)| path.as_str() == resource_path)
            .map(|(identifier, _)| identifier.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All indexed entries ordered by appname then appid.
    pub fn entries(&self) -> Vec<HelpEntry> {
        let mut entries: Vec<HelpEntry> = self
            .by_app
            .iter()
            .flat_map(|(app, scope)| {
                scope
                    .iter()
                    .map(move |(identifier, path)| HelpEntry::new(app.as_str(), identifier.as_str(), path.as_str()))
            })
            .collect();
        entries.sort_by(|a, b| {
            (&a.application_name, &a.identifier).cmp(&(&b.application_name, &b.identifier))
        });
        entries
    }
}
