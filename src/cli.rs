use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::data::source::HelpMapSource;
use crate::data::validate::{validate_help_map, ValidationSeverity};
use crate::resolver::Resolver;

const USAGE: &str = "usage: ctxhelp <resolve|aliases|list|stats|validate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Resolve,
    Aliases,
    List,
    Stats,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("resolve") => Some(Command::Resolve),
        Some("aliases") => Some(Command::Aliases),
        Some("list") => Some(Command::List),
        Some("stats") => Some(Command::Stats),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let config = Config::from_env();
    match parse_command(args) {
        Some(Command::Resolve) => handle_resolve(&config, args),
        Some(Command::Aliases) => handle_aliases(&config, args),
        Some(Command::List) => handle_list(&config),
        Some(Command::Stats) => handle_stats(&config),
        Some(Command::Validate) => handle_validate(&config, args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn load(config: &Config) -> Option<Resolver> {
    match Resolver::load(&config.source()) {
        Ok(resolver) => Some(resolver),
        Err(err) => {
            eprintln!("load failed: {err}");
            None
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            eprintln!("serialization failed: {err}");
            1
        }
    }
}

fn handle_resolve(config: &Config, args: &[String]) -> i32 {
    let Some(identifier) = args.get(2) else {
        eprintln!("usage: ctxhelp resolve <identifier> [appname]");
        return 2;
    };
    let appname = args.get(3).map(String::as_str).unwrap_or("");
    let Some(resolver) = load(config) else {
        return 1;
    };

    match resolver.resolve_in(identifier, appname) {
        Some(path) => {
            println!("{path}");
            0
        }
        None => {
            eprintln!("no help available for '{identifier}'");
            1
        }
    }
}

fn handle_aliases(config: &Config, args: &[String]) -> i32 {
    let Some(identifier) = args.get(2) else {
        eprintln!("usage: ctxhelp aliases <identifier> [appname]");
        return 2;
    };
    let appname = args.get(3).map(String::as_str).unwrap_or("");
    let Some(resolver) = load(config) else {
        return 1;
    };

    let Some(path) = resolver.resolve_in(identifier, appname) else {
        eprintln!("no help available for '{identifier}'");
        return 1;
    };
    for alias in resolver.identifiers_for(path, appname) {
        println!("{alias}");
    }
    0
}

fn handle_list(config: &Config) -> i32 {
    let Some(resolver) = load(config) else {
        return 1;
    };
    print_json(&resolver.entries())
}

#[derive(Debug, Serialize)]
struct DuplicateSummary<'a> {
    appname: &'a str,
    appid: &'a str,
    overridden: &'a str,
    retained: &'a str,
    record: usize,
}

#[derive(Debug, Serialize)]
struct StatsSummary<'a> {
    source: String,
    entries: usize,
    applications: Vec<&'a str>,
    duplicates: Vec<DuplicateSummary<'a>>,
}

fn handle_stats(config: &Config) -> i32 {
    let source = config.source();
    let Some(resolver) = load(config) else {
        return 1;
    };
    let summary = StatsSummary {
        source: source.to_string(),
        entries: resolver.count(),
        applications: resolver.applications(),
        duplicates: resolver
            .duplicates()
            .iter()
            .map(|dup| DuplicateSummary {
                appname: &dup.application_name,
                appid: &dup.identifier,
                overridden: &dup.overridden_path,
                retained: &dup.retained_path,
                record: dup.index,
            })
            .collect(),
    };
    print_json(&summary)
}

fn handle_validate(config: &Config, args: &[String]) -> i32 {
    let source = match args.get(2) {
        Some(path) => HelpMapSource::file(Path::new(path)),
        None => config.source(),
    };
    let text = match source.read_text() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("validation failed: {source}: {err}");
            return 1;
        }
    };

    match validate_help_map(&text) {
        Ok(report) if !report.has_errors() => {
            println!(
                "validation passed: {source} ({} records, {} notes)",
                report.record_count,
                report.diagnostics.len()
            );
            for diag in &report.diagnostics {
                println!("- {diag}");
            }
            0
        }
        Ok(report) => {
            eprintln!(
                "validation failed: {} error(s), {} diagnostic(s)",
                report.count(ValidationSeverity::Error),
                report.diagnostics.len()
            );
            for diag in &report.diagnostics {
                eprintln!("- {diag}");
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed: {source}: {err}");
            1
        }
    }
}
