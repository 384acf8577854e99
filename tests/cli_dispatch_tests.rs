use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_ctxhelp")
}

fn ctxhelp() -> Command {
    let mut command = Command::new(bin());
    command.env_remove("CTXHELP_MAP").env_remove("CTXHELP_LOG");
    command
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("ctxhelp-{name}-{stamp}.json"))
}

#[test]
fn missing_command_prints_usage() {
    let output = ctxhelp().output().expect("ctxhelp should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: ctxhelp"));
}

#[test]
fn resolve_command_prints_topic_path() {
    let output = ctxhelp()
        .args(["resolve", "WDRV_WINC_Open"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "GUID-DEDB8880-71DA-46D9-8223-C2C95F6D3B18.html");
}

#[test]
fn resolve_command_reports_missing_help() {
    let output = ctxhelp()
        .args(["resolve", "wdrv_winc_open"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no help available for 'wdrv_winc_open'"));
}

#[test]
fn resolve_command_returns_usage_without_identifier() {
    let output = ctxhelp().arg("resolve").output().expect("resolve should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: ctxhelp resolve"));
}

#[test]
fn aliases_command_lists_identifiers_sharing_a_page() {
    let output = ctxhelp()
        .args(["aliases", "WDRV_WINC_ASSOC_HANDLE"])
        .output()
        .expect("aliases should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["WDRV_WINC_ASSOC_HANDLE", "WDRV_WINC_ASSOC_HANDLE;"]);
}

#[test]
fn stats_command_reports_count_and_duplicates() {
    let output = ctxhelp().arg("stats").output().expect("stats should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats should emit json");
    assert_eq!(payload["source"], "embedded");
    assert_eq!(payload["entries"], 185);
    assert_eq!(payload["duplicates"][0]["appid"], "WDRV_PIC32MZW_SEC_MASK");
    assert!(payload["duplicates"][0]["record"].as_u64().is_some());
}

#[test]
fn duplicate_identifiers_are_logged_on_load() {
    let output = ctxhelp().arg("stats").output().expect("stats should run");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate help entry; keeping the later path"));
    assert!(stderr.contains("WDRV_PIC32MZW_SEC_MASK"));
    assert!(!stderr.contains('\u{1b}'), "piped stderr should carry no ANSI escapes");
}

#[test]
fn log_filter_from_environment_silences_duplicate_warnings() {
    let output = ctxhelp()
        .env("CTXHELP_LOG", "error")
        .arg("stats")
        .output()
        .expect("stats should run");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("duplicate help entry"));
    assert!(!stderr.contains("WDRV_PIC32MZW_SEC_MASK"));
}

#[test]
fn list_command_reads_map_from_environment() {
    let path = unique_temp_path("list");
    fs::write(
        &path,
        r#"[{"appname":"","appid":"B","path":"b.html"},{"appname":"","appid":"A","path":"a.html"}]"#,
    )
    .expect("fixture should be written");

    let output = ctxhelp()
        .env("CTXHELP_MAP", &path)
        .arg("list")
        .output()
        .expect("list should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("list should emit json");
    assert_eq!(payload.as_array().map(Vec::len), Some(2));
    assert_eq!(payload[0]["appid"], "A");
    assert_eq!(payload[0]["path"], "a.html");
    assert_eq!(payload[0]["appname"], "");

    let _ = fs::remove_file(path);
}

#[test]
fn malformed_map_fails_to_load() {
    let path = unique_temp_path("malformed");
    fs::write(&path, r#"[{"appname":"","appid":"A","path":""}]"#).expect("fixture should be written");

    let output = ctxhelp()
        .env("CTXHELP_MAP", &path)
        .args(["resolve", "A"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load failed: malformed help entry at record 0"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_passes_embedded_map() {
    let output = ctxhelp().arg("validate").output().expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed: embedded (186 records"));
    assert!(stdout.contains("WDRV_PIC32MZW_SEC_MASK"));
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let path = unique_temp_path("invalid");
    fs::write(&path, r#"[{"appid":""},{"appid":"B","path":"b.html"}]"#)
        .expect("fixture should be written");

    let output = ctxhelp()
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed: 1 error(s), 2 diagnostic(s)"));
    assert!(stderr.contains("record[0]"));

    let _ = fs::remove_file(path);
}
