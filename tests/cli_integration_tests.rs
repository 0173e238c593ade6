mod utils;

use clap::Parser;
use os_config_applier::cli::{run, Args};
use os_config_applier::error::Error;
use os_config_applier::logger::MemoryLogger;
use std::fs;
use test_log::test;
use utils::Workspace;

fn args_for(ws: &Workspace, extra: &[&str]) -> Args {
    let mut argv = vec![
        "os-config-applier".to_string(),
        "--templates".to_string(),
        ws.templates.display().to_string(),
        "--output".to_string(),
        ws.output.display().to_string(),
        "--metadata".to_string(),
        ws.metadata.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

#[test]
fn run_writes_files_and_reports_success() {
    let ws = Workspace::new(r#"{"hostname": "web-01"}"#);
    ws.template("etc/hostname", "{{ hostname }}\n");
    let logger = MemoryLogger::new();

    run(args_for(&ws, &[]), &logger).unwrap();

    assert_eq!(fs::read_to_string(ws.output.join("etc/hostname")).unwrap(), "web-01\n");
    assert_eq!(logger.lines().last().map(String::as_str), Some("[INFO] success"));
}

#[test]
fn run_in_validate_mode_only_reports_success() {
    let ws = Workspace::new(r#"{"hostname": "web-01"}"#);
    ws.template("etc/hostname", "{{ hostname }}\n");
    let logger = MemoryLogger::new();

    run(args_for(&ws, &["--validate"]), &logger).unwrap();

    assert!(ws.output_files().is_empty());
    assert_eq!(logger.lines(), vec!["[INFO] success".to_string()]);
}

#[test]
fn validate_mode_leaves_output_root_unmodified() {
    let ws = Workspace::new(r#"{"hostname": "web-01"}"#);
    ws.template("etc/hostname", "{{ hostname }}\n");
    let modified = fs::metadata(&ws.output).unwrap().modified().unwrap();

    run(args_for(&ws, &["--validate"]), &MemoryLogger::new()).unwrap();

    assert_eq!(fs::read_dir(&ws.output).unwrap().count(), 0);
    assert_eq!(fs::metadata(&ws.output).unwrap().modified().unwrap(), modified);
}

#[test]
fn unwritable_output_root_is_rejected_before_rendering() {
    let ws = Workspace::new("{}");
    ws.template("etc/motd", "hi\n");
    let mut args = args_for(&ws, &[]);
    args.output = ws.dir.path().join("does-not-exist");

    let err = run(args, &MemoryLogger::new()).unwrap_err();
    assert!(matches!(err, Error::OutputNotWritable { .. }));
}

#[test]
fn invalid_metadata_is_reported_with_path() {
    let ws = Workspace::new("{ broken");
    ws.template("etc/motd", "hi\n");

    let logger = MemoryLogger::new();

    let err = run(args_for(&ws, &[]), &logger).unwrap_err();
    let message = format!("invalid metadata file: {}", ws.metadata.display());
    assert_eq!(err.to_string(), message);
    assert_eq!(logger.lines(), vec![format!("[ERROR] {message}")]);
}
