use labelmv::cli::Args;
use labelmv::config::types::{AuthMode, Config, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn short_flags_match_long_ones() {
    let args = Args::parse_from([
        "labelmv", "-v", "-n", "-s", "/in", "-d", "/out", "-b", "/bkp", "m.csv",
    ]);
    assert!(args.debug);
    assert!(args.dry_run);
    assert_eq!(args.source_prefix, Some(PathBuf::from("/in")));
    assert_eq!(args.dest_prefix, Some(PathBuf::from("/out")));
    assert_eq!(args.backup_prefix, Some(PathBuf::from("/bkp")));
    assert_eq!(args.input_files, vec![PathBuf::from("m.csv")]);
}

#[test]
fn input_files_keep_their_order() {
    let args = Args::parse_from(["labelmv", "b.csv", "a.csv", "c.csv"]);
    assert_eq!(
        args.input_files,
        vec![
            PathBuf::from("b.csv"),
            PathBuf::from("a.csv"),
            PathBuf::from("c.csv")
        ]
    );
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["labelmv", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["labelmv", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["labelmv", "m.csv"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "labelmv",
        "--source-prefix",
        "/in",
        "--dest-prefix",
        "/out",
        "--backup-prefix",
        "/bkp",
        "--log-level",
        "info",
        "--dry-run",
        "--substring-match",
        "--include-hidden",
        "--strict",
        "--log-file",
        "/tmp/labelmv.log",
        "m1.csv",
        "m2.csv",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source_prefix, PathBuf::from("/in"));
    assert_eq!(cfg.dest_prefix, PathBuf::from("/out"));
    assert_eq!(cfg.backup_prefix, PathBuf::from("/bkp"));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/labelmv.log")));
    assert_eq!(cfg.auth_mode, AuthMode::Substring);
    assert!(cfg.dry_run);
    assert!(cfg.include_hidden);
    assert!(cfg.strict);
    assert_eq!(cfg.input_files.len(), 2);
}

#[test]
fn unset_flags_keep_config_values() {
    let args = Args::parse_from(["labelmv", "m.csv"]);
    let mut cfg = Config::new("/in", "/out", "/bkp");
    cfg.strict = true;
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source_prefix, PathBuf::from("/in"));
    assert_eq!(cfg.auth_mode, AuthMode::Ancestor);
    assert!(cfg.strict);
    assert!(!cfg.dry_run);
}
