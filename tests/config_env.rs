use assert_cmd::prelude::*;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

use labelmv::{default_config_path, load_config_from_xml, LogLevel};

#[test]
#[serial]
fn env_var_points_at_config_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    fs::write(
        &cfg,
        "<config><source_prefix>/srv/in</source_prefix><log_level>quiet</log_level></config>",
    )
    .unwrap();

    // Serialized: the variable is process-wide.
    unsafe {
        std::env::set_var("LABELMV_CONFIG", &cfg);
    }
    let path = default_config_path();
    let loaded = load_config_from_xml();
    unsafe {
        std::env::remove_var("LABELMV_CONFIG");
    }

    assert_eq!(path, Some(cfg));
    let fc = loaded.unwrap().expect("config file present");
    assert_eq!(fc.source_prefix, Some(PathBuf::from("/srv/in")));
    assert_eq!(fc.log_level, Some(LogLevel::Quiet));
}

#[test]
#[serial]
fn missing_config_file_is_not_an_error() {
    let td = tempdir().unwrap();
    unsafe {
        std::env::set_var("LABELMV_CONFIG", td.path().join("absent.xml"));
    }
    let loaded = load_config_from_xml();
    unsafe {
        std::env::remove_var("LABELMV_CONFIG");
    }
    assert!(loaded.unwrap().is_none());
}

#[test]
fn unknown_config_element_is_fatal() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config><surprise>1</surprise></config>").unwrap();
    let manifest = td.path().join("m.csv");
    fs::write(&manifest, "").unwrap();

    Command::cargo_bin("labelmv")
        .unwrap()
        .env("LABELMV_CONFIG", &cfg)
        .arg(&manifest)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error initializing..."))
        .stdout(predicate::str::contains("Cannot parse config file"));
}

#[test]
fn config_file_prefix_applies_and_cli_overrides_it() {
    let td = tempdir().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    for d in ["src", "dst", "bkp", "elsewhere"] {
        fs::create_dir_all(root.join(d)).unwrap();
    }
    fs::write(root.join("src/a.txt"), "a").unwrap();
    let cfg = root.join("config.xml");
    fs::write(
        &cfg,
        format!(
            "<config><source_prefix>{}</source_prefix></config>",
            root.join("elsewhere").display()
        ),
    )
    .unwrap();
    let manifest = root.join("m.csv");
    fs::write(
        &manifest,
        format!(
            "{},{},{}\n",
            root.join("src").display(),
            root.join("dst").display(),
            root.join("bkp").display()
        ),
    )
    .unwrap();

    // The file's prefix forbids the source.
    Command::cargo_bin("labelmv")
        .unwrap()
        .env("LABELMV_CONFIG", &cfg)
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Source path forbidden"));
    assert!(root.join("src/a.txt").exists());

    // -s wins over the file.
    Command::cargo_bin("labelmv")
        .unwrap()
        .env("LABELMV_CONFIG", &cfg)
        .arg("-s")
        .arg(&root)
        .arg(&manifest)
        .assert()
        .success();
    assert!(root.join("dst/a.txt").exists());
    assert!(!root.join("src/a.txt").exists());
}
