use assert_fs::TempDir;
use labelmv::config::{validate_and_normalize, Config};
use labelmv::LabelMvError;
use std::fs;
use std::path::PathBuf;

fn with_input(mut cfg: Config) -> Config {
    cfg.input_files = vec![PathBuf::from("manifest.csv")];
    cfg
}

#[test]
fn prefixes_are_canonicalized() {
    let td = TempDir::new().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    let inbox = root.join("in");
    fs::create_dir_all(inbox.join("sub")).unwrap();

    let mut cfg = with_input(Config::new(inbox.join("sub/.."), &root, &root));
    validate_and_normalize(&mut cfg).expect("valid prefixes");
    assert_eq!(cfg.source_prefix, inbox);
    assert_eq!(cfg.dest_prefix, root);
}

#[test]
fn missing_prefix_is_rejected() {
    let td = TempDir::new().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    let mut cfg = with_input(Config::new(&root, root.join("missing"), &root));
    let err = validate_and_normalize(&mut cfg).unwrap_err();
    match err.downcast_ref::<LabelMvError>() {
        Some(LabelMvError::PrefixInvalid { name, .. }) => assert_eq!(*name, "dest_prefix"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn file_prefix_is_rejected() {
    let td = TempDir::new().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    let file = root.join("plain.txt");
    fs::write(&file, "x").unwrap();
    let mut cfg = with_input(Config::new(&root, &root, &file));
    let err = validate_and_normalize(&mut cfg).unwrap_err();
    assert!(format!("{err}").contains("not a directory"));
}

#[test]
fn empty_input_list_is_rejected() {
    let mut cfg = Config::default();
    let err = validate_and_normalize(&mut cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LabelMvError>(),
        Some(LabelMvError::NoInputFiles)
    ));
}

#[test]
fn default_root_prefixes_validate() {
    let mut cfg = with_input(Config::default());
    validate_and_normalize(&mut cfg).expect("root is always a directory");
}
