use labelmv::fs_ops::{copy_into_dir, remove_source_file, safe_copy_and_rename, TEMP_PREFIX};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

/// Create a file with the given content and fsync it (to avoid flakiness in tests).
fn create_file_with_content(path: &std::path::Path, content: &str) {
    let mut f = fs::File::create(path).expect("create source file");
    f.write_all(content.as_bytes()).expect("write source content");
    f.sync_all().expect("sync source file");
}

fn assert_no_temp_files(dir: &std::path::Path) {
    for entry in fs::read_dir(dir).expect("list dir") {
        let name = entry.expect("dir entry").file_name();
        let name_s = name.to_string_lossy();
        assert!(!name_s.starts_with(TEMP_PREFIX), "tmp file left behind: {name_s}");
    }
}

#[test]
fn safe_copy_and_rename_creates_destination_and_cleans_tmp() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    create_file_with_content(&src, "hello world");

    let dest_dir = td.path().join("destdir");
    fs::create_dir_all(&dest_dir).expect("create dest dir");
    let dest = dest_dir.join("dest.txt");

    safe_copy_and_rename(&src, &dest).expect("safe_copy_and_rename");

    assert_eq!(fs::read_to_string(&dest).unwrap(), "hello world");
    assert!(src.exists(), "copy must leave the source in place");
    assert_no_temp_files(&dest_dir);
}

#[test]
fn copy_into_dir_overwrites_same_name() {
    let td = tempdir().unwrap();
    let src_dir = td.path().join("src");
    let dst_dir = td.path().join("dst");
    fs::create_dir_all(&src_dir).unwrap();
    fs::create_dir_all(&dst_dir).unwrap();

    let src = src_dir.join("label.pdf");
    create_file_with_content(&src, "new content");
    fs::write(dst_dir.join("label.pdf"), "old").unwrap();

    let dest = copy_into_dir(&src, &dst_dir).expect("copy_into_dir");
    assert_eq!(dest, dst_dir.join("label.pdf"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "new content");
    assert_no_temp_files(&dst_dir);
}

#[test]
fn copy_into_missing_dir_fails_without_leftovers() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    create_file_with_content(&src, "a");
    let err = copy_into_dir(&src, &td.path().join("gone")).unwrap_err();
    assert!(format!("{err:#}").contains("copy"));
    assert_no_temp_files(td.path());
}

#[test]
fn remove_source_file_reports_path() {
    let td = tempdir().unwrap();
    let f = td.path().join("x.txt");
    create_file_with_content(&f, "x");
    remove_source_file(&f).unwrap();
    assert!(!f.exists());

    let err = remove_source_file(&f).unwrap_err();
    assert!(format!("{err}").contains("remove source file"));
}
