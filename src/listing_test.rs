use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"x").unwrap();
}

fn enumeration_order_of_dirs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

// =============================================================
// list_subdirectories
// =============================================================

#[test]
fn lists_only_subdirectories() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("portfolio")).unwrap();
    fs::create_dir(tmp.path().join("icons")).unwrap();
    touch(tmp.path(), "logo.png");
    touch(tmp.path(), "notes.txt");

    let mut dirs = list_subdirectories(tmp.path());
    dirs.sort();
    assert_eq!(dirs, vec!["icons", "portfolio"]);
}

#[test]
fn preserves_filesystem_enumeration_order() {
    let tmp = TempDir::new().unwrap();
    for name in ["b", "a", "c"] {
        fs::create_dir(tmp.path().join(name)).unwrap();
    }
    touch(tmp.path(), "file.jpg");

    assert_eq!(list_subdirectories(tmp.path()), enumeration_order_of_dirs(tmp.path()));
}

#[test]
fn missing_directory_yields_empty_list() {
    let tmp = TempDir::new().unwrap();
    assert!(list_subdirectories(&tmp.path().join("nope")).is_empty());
}

#[test]
fn file_path_yields_empty_list() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "plain.txt");
    assert!(list_subdirectories(&tmp.path().join("plain.txt")).is_empty());
}

#[test]
fn does_not_recurse() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("outer/inner")).unwrap();
    assert_eq!(list_subdirectories(tmp.path()), vec!["outer"]);
}

// =============================================================
// find_year_dirs
// =============================================================

#[test]
fn year_dirs_are_numeric_and_sorted() {
    let tmp = TempDir::new().unwrap();
    for name in ["2020", "2014", "drafts", "20x1", "999"] {
        fs::create_dir(tmp.path().join(name)).unwrap();
    }
    touch(tmp.path(), "2015");

    let years: Vec<String> = find_year_dirs(tmp.path())
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(years, vec!["999", "2014", "2020"]);
}

#[test]
fn year_dirs_keep_digit_runs_longer_than_u64() {
    let tmp = TempDir::new().unwrap();
    for name in ["99999999999999999999", "2020", "0999"] {
        fs::create_dir(tmp.path().join(name)).unwrap();
    }

    let years: Vec<String> = find_year_dirs(tmp.path())
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(years, vec!["0999", "2020", "99999999999999999999"]);
}

#[test]
fn year_key_orders_numerically() {
    assert!(year_key("999") < year_key("2014"));
    assert!(year_key("0100") > year_key("99"));
    assert_eq!(year_key("007"), year_key("7"));
}

#[cfg(unix)]
#[test]
fn year_dirs_follow_symlinks() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("real2019");
    fs::create_dir(&real).unwrap();
    touch(&real, "a.jpg");
    let base = tmp.path().join("portfolio");
    fs::create_dir(&base).unwrap();
    symlink(&real, base.join("2019")).unwrap();
    fs::create_dir(base.join("2020")).unwrap();

    let years = find_year_dirs(&base);
    assert_eq!(years, vec![base.join("2019"), base.join("2020")]);
    assert_eq!(list_year_files(&years[0]), vec!["a.jpg"]);
}

#[test]
fn year_dirs_of_missing_base_is_empty() {
    let tmp = TempDir::new().unwrap();
    assert!(find_year_dirs(&tmp.path().join("portfolio")).is_empty());
}

// =============================================================
// list_year_files
// =============================================================

#[test]
fn year_files_filter_and_sort() {
    let tmp = TempDir::new().unwrap();
    for name in ["b.JPG", "a.png", ".hidden.jpg", "readme.md", "c.pdf", "noext"] {
        touch(tmp.path(), name);
    }
    fs::create_dir(tmp.path().join("nested.jpg")).unwrap();

    assert_eq!(list_year_files(tmp.path()), vec!["a.png", "b.JPG", "c.pdf"]);
}

#[cfg(unix)]
#[test]
fn year_files_follow_symlinks() {
    use std::os::unix::fs::symlink;

    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "a.jpg");
    let year = tmp.path().join("2020");
    fs::create_dir(&year).unwrap();
    touch(&year, "own.png");
    symlink(tmp.path().join("a.jpg"), year.join("linked.png")).unwrap();
    symlink(tmp.path().join("gone.jpg"), year.join("dangling.jpg")).unwrap();

    assert_eq!(list_year_files(&year), vec!["linked.png", "own.png"]);
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(has_portfolio_extension("photo.JpEg"));
    assert!(has_portfolio_extension("scan.svg"));
    assert!(!has_portfolio_extension("clip.mp4"));
    assert!(!has_portfolio_extension("jpg"));
}
