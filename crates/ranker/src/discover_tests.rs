use super::*;

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), "x").unwrap();
}

#[test]
fn discovery_skips_hidden_and_internal_files() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.txt");
    touch(dir.path(), ".hidden");
    touch(dir.path(), STORE_FILE);
    touch(dir.path(), CONFIG_FILE);
    std::fs::create_dir(dir.path().join("subdir")).unwrap();

    let pattern = Regex::new(".*").unwrap();
    let files = discover_files(dir.path(), &pattern).unwrap();
    assert_eq!(files, vec!["a.txt".to_string()]);
}

#[test]
fn discovery_applies_the_pattern() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "keep.rs");
    touch(dir.path(), "skip.md");

    let pattern = Regex::new(r".*\.rs$").unwrap();
    let files = discover_files(dir.path(), &pattern).unwrap();
    assert_eq!(files, vec!["keep.rs".to_string()]);
}

#[test]
fn extension_lists_compile_to_anchored_patterns() {
    assert_eq!(extensions_to_pattern("py"), r".*\.py$");
    assert_eq!(extensions_to_pattern("py,rs"), r".*\.(py|rs)$");
    assert_eq!(extensions_to_pattern(".py, .rs"), r".*\.(py|rs)$");
    assert_eq!(extensions_to_pattern(""), ".*");
    assert_eq!(extensions_to_pattern(" , "), ".*");
}

#[test]
fn extension_patterns_match_as_expected() {
    let pattern = Regex::new(&extensions_to_pattern("py,rs")).unwrap();
    assert!(pattern.is_match("main.rs"));
    assert!(pattern.is_match("tool.py"));
    assert!(!pattern.is_match("notes.md"));
    assert!(!pattern.is_match("rs"));
}

#[test]
fn wildcard_renames_substitute_the_matched_middle() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "hello_world.txt");
    touch(dir.path(), "hello_there.txt");
    touch(dir.path(), "other.txt");

    let renames = wildcard_renames("hello_*", "hey_*", dir.path()).unwrap();
    assert_eq!(
        renames,
        vec![
            ("hello_there.txt".to_string(), "hey_there.txt".to_string()),
            ("hello_world.txt".to_string(), "hey_world.txt".to_string()),
        ]
    );
}

#[test]
fn wildcard_renames_validate_their_patterns() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.txt");

    assert!(wildcard_renames("no_wildcard", "x_*", dir.path()).is_err());
    assert!(wildcard_renames("a*b*", "x_*", dir.path()).is_err());
    assert!(wildcard_renames("a_*", "plain", dir.path()).is_err());
    assert!(wildcard_renames("zzz_*", "x_*", dir.path()).is_err());
}

#[test]
fn trash_moves_the_file_aside() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "doomed.txt");

    trash_file(dir.path(), "doomed.txt").unwrap();
    assert!(!dir.path().join("doomed.txt").exists());

    let trashed: Vec<_> = std::fs::read_dir(dir.path().join(".trash"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(trashed.len(), 1);
    assert!(trashed[0].starts_with("doomed_"));
    assert!(trashed[0].ends_with(".txt"));

    assert!(trash_file(dir.path(), "doomed.txt").is_err());
}
