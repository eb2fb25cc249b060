//! Trees built from filesystem paths.

use rooted_tree::{ChildWrap, Config, from_paths};

#[test]
fn test_path_tree_report() {
    let tree = from_paths(["/a/b", "/a/c"]);
    assert_eq!(
        tree.report(&Config::default()).unwrap(),
        "\n /\n └── / ↜ /a\n     ├── /a ↜ /a/b\n     └── /a ↜ /a/c\n"
    );
}

#[test]
fn test_path_tree_wraps_long_directories() {
    let paths: Vec<String> = (0..10).map(|n| format!("/logs/day{n}")).collect();
    let tree = from_paths(&paths);
    assert_eq!(tree.len(), 12);

    let config = Config::default()
        .with_max_children(3)
        .with_child_wrap(ChildWrap::Top);
    let report = tree.report(&config).unwrap();
    assert!(report.contains("/logs ↜ /logs/day9"));
    assert!(report.contains("/logs ↜ /logs/day7"));
    assert!(!report.contains("/logs ↜ /logs/day6"));
    assert!(report.contains(" ╎"));
}

#[test]
fn test_path_tree_focus() {
    let tree = from_paths(["/srv/www/site/assets", "/srv/db", "/etc"]);
    let config = Config::default().with_select_node("/srv/www".to_string(), 1);
    let report = tree.report(&config).unwrap();
    assert!(report.starts_with("\n ╎  \n / ↜ /srv"));
    assert!(report.contains("/srv/www ↜ /srv/www/site"));
    assert!(!report.contains("/etc"));
}

#[test]
fn test_path_tree_diff() {
    let before = from_paths(["/a/b", "/a/c"]);
    let after = from_paths(["/a/b", "/x"]);

    let diff = before.diff(&after);
    assert_eq!(diff.removed, vec!["/a/c".to_string()]);
    assert_eq!(diff.added, vec!["/x".to_string()]);
    assert!(diff.moved.is_empty());
}
