//! Trees of a caller-defined node type.

use crate::common::{Task, id, release_plan};
use rooted_tree::{Config, Error, Node, RootedTree};

#[test]
fn test_report_caller_nodes() {
    let plan = release_plan();
    assert_eq!(
        plan.report(&Config::default()).unwrap(),
        concat!(
            "\n release",
            "\n ├── release ↜ build",
            "\n │   ├──────── build ↜ compile",
            "\n │   └──────── build ↜ link",
            "\n └── release ↜ publish\n",
        )
    );
}

#[test]
fn test_queries() {
    let plan = release_plan();
    assert_eq!(plan.len(), 5);
    assert_eq!(plan.root_id(), Some(id("release")));
    assert_eq!(plan.list_parent_ids(&id("link")), vec![id("build"), id("release")]);
    assert_eq!(
        plan.list_child_ids(&id("release")),
        vec![id("build"), id("compile"), id("link"), id("publish")]
    );
    assert_eq!(
        plan.list_child_ids_with_lvl(&id("release"), Some(1)),
        vec![id("build"), id("publish")]
    );
}

#[test]
fn test_mutate_payload() {
    let mut plan = release_plan();
    plan.get_mut_node(&id("compile")).unwrap().done = true;
    assert!(plan.get_node(&id("compile")).unwrap().done);
    assert!(!plan.get_node(&id("link")).unwrap().done);
}

#[test]
fn test_rejects_invalid_adds() {
    let mut plan = release_plan();
    assert_eq!(
        plan.add_node(None, Task::new("other")),
        Err(Error::RootNodeAlreadyExists)
    );
    assert_eq!(
        plan.add_node(Some(id("missing")), Task::new("orphan")),
        Err(Error::ParentNodeDoesNotExist)
    );
    assert_eq!(
        plan.add_node(Some(id("publish")), Task::new("link")),
        Err(Error::NodeAlreadyExists)
    );
    assert_eq!(plan.len(), 5);
}

#[test]
fn test_take_diff_graft() {
    let original = release_plan();
    let mut plan = original.clone();

    let build = plan.take_subtree(&id("build")).unwrap();
    assert_eq!(build.len(), 3);
    assert!(build.is_subtree());
    assert_eq!(
        plan.report(&Config::default()).unwrap(),
        "\n release\n ├╌╌╌╌╌╌ build\n └── release ↜ publish\n"
    );

    let diff = original.diff(&plan);
    assert_eq!(diff.removed, vec![id("build"), id("compile"), id("link")]);
    assert!(diff.added.is_empty());

    plan.graft_subtree(build).unwrap();
    assert!(plan == original);
}

#[test]
fn test_graft_rejects_unrelated_subtree() {
    let mut plan = release_plan();
    let mut stray = RootedTree::new();
    stray.add_node(None, Task::new("stray")).unwrap();
    assert_eq!(plan.graft_subtree(stray), Err(Error::ChildNodeHasNoParent));
}

#[test]
fn test_remove_branch() {
    let mut plan = release_plan();
    let removed = plan.remove_node(&id("build")).unwrap();
    assert_eq!(removed.name, "build");
    assert_eq!(plan.len(), 2);
    assert!(!plan.contains(&id("compile")));
    assert_eq!(
        plan.get_node(&id("release")).unwrap().child_ids_vec(),
        vec![id("publish")]
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let plan = release_plan();
    let json = serde_json::to_string_pretty(&plan.to_nodes()).unwrap();
    let tasks: Vec<Task> = serde_json::from_str(&json).unwrap();
    let rebuilt = RootedTree::try_from(tasks).unwrap();
    assert!(rebuilt == plan);
    assert_eq!(rebuilt.to_string(), plan.to_string());
}

#[test]
fn test_focus_on_nested_task() {
    let plan = release_plan();
    let config = Config::default()
        .with_max_children(1)
        .with_select_node(id("link"), 1);
    let report = plan.report(&config).unwrap();
    assert!(report.starts_with("\n ╎  \n release ↜ build"));
    assert!(report.contains("build ↜ link"));
    assert!(!report.contains("build ↜ compile"));
}
