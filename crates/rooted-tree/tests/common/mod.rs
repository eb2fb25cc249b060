//! Common fixtures for rooted-tree integration tests.

use rooted_tree::{Node, RootedTree};

/// A caller-defined node: a task with named subtasks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub name: String,
    pub done: bool,
    parent: Option<String>,
    subtasks: Vec<String>,
}

impl Task {
    /// Creates an open task with no links.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            done: false,
            parent: None,
            subtasks: Vec::new(),
        }
    }
}

impl Node<String> for Task {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn parent_id(&self) -> Option<String> {
        self.parent.clone()
    }

    fn child_ids_vec(&self) -> Vec<String> {
        self.subtasks.clone()
    }

    fn set_parent_id(&mut self, parent: String) {
        self.parent = Some(parent);
    }

    fn add_child_id(&mut self, child_id: String) {
        if !self.subtasks.contains(&child_id) {
            self.subtasks.push(child_id);
        }
    }

    fn remove_child_id(&mut self, child_id: &String) {
        self.subtasks.retain(|id| id != child_id);
    }
}

/// `release → {build → {compile, link}, publish}`
pub fn release_plan() -> RootedTree<String, Task> {
    let mut plan = RootedTree::new();
    plan.add_node(None, Task::new("release")).unwrap();
    plan.add_node(Some("release".to_string()), Task::new("build"))
        .unwrap();
    plan.add_node(Some("build".to_string()), Task::new("compile"))
        .unwrap();
    plan.add_node(Some("build".to_string()), Task::new("link"))
        .unwrap();
    plan.add_node(Some("release".to_string()), Task::new("publish"))
        .unwrap();
    plan
}

pub fn id(name: &str) -> String {
    name.to_string()
}
