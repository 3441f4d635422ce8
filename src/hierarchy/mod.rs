//! Parent → children index over declared entities.
//!
//! Used by hierarchy expansion to find every transitive descendant of a
//! verb endpoint.

use hashbrown::{HashMap, HashSet};

use crate::label::LabelMap;

/// Children per parent label, in declaration order.
#[derive(Debug, Default)]
pub struct ChildMap {
    children: HashMap<String, Vec<String>>,
}

impl ChildMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `child_id` as a child of the entity labelled `parent_label`.
    pub fn add_child(&mut self, parent_label: &str, child_id: &str) {
        self.children
            .entry_ref(parent_label)
            .or_default()
            .push(child_id.to_owned());
    }

    /// Direct children (full ids) of `parent_label`.
    pub fn children(&self, parent_label: &str) -> &[String] {
        self.children.get(parent_label).map_or(&[], Vec::as_slice)
    }

    pub fn has_children(&self, parent_label: &str) -> bool {
        self.children.contains_key(parent_label)
    }

    /// Labels of every transitive descendant of `root_label`.
    ///
    /// Depth-first pre-order: each child is followed by its own subtree
    /// before the next sibling. Every label is yielded at most once and the
    /// root never is, so cyclic parent declarations terminate.
    pub fn descendants(&self, root_label: &str, labels: &mut LabelMap) -> Vec<String> {
        let mut out = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(root_label.to_owned());

        let mut stack: Vec<&str> = self
            .children(root_label)
            .iter()
            .rev()
            .map(String::as_str)
            .collect();

        while let Some(child_id) = stack.pop() {
            let label = labels.label_for(child_id).to_owned();
            if !visited.insert(label.clone()) {
                continue;
            }
            stack.extend(self.children(&label).iter().rev().map(String::as_str));
            out.push(label);
        }
        out
    }
}
