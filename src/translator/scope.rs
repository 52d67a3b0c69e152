//! Per-graph ID tables.

use crate::editor::EditorNode;
use std::collections::{HashMap, HashSet};

/// Node and pin IDs assigned while translating one graph, plus a lookup of
/// every editor node in that graph by guid.
pub(crate) struct GraphScope<'n> {
    nodes: HashMap<&'n str, &'n EditorNode>,
    relays: HashSet<&'n str>,
    node_ids: HashMap<&'n str, String>,
    pin_ids: HashMap<&'n str, HashMap<&'n str, String>>,
}

impl<'n> GraphScope<'n> {
    pub(crate) fn new(nodes: &'n [EditorNode]) -> Self {
        Self {
            nodes: nodes.iter().map(|node| (node.guid.as_str(), node)).collect(),
            relays: HashSet::new(),
            node_ids: HashMap::new(),
            pin_ids: HashMap::new(),
        }
    }

    pub(crate) fn editor_node(&self, guid: &str) -> Option<&'n EditorNode> {
        self.nodes.get(guid).copied()
    }

    pub(crate) fn mark_relay(&mut self, guid: &'n str) {
        self.relays.insert(guid);
    }

    pub(crate) fn is_relay(&self, guid: &str) -> bool {
        self.relays.contains(guid)
    }

    /// Assign the next `N<n>` to `guid`. Returns `None` if it already has one.
    pub(crate) fn assign_node_id(&mut self, guid: &'n str) -> Option<String> {
        if self.node_ids.contains_key(guid) {
            return None;
        }
        let id = format!("N{}", self.node_ids.len() + 1);
        self.node_ids.insert(guid, id.clone());
        Some(id)
    }

    pub(crate) fn node_id(&self, guid: &str) -> Option<&str> {
        self.node_ids.get(guid).map(String::as_str)
    }

    pub(crate) fn assign_pin_id(&mut self, guid: &'n str, pin: &'n str, id: String) {
        self.pin_ids.entry(guid).or_default().insert(pin, id);
    }

    pub(crate) fn pin_id(&self, guid: &str, pin: &str) -> Option<&str> {
        self.pin_ids.get(guid)?.get(pin).map(String::as_str)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.node_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_memoized() {
        let nodes = vec![
            EditorNode::new("a", "K2Node_Event"),
            EditorNode::new("b", "K2Node_CallFunction"),
        ];
        let mut scope = GraphScope::new(&nodes);

        assert_eq!(scope.assign_node_id("a").as_deref(), Some("N1"));
        assert_eq!(scope.assign_node_id("a"), None);
        assert_eq!(scope.assign_node_id("b").as_deref(), Some("N2"));
        assert_eq!(scope.node_id("a"), Some("N1"));
        assert_eq!(scope.node_count(), 2);
        assert!(scope.editor_node("b").is_some());
        assert!(scope.editor_node("zzz").is_none());
    }

    #[test]
    fn pin_ids_are_looked_up_by_node_and_pin() {
        let nodes = vec![EditorNode::new("a", "K2Node_Event")];
        let mut scope = GraphScope::new(&nodes);
        scope.assign_pin_id("a", "then", "P1".into());
        scope.assign_pin_id("a", "delegate", "P2".into());

        // Lookup keys need not borrow from the node list
        let guid = String::from("a");
        let pin = String::from("delegate");
        assert_eq!(scope.pin_id(&guid, &pin), Some("P2"));
        assert_eq!(scope.pin_id("a", "then"), Some("P1"));
        assert_eq!(scope.pin_id("a", "missing"), None);
        assert_eq!(scope.pin_id("b", "then"), None);
    }
}
