//! # Node Classification
//!
//! Maps an editor node to one [`NodeCategory`] through a cascade:
//!
//! 1. Struct operations (make, break, set-fields, member access) try the
//!    exact-name table first
//! 2. Variable nodes resolve through [`NodeClassifier::classify_variable`]
//! 3. Exact-name lookup on the class base name
//! 4. Ordered class-hierarchy walk
//! 5. Default to [`NodeCategory::CallFunction`], logged as a miss
//!
//! The classifier is built once and passed to the translator; it holds no
//! mutable state.

mod table;

use crate::editor::{EditorNode, NodeDetail};
use crate::ir::NodeCategory;
use std::collections::HashMap;
use table::{HIERARCHY, NAME_TABLE, VARIABLE_BASE};

#[derive(Debug, Clone)]
pub struct NodeClassifier {
    names: HashMap<String, NodeCategory>,
    hierarchy: Vec<(String, NodeCategory)>,
}

impl Default for NodeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeClassifier {
    /// Classifier loaded with the standard name table and hierarchy.
    pub fn new() -> Self {
        let names = NAME_TABLE
            .iter()
            .map(|(name, category)| (name.to_string(), *category))
            .collect();
        let hierarchy = HIERARCHY
            .iter()
            .map(|(name, category)| (name.to_string(), *category))
            .collect();

        Self { names, hierarchy }
    }

    /// Add or override an exact-name mapping.
    pub fn with_name(mut self, class_base_name: impl Into<String>, category: NodeCategory) -> Self {
        self.names.insert(class_base_name.into(), category);
        self
    }

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    pub fn classify(&self, node: &EditorNode) -> NodeCategory {
        if node.is_a("MakeStruct") || node.is_a("StructOperation") {
            if let Some(category) = self.lookup_name(node.class.base_name()) {
                return category;
            }
        }

        if node.is_a(VARIABLE_BASE) {
            return self.classify_variable(node);
        }

        if let Some(category) = self.lookup_name(node.class.base_name()) {
            return category;
        }

        if let Some(category) = self.walk_hierarchy(node) {
            tracing::debug!(
                "[CLASSIFY] {} resolved by hierarchy to {:?}",
                node.class.name,
                category
            );
            return category;
        }

        tracing::warn!(
            "[CLASSIFY] No category for node class '{}' ({}), defaulting to CallFunction",
            node.class.name,
            node.title
        );
        NodeCategory::CallFunction
    }

    pub fn lookup_name(&self, class_base_name: &str) -> Option<NodeCategory> {
        self.names.get(class_base_name).copied()
    }

    /// Resolve a variable-access node to its get/set/local/parameter variant.
    pub fn classify_variable(&self, node: &EditorNode) -> NodeCategory {
        let variable = match &node.detail {
            NodeDetail::Variable(variable) => variable,
            _ => return NodeCategory::Variable,
        };

        let property = match variable.property {
            Some(property) => property,
            None => return NodeCategory::Variable,
        };

        if variable.blueprint_class.is_none() {
            return NodeCategory::Variable;
        }

        if property.is_parameter {
            return NodeCategory::FunctionParameter;
        }

        if variable.local_scope {
            return NodeCategory::LocalFunctionVariable;
        }

        let scoped = variable.member_scope.is_some();

        if node.is_a("VariableGet") {
            if scoped {
                tracing::debug!("[CLASSIFY] {} is a local variable get", variable.name);
                return NodeCategory::LocalVariableGet;
            }
            return NodeCategory::VariableGet;
        }

        if node.is_a("VariableSet") {
            if scoped {
                tracing::debug!("[CLASSIFY] {} is a local variable set", variable.name);
                return NodeCategory::LocalVariableSet;
            }
            return NodeCategory::VariableSet;
        }

        NodeCategory::Variable
    }

    fn walk_hierarchy(&self, node: &EditorNode) -> Option<NodeCategory> {
        self.hierarchy
            .iter()
            .find(|(base, _)| node.is_a(base))
            .map(|(base, category)| {
                if base == VARIABLE_BASE {
                    self.classify_variable(node)
                } else {
                    *category
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{VariableProperty, VariableRef};

    fn variable_node(class: &str, variable: VariableRef) -> EditorNode {
        EditorNode::new("v", class)
            .with_ancestors(["K2Node_Variable"])
            .with_detail(NodeDetail::Variable(variable))
    }

    fn resolved(member_scope: Option<&str>) -> VariableRef {
        VariableRef {
            name: "Health".into(),
            member_name: "Health".into(),
            property: Some(VariableProperty::default()),
            blueprint_class: Some("BP_Player_C".into()),
            local_scope: false,
            member_scope: member_scope.map(str::to_string),
        }
    }

    #[test]
    fn exact_names_resolve_aliases() {
        let classifier = NodeClassifier::new();
        let branch = EditorNode::new("b", "K2Node_IfThenElse");
        let sequence = EditorNode::new("s", "K2Node_ExecutionSequence");
        let switch = EditorNode::new("w", "K2Node_SwitchInteger");
        assert_eq!(classifier.classify(&branch), NodeCategory::Branch);
        assert_eq!(classifier.classify(&sequence), NodeCategory::Sequence);
        assert_eq!(classifier.classify(&switch), NodeCategory::SwitchInt);
    }

    #[test]
    fn make_struct_wins_over_variable_branch() {
        let classifier = NodeClassifier::new();
        let node = EditorNode::new("m", "K2Node_MakeStruct")
            .with_ancestors([
                "K2Node_StructMemberSet",
                "K2Node_StructOperation",
                "K2Node_Variable",
            ]);
        assert_eq!(classifier.classify(&node), NodeCategory::MakeStruct);
    }

    #[test]
    fn struct_operations_skip_the_variable_branch() {
        let classifier = NodeClassifier::new();
        let chain = ["K2Node_StructMemberGet", "K2Node_StructOperation", "K2Node_Variable"];

        let node = EditorNode::new("b", "K2Node_BreakStruct").with_ancestors(chain);
        assert_eq!(classifier.classify(&node), NodeCategory::BreakStruct);

        let node = EditorNode::new("f", "K2Node_SetFieldsInStruct")
            .with_ancestors([
                "K2Node_StructMemberSet",
                "K2Node_StructOperation",
                "K2Node_Variable",
            ]);
        assert_eq!(classifier.classify(&node), NodeCategory::SetFieldsInStruct);

        // Unlisted struct nodes still fall through to the variable branch
        let node = EditorNode::new("g", "K2Node_CustomStructGet").with_ancestors(chain);
        assert_eq!(classifier.classify(&node), NodeCategory::Variable);
    }

    #[test]
    fn variable_sub_algorithm() {
        let classifier = NodeClassifier::new();

        let get = variable_node("K2Node_VariableGet", resolved(None));
        assert_eq!(classifier.classify(&get), NodeCategory::VariableGet);

        let local_get = variable_node("K2Node_VariableGet", resolved(Some("MyFunction")));
        assert_eq!(classifier.classify(&local_get), NodeCategory::LocalVariableGet);

        let local_set = variable_node("K2Node_VariableSet", resolved(Some("MyFunction")));
        assert_eq!(classifier.classify(&local_set), NodeCategory::LocalVariableSet);

        let mut parameter = resolved(None);
        parameter.property = Some(VariableProperty { is_parameter: true });
        let parameter = variable_node("K2Node_VariableGet", parameter);
        assert_eq!(classifier.classify(&parameter), NodeCategory::FunctionParameter);

        let mut local = resolved(None);
        local.local_scope = true;
        let local = variable_node("K2Node_VariableSet", local);
        assert_eq!(classifier.classify(&local), NodeCategory::LocalFunctionVariable);

        let mut unresolved = resolved(None);
        unresolved.property = None;
        let unresolved = variable_node("K2Node_VariableGet", unresolved);
        assert_eq!(classifier.classify(&unresolved), NodeCategory::Variable);
    }

    #[test]
    fn hierarchy_fallback_uses_first_match() {
        let classifier = NodeClassifier::new();
        let node = EditorNode::new("x", "K2Node_LatentGameplayTaskCall")
            .with_ancestors(["K2Node_BaseAsyncTask", "K2Node"]);
        assert_eq!(classifier.classify(&node), NodeCategory::BaseAsyncTask);

        let call = EditorNode::new("y", "K2Node_CallFunctionOnMemberVariant")
            .with_ancestors(["K2Node_CallFunctionOnMember", "K2Node_CallFunction"]);
        assert_eq!(classifier.classify(&call), NodeCategory::CallFunction);
    }

    #[test]
    fn unknown_nodes_default_to_call_function() {
        let classifier = NodeClassifier::new();
        let node = EditorNode::new("z", "K2Node_SomethingNew").with_ancestors(["K2Node"]);
        assert_eq!(classifier.classify(&node), NodeCategory::CallFunction);
    }

    #[test]
    fn injected_names_override_defaults() {
        let classifier = NodeClassifier::new().with_name("SomethingNew", NodeCategory::Literal);
        let node = EditorNode::new("z", "K2Node_SomethingNew");
        assert_eq!(classifier.classify(&node), NodeCategory::Literal);
    }
}
