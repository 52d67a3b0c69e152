//! Variable access nodes.
//!
//! The owning type of a variable node is its value type, written as the
//! non-empty parts of the first data output pin's type joined by `/`
//! (e.g. `struct/Vector` or `object/BP_Door`).

use super::{clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor};
use crate::editor::{EditorNode, EditorPin, NodeDetail};
use crate::ir::NodeCategory;

pub struct VariableExtractor;

impl NodeExtractor for VariableExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let variable = match &node.detail {
            NodeDetail::Variable(variable) => variable,
            _ => return log_gap(node, category, "variable reference"),
        };

        if !variable.name.is_empty() {
            out.name = variable.name.clone();
        }

        out.member_name = if !variable.member_name.is_empty() {
            clean_class_name(&variable.member_name)
        } else if !node.graph.is_empty() {
            format!("Var_{}_{}", node.graph, node.guid)
        } else {
            "UnknownVariable".to_string()
        };

        if let Some(pin) = node.pins.iter().find(|pin| pin.is_output() && !pin.is_exec()) {
            out.member_parent = value_type_path(pin);
        }

        tracing::debug!(
            "[EXTRACT] Variable: {}, Type: {}",
            out.member_name,
            out.member_parent
        );
    }
}

fn value_type_path(pin: &EditorPin) -> String {
    let mut parts = vec![clean_class_name(&pin.category)];
    if !pin.sub_category.is_empty() {
        parts.push(clean_class_name(&pin.sub_category));
    }
    if let Some(object) = &pin.sub_category_object {
        parts.push(clean_class_name(&object.name));
    }
    if !pin.sub_category_member.is_empty() {
        parts.push(clean_class_name(&pin.sub_category_member));
    }
    parts.join("/")
}
