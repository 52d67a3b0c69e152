//! Array, set and map construction and element access.

use super::{clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor};
use crate::editor::{EditorNode, EditorPin};
use crate::ir::NodeCategory;

/// Input pin of a get-array-item node holding the array.
const TARGET_ARRAY_PIN: &str = "TargetArray";

pub struct ContainerExtractor;

impl NodeExtractor for ContainerExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let pin = match category {
            NodeCategory::GetArrayItem => node
                .pins
                .iter()
                .find(|pin| pin.is_input() && pin.name == TARGET_ARRAY_PIN),
            _ => node.first_output(),
        };

        let pin = match pin {
            Some(pin) => pin,
            None => return log_gap(node, category, "container pin"),
        };

        out.member_name = match category {
            NodeCategory::MakeMap => format!(
                "{} to {}",
                element_type(pin),
                clean_class_name(&pin.value_category)
            ),
            _ => element_type(pin),
        };
    }
}

fn element_type(pin: &EditorPin) -> String {
    if !pin.sub_category.is_empty() {
        return clean_class_name(&pin.sub_category);
    }
    match &pin.sub_category_object {
        Some(object) => clean_class_name(&object.name),
        None => pin.category.clone(),
    }
}
