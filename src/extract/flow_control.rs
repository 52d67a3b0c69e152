//! Branches, sequences, switches, gates and loops.

use super::{ExtractContext, Extraction, NodeExtractor};
use crate::editor::EditorNode;
use crate::ir::NodeCategory;

pub struct FlowControlExtractor;

impl NodeExtractor for FlowControlExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        if let Some(name) = canonical_name(category) {
            out.name = name.to_string();
        }

        match category {
            NodeCategory::Select => {
                let options = node
                    .pins
                    .iter()
                    .filter(|pin| pin.is_input() && !pin.is_exec() && pin.name != "Index")
                    .count();
                tracing::debug!("[EXTRACT] Select node {} with {} options", node.guid, options);
            }
            NodeCategory::MultiGate => {
                let outputs = node.pins.iter().filter(|pin| pin.is_output()).count();
                tracing::debug!("[EXTRACT] Multi Gate node {} with {} outputs", node.guid, outputs);
            }
            _ => {}
        }
    }
}

fn canonical_name(category: NodeCategory) -> Option<&'static str> {
    match category {
        NodeCategory::Sequence => Some("Sequence"),
        NodeCategory::Branch => Some("Branch"),
        NodeCategory::Select => Some("Select"),
        NodeCategory::Switch
        | NodeCategory::SwitchInt
        | NodeCategory::SwitchString
        | NodeCategory::SwitchEnum
        | NodeCategory::SwitchName => Some("Switch"),
        NodeCategory::MultiGate => Some("Multi Gate"),
        NodeCategory::DoOnceMultiInput => Some("Do Once Multi Input"),
        _ => None,
    }
}
