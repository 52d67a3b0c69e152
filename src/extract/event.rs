//! Event entry points: native, custom and delegate-bound events.

use super::{clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor};
use crate::editor::{EditorNode, NodeDetail};
use crate::ir::NodeCategory;

pub struct EventExtractor;

impl NodeExtractor for EventExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let event = match &node.detail {
            NodeDetail::Event(event) => event,
            _ => return log_gap(node, category, "event reference"),
        };

        match category {
            NodeCategory::CustomEvent => {
                out.member_name = event.name.clone();
                out.member_parent = clean_class_name(&cx.program_name(&node.program));
            }
            NodeCategory::ActorBoundEvent | NodeCategory::ComponentBoundEvent => {
                out.member_name = event.name.clone();
                out.member_parent = clean_class_name(&event.owner_class);
            }
            _ => {
                out.member_name = clean_class_name(&event.name);
                out.member_parent = clean_class_name(&event.owner_class);
            }
        }

        tracing::debug!(
            "[EXTRACT] Event: {}, Parent: {}",
            out.member_name,
            out.member_parent
        );
    }
}
