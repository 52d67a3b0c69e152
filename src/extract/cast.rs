//! Dynamic casts.

use super::{clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor};
use crate::editor::{EditorNode, NodeDetail};
use crate::ir::NodeCategory;

pub struct CastExtractor;

impl NodeExtractor for CastExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        match &node.detail {
            NodeDetail::Cast { target } => out.member_name = clean_class_name(target),
            _ => log_gap(node, category, "cast target"),
        }
    }
}
