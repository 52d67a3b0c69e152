//! Struct construction, destructuring and member access.

use super::{clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor};
use crate::editor::{EditorNode, NodeDetail, TypeRef};
use crate::ir::NodeCategory;

pub struct StructExtractor;

impl NodeExtractor for StructExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let structure = match &node.detail {
            NodeDetail::Struct(structure) => structure,
            _ => return log_gap(node, category, "struct type"),
        };

        let verb = match category {
            NodeCategory::MakeStruct => "Make",
            NodeCategory::BreakStruct => "Break",
            NodeCategory::SetFieldsInStruct => "Set Fields In",
            _ => {
                out.member_parent = clean_class_name(&structure.name);
                return;
            }
        };

        out.name = format!("{} {}", verb, structure.name);
        out.member_name = clean_class_name(&structure.name);
        out.member_parent = owning_package(structure);
    }
}

/// Package part of a struct path: `/Game/Data/S_Hinge` from `/Game/Data/S_Hinge.S_Hinge`.
fn owning_package(structure: &TypeRef) -> String {
    match structure.path.split_once('.') {
        Some((package, _)) => clean_class_name(package),
        None => structure.path.clone(),
    }
}
