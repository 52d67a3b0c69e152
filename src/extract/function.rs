//! Function calls, function entry/result nodes and macro instances.

use super::{
    clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor, SubgraphLink,
    SubgraphOrigin,
};
use crate::editor::{EditorNode, GraphRef, NodeDetail};
use crate::ir::NodeCategory;

pub struct FunctionCallExtractor;

impl NodeExtractor for FunctionCallExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let function = match &node.detail {
            NodeDetail::Function(function) => function,
            _ => return log_gap(node, category, "target function"),
        };

        out.member_parent = clean_class_name(&function.owner_class);
        out.member_name = clean_class_name(&function.name);
        out.latent = function.latent;

        // Script-defined functions can be followed into their body graph
        if let Some(program) = &function.owner_program {
            out.subgraphs.push(SubgraphLink {
                graph: GraphRef::new(program.clone(), function.name.clone()),
                origin: SubgraphOrigin::Function,
            });
        }
    }
}

pub struct FunctionEntryExtractor;

impl NodeExtractor for FunctionEntryExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        match category {
            NodeCategory::FunctionEntry => {
                if let NodeDetail::FunctionEntry { function_name } = &node.detail {
                    out.member_name = function_name.clone();
                }
                out.member_parent = clean_class_name(&cx.program_name(&node.program));
            }
            NodeCategory::FunctionResult | NodeCategory::FunctionTerminator => {
                out.member_parent = clean_class_name(&cx.program_name(&node.program));
            }
            NodeCategory::MacroInstance => {
                let graph = match &node.detail {
                    NodeDetail::Macro { graph } => graph,
                    _ => return log_gap(node, category, "macro graph"),
                };
                out.member_name = clean_class_name(&graph.name);
                out.member_parent = clean_class_name(&cx.program_name(&graph.program));
                out.subgraphs.push(SubgraphLink {
                    graph: graph.clone(),
                    origin: SubgraphOrigin::Macro,
                });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{FunctionRef, NoSource};
    use crate::extract::extract;

    #[test]
    fn script_function_requests_its_body() {
        let cx = ExtractContext::new(&NoSource);
        let function = FunctionRef {
            name: "OpenDoor".into(),
            owner_class: "SKEL_BP_Door_C".into(),
            latent: false,
            owner_program: Some("/Game/BP_Door.BP_Door".into()),
        };
        let node = EditorNode::new("c", "K2Node_CallFunction")
            .with_detail(NodeDetail::Function(function));

        let out = extract(&node, NodeCategory::CallFunction, &cx);
        assert_eq!(out.member_parent, "BP_Door");
        assert_eq!(out.member_name, "OpenDoor");
        assert_eq!(
            out.subgraphs,
            vec![SubgraphLink {
                graph: GraphRef::new("/Game/BP_Door.BP_Door", "OpenDoor"),
                origin: SubgraphOrigin::Function,
            }]
        );
    }

    #[test]
    fn entry_and_macro_report_owning_program() {
        let cx = ExtractContext::new(&NoSource);
        let entry = EditorNode::new("e", "K2Node_FunctionEntry")
            .in_graph("/Game/BP_Door.BP_Door", "OpenDoor")
            .with_detail(NodeDetail::FunctionEntry {
                function_name: "OpenDoor".into(),
            });
        let out = extract(&entry, NodeCategory::FunctionEntry, &cx);
        assert_eq!(out.member_name, "OpenDoor");
        assert_eq!(out.member_parent, "BP_Door");

        let macros = "/Engine/EditorBlueprintResources/StandardMacros.StandardMacros";
        let macro_node = EditorNode::new("m", "K2Node_MacroInstance")
            .with_detail(NodeDetail::Macro {
                graph: GraphRef::new(macros, "ForEachLoop"),
            });
        let out = extract(&macro_node, NodeCategory::MacroInstance, &cx);
        assert_eq!(out.member_name, "ForEachLoop");
        assert_eq!(out.member_parent, "StandardMacros");
        assert_eq!(out.subgraphs[0].origin, SubgraphOrigin::Macro);
    }
}
