//! Everything without a dedicated extractor.
//!
//! Node-specific attributes are still read when the editor provides them:
//! component templates, timelines, collapsed graphs and function targets.

use super::{
    clean_class_name, ExtractContext, Extraction, FunctionCallExtractor, NodeExtractor,
    SubgraphLink, SubgraphOrigin,
};
use crate::editor::{EditorNode, NodeDetail};
use crate::ir::NodeCategory;

pub struct GenericExtractor;

impl NodeExtractor for GenericExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        match &node.detail {
            NodeDetail::Component { template_class } => {
                out.member_parent = clean_class_name(template_class);
            }
            NodeDetail::Timeline { name } => {
                out.member_name = name.clone();
                out.member_parent = clean_class_name(&cx.program_name(&node.program));
            }
            NodeDetail::Composite { graph } => {
                out.member_name = graph.name.clone();
                out.subgraphs.push(SubgraphLink {
                    graph: graph.clone(),
                    origin: SubgraphOrigin::Composite {
                        math_expression: category == NodeCategory::MathExpression,
                    },
                });
            }
            NodeDetail::Function(_) => FunctionCallExtractor.extract(node, category, cx, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{GraphRef, NoSource};
    use crate::extract::extract;

    #[test]
    fn collapsed_graphs_are_reported() {
        let cx = ExtractContext::new(&NoSource);
        let graph = GraphRef::new("/Game/BP_Door.BP_Door", "OpenSequence");

        let node = EditorNode::new("c", "K2Node_Composite").with_detail(NodeDetail::Composite {
            graph: graph.clone(),
        });
        let out = extract(&node, NodeCategory::Composite, &cx);
        assert_eq!(out.member_name, "OpenSequence");
        assert_eq!(
            out.subgraphs,
            vec![SubgraphLink {
                graph: graph.clone(),
                origin: SubgraphOrigin::Composite { math_expression: false },
            }]
        );

        let node = EditorNode::new("m", "K2Node_MathExpression")
            .with_detail(NodeDetail::Composite { graph });
        let out = extract(&node, NodeCategory::MathExpression, &cx);
        assert_eq!(
            out.subgraphs[0].origin,
            SubgraphOrigin::Composite { math_expression: true }
        );
    }

    #[test]
    fn components_report_their_template() {
        let cx = ExtractContext::new(&NoSource);
        let node = EditorNode::new("a", "K2Node_AddComponent").with_detail(NodeDetail::Component {
            template_class: "StaticMeshComponent".into(),
        });
        assert_eq!(
            extract(&node, NodeCategory::AddComponent, &cx).member_parent,
            "StaticMeshComponent"
        );
    }
}
