//! Delegate creation, binding and invocation.

use super::{
    clean_class_name, log_gap, ExtractContext, Extraction, NodeExtractor, SubgraphLink,
    SubgraphOrigin,
};
use crate::editor::{DelegateRef, EditorNode, GraphRef, NodeDetail};
use crate::ir::NodeCategory;

pub struct DelegateExtractor;

impl NodeExtractor for DelegateExtractor {
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        _cx: &ExtractContext<'_>,
        out: &mut Extraction,
    ) {
        let delegate = match &node.detail {
            NodeDetail::Delegate(delegate) => delegate,
            _ => return log_gap(node, category, "delegate reference"),
        };

        match category {
            NodeCategory::CreateDelegate => {
                out.member_name = clean_class_name(&delegate.name);
                if let Some(scope) = &delegate.scope_class {
                    out.member_parent = clean_class_name(scope);
                } else if let Some(signature) = &delegate.signature {
                    out.member_parent = clean_class_name(&signature.owner_class);
                }
                if let Some(graph) = bound_function_graph(delegate) {
                    out.subgraphs.push(SubgraphLink {
                        graph,
                        origin: SubgraphOrigin::Delegate,
                    });
                }
            }
            NodeCategory::CallDelegate => match &delegate.signature {
                Some(signature) => {
                    out.member_name = clean_class_name(&signature.name);
                    out.member_parent = clean_class_name(&signature.owner_class);
                }
                None => log_gap(node, category, "delegate signature"),
            },
            _ => {
                out.member_name = delegate.name.clone();
                out.member_parent = clean_class_name(&delegate.owner_class);
            }
        }
    }
}

/// Body graph of the function a created delegate binds to.
///
/// The scope class wins; without one the signature's owner is searched.
fn bound_function_graph(delegate: &DelegateRef) -> Option<GraphRef> {
    if delegate.scope_class.is_some() {
        return delegate
            .scope_program
            .as_ref()
            .map(|program| GraphRef::new(program.clone(), delegate.name.clone()));
    }

    let signature = delegate.signature.as_ref()?;
    signature
        .owner_program
        .as_ref()
        .map(|program| GraphRef::new(program.clone(), signature.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{NoSource, SignatureRef};
    use crate::extract::extract;

    #[test]
    fn create_delegate_binds_into_scope_class() {
        let cx = ExtractContext::new(&NoSource);
        let delegate = DelegateRef {
            name: "HandleHit".into(),
            scope_class: Some("BP_Door_C".into()),
            scope_program: Some("/Game/BP_Door.BP_Door".into()),
            ..Default::default()
        };
        let node = EditorNode::new("d", "K2Node_CreateDelegate")
            .with_detail(NodeDetail::Delegate(delegate));
        let out = extract(&node, NodeCategory::CreateDelegate, &cx);
        assert_eq!(out.member_name, "HandleHit");
        assert_eq!(out.member_parent, "BP_Door");
        assert_eq!(out.subgraphs[0].graph, GraphRef::new("/Game/BP_Door.BP_Door", "HandleHit"));
    }

    #[test]
    fn call_delegate_reports_signature() {
        let cx = ExtractContext::new(&NoSource);
        let delegate = DelegateRef {
            name: "OnOpened".into(),
            signature: Some(SignatureRef {
                name: "OnOpened__DelegateSignature".into(),
                owner_class: "BP_Door_C".into(),
                owner_program: None,
            }),
            ..Default::default()
        };
        let node = EditorNode::new("d", "K2Node_CallDelegate")
            .with_detail(NodeDetail::Delegate(delegate));
        let out = extract(&node, NodeCategory::CallDelegate, &cx);
        assert_eq!(out.member_name, "OnOpened__DelegateSignature");
        assert_eq!(out.member_parent, "BP_Door");
        assert!(out.subgraphs.is_empty());
    }
}
