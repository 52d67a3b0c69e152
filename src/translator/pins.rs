//! Editor pin → IR pin conversion.

use super::scope::GraphScope;
use crate::editor::{ContainerKind, EditorNode, EditorPin, NodeDetail};
use crate::extract::clean_class_name;
use crate::ir::{NodeCategory, Pin, PinType};

/// Convert the visible pins of `node`, registering their IDs in `scope`.
///
/// Inputs and outputs share one `P<n>` counter, in editor pin order.
pub(crate) fn translate_pins<'n>(
    node: &'n EditorNode,
    category: NodeCategory,
    scope: &mut GraphScope<'n>,
) -> (Vec<Pin>, Vec<Pin>) {
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    let mut counter = 0usize;

    for pin in node.pins.iter().filter(|pin| !pin.hidden) {
        counter += 1;
        let id = format!("P{}", counter);
        scope.assign_pin_id(&node.guid, &pin.id, id.clone());

        let translated = translate_pin(node, category, pin, id);
        if pin.is_input() {
            inputs.push(translated);
        } else {
            outputs.push(translated);
        }
    }

    (inputs, outputs)
}

fn translate_pin(node: &EditorNode, category: NodeCategory, pin: &EditorPin, id: String) -> Pin {
    let pin_type = PinType::from_category(&pin.category, &pin.sub_category);

    Pin {
        id,
        name: pin.name.clone(),
        pin_type,
        sub_type: sub_type(node, category, pin, pin_type),
        default_value: default_value(pin),
        connected: !pin.linked_to.is_empty(),
        is_reference: pin.is_reference,
        is_const: pin.is_const,
        is_array: pin.container == ContainerKind::Array,
        is_set: pin.container == ContainerKind::Set,
        is_map: pin.container == ContainerKind::Map,
    }
}

fn sub_type(
    node: &EditorNode,
    category: NodeCategory,
    pin: &EditorPin,
    pin_type: PinType,
) -> String {
    if category == NodeCategory::CreateDelegate {
        if let NodeDetail::Delegate(delegate) = &node.detail {
            if pin.is_output() && pin_type.is_delegate() {
                return clean_class_name(&delegate.name);
            }
            if pin.is_input() && pin_type == PinType::Object {
                if let Some(scope) = &delegate.scope_class {
                    return clean_class_name(scope);
                }
            }
        }
    }

    match &pin.sub_category_object {
        Some(object) if !object.name.is_empty() => clean_class_name(&object.name),
        _ => clean_class_name(&pin.sub_category),
    }
}

fn default_value(pin: &EditorPin) -> String {
    if !pin.default_value.is_empty() {
        return pin.default_value.clone();
    }
    match &pin.default_object {
        Some(path) if !path.is_empty() => path.clone(),
        _ => pin.default_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::DelegateRef;

    #[test]
    fn pins_share_one_counter_and_skip_hidden() {
        let nodes = vec![EditorNode::new("n", "K2Node_CallFunction")
            .with_pin(EditorPin::input("exec", "execute", "exec"))
            .with_pin(EditorPin::input("self", "self", "object").hidden())
            .with_pin(EditorPin::output("then", "then", "exec"))
            .with_pin(EditorPin::input("dur", "Duration", "float").with_default("0.2"))];
        let mut scope = GraphScope::new(&nodes);

        let (inputs, outputs) = translate_pins(&nodes[0], NodeCategory::CallFunction, &mut scope);
        let ids: Vec<_> = inputs.iter().map(|pin| pin.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P3"]);
        assert_eq!(outputs[0].id, "P2");
        assert_eq!(inputs[1].default_value, "0.2");
        assert_eq!(inputs[1].pin_type, PinType::Float);
        assert_eq!(scope.pin_id("n", "then"), Some("P2"));
        assert_eq!(scope.pin_id("n", "self"), None);
    }

    #[test]
    fn create_delegate_pins_name_the_bound_function() {
        let node = EditorNode::new("d", "K2Node_CreateDelegate")
            .with_pin(
                EditorPin::input("obj", "Object", "object")
                    .with_object("Actor", "/Script/Engine.Actor"),
            )
            .with_pin(EditorPin::output("out", "Output Delegate", "delegate"))
            .with_detail(NodeDetail::Delegate(DelegateRef {
                name: "HandleHit".into(),
                scope_class: Some("BP_Door_C".into()),
                ..Default::default()
            }));
        let nodes = vec![node];
        let mut scope = GraphScope::new(&nodes);

        let (inputs, outputs) = translate_pins(&nodes[0], NodeCategory::CreateDelegate, &mut scope);
        assert_eq!(inputs[0].sub_type, "BP_Door");
        assert_eq!(outputs[0].sub_type, "HandleHit");
    }

    #[test]
    fn defaults_fall_back_to_object_then_text() {
        let mut pin = EditorPin::input("p", "Mesh", "object");
        pin.default_object = Some("/Game/Meshes/SM_Door.SM_Door".into());
        pin.default_text = "ignored".into();
        assert_eq!(default_value(&pin), "/Game/Meshes/SM_Door.SM_Door");

        let mut pin = EditorPin::input("p", "Label", "text");
        pin.default_text = "Open".into();
        assert_eq!(default_value(&pin), "Open");
    }
}
