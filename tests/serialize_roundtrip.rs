mod common;

use common::*;
use pbir::{from_text, to_text, Blueprint, TextStyle, Translator, TranslatorConfig};
use pretty_assertions::assert_eq;

fn translated_door() -> Blueprint {
    let snapshot = door_snapshot();
    let mut nodes = event_graph_nodes(&snapshot);
    nodes.push(
        pbir::EditorNode::new("make", "K2Node_MakeStruct")
            .in_graph(PROGRAM, "EventGraph")
            .pure()
            .with_pin(pbir::EditorPin::input("angle", "Angle", "float").with_default("90.0"))
            .with_pin(
                pbir::EditorPin::output("out", "S_Hinge", "struct")
                    .with_object("S_Hinge", HINGE_STRUCT),
            )
            .with_detail(pbir::NodeDetail::Struct(hinge_ref())),
    );

    Translator::with_config(TranslatorConfig::default().with_max_depth(2))
        .translate(&nodes, &snapshot)
        .unwrap()
}

#[test]
fn compact_and_pretty_text_parse_back_identically() {
    init_tracing();
    let blueprint = translated_door();

    let compact = to_text(&blueprint, TextStyle::Compact).unwrap();
    let pretty = to_text(&blueprint, TextStyle::Pretty { indent: 4 }).unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n    \"metadata\""));
    assert!(compact.len() < pretty.len());

    assert_eq!(from_text(&compact).unwrap(), blueprint);
    assert_eq!(from_text(&pretty).unwrap(), blueprint);
}

#[test]
fn text_form_matches_the_wire_shape() {
    init_tracing();
    let blueprint = translated_door();
    let text = to_text(&blueprint, TextStyle::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["metadata"]["blueprint_type"], "Normal");
    assert_eq!(value["graphs"][0]["graph_type"], "EventGraph");
    assert_eq!(value["graphs"][1]["graph_type"], "Function");

    let begin = &value["graphs"][0]["nodes"][0];
    assert_eq!(begin["id"], "N1");
    assert_eq!(begin["type"], "Event");
    assert!(begin.get("pure").is_none());
    assert!(begin.get("comment").is_none());

    let then = &begin["output_pins"][0];
    assert!(then.get("type").is_none());
    assert_eq!(then["connected"], true);
    assert!(then.get("sub_type").is_none());

    let make = &value["graphs"][0]["nodes"][2];
    assert_eq!(make["pure"], true);
    assert_eq!(make["input_pins"][0]["type"], "Float");
    assert_eq!(make["input_pins"][0]["default_value"], "90.0");
    assert_eq!(make["output_pins"][0]["sub_type"], "S_Hinge");

    assert_eq!(value["graphs"][0]["flows"]["execution"][0], "N1->N2");
    assert_eq!(value["structs"][0]["name"], "S_Hinge");
    assert!(value.get("enums").is_none());
}
