mod common;

use common::*;
use pbir::{
    compile_nodes, compile_nodes_with_report, compile_snapshot, from_text, EditorSnapshot, Error,
    NoSource, TranslateError, TranslatorConfig,
};
use pretty_assertions::assert_eq;

#[test]
fn snapshot_compiles_to_parseable_text() {
    init_tracing();
    let snapshot = door_snapshot();
    let config = TranslatorConfig::default().with_max_depth(1);

    let text = compile_snapshot(&snapshot, PROGRAM, "EventGraph", &config).unwrap();
    let blueprint = from_text(&text).unwrap();

    assert_eq!(blueprint.metadata.name, "BP_Door");
    assert_eq!(blueprint.graphs.len(), 2);
    assert!(text.contains('\n'));
}

#[test]
fn missing_graph_is_reported() {
    init_tracing();
    let snapshot = door_snapshot();

    let config = TranslatorConfig::default();
    let err = compile_snapshot(&snapshot, PROGRAM, "CloseDoor", &config).unwrap_err();
    assert!(matches!(
        err,
        Error::GraphNotFound { ref program, ref graph }
            if program == PROGRAM && graph == "CloseDoor"
    ));
}

#[test]
fn empty_input_surfaces_as_translate_error() {
    init_tracing();
    let err = compile_nodes(&[], &NoSource, &TranslatorConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Translate(TranslateError::EmptyInput)));
}

#[test]
fn report_carries_blueprint_and_warnings() {
    init_tracing();
    let nodes = vec![call("print", "PrintString", "EventGraph", None)
        .with_pin(pbir::EditorPin::input("target", "Target", "object"))];

    let config = TranslatorConfig::default();
    let output = compile_nodes_with_report(&nodes, &NoSource, &config).unwrap();

    assert_eq!(output.blueprint.node_count(), 1);
    assert_eq!(output.report.warnings.len(), 1);
    assert_eq!(from_text(&output.text).unwrap(), output.blueprint);
}

#[test]
fn toml_config_drives_output_style() {
    init_tracing();
    let config = TranslatorConfig::from_toml_str(
        r#"
        max_depth = 9

        [output]
        pretty = false
        "#,
    )
    .unwrap();
    assert_eq!(config.max_depth, pbir::MAX_TRANSLATION_DEPTH);

    let snapshot = door_snapshot();
    let text = compile_snapshot(&snapshot, PROGRAM, "EventGraph", &config).unwrap();

    assert!(!text.contains('\n'));
    assert_eq!(from_text(&text).unwrap().graphs.len(), 3);
}

#[test]
fn snapshot_json_replays_through_the_pipeline() {
    init_tracing();
    let json = serde_json::to_string(&door_snapshot()).unwrap();
    let snapshot = EditorSnapshot::from_json(&json).unwrap();
    assert_eq!(snapshot, door_snapshot());

    let config = TranslatorConfig::default();
    let text = compile_snapshot(&snapshot, PROGRAM, "OpenDoor", &config).unwrap();
    let blueprint = from_text(&text).unwrap();
    assert_eq!(blueprint.graphs[0].name, "OpenDoor");
    assert_eq!(blueprint.graphs[0].nodes.len(), 2);
}
