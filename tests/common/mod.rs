//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use pbir::editor::{EventRef, FunctionRef, GraphOwner, PinLink, TypeRef, UserEnum, UserStruct};
use pbir::ir::{EnumDef, EnumValue, MemberType, ProgramKind, StructDef, StructMember};
use pbir::{EditorGraph, EditorNode, EditorPin, EditorProgram, EditorSnapshot, NodeDetail};

pub const PROGRAM: &str = "/Game/Blueprints/BP_Door.BP_Door";
pub const HINGE_STRUCT: &str = "/Game/Data/S_Hinge.S_Hinge";
pub const DOOR_STATE_ENUM: &str = "/Game/Data/E_DoorState.E_DoorState";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Native event with a single `then` exec output.
pub fn event(guid: &str, name: &str, graph: &str) -> EditorNode {
    EditorNode::new(guid, "K2Node_Event")
        .with_title(format!("Event {}", name))
        .in_graph(PROGRAM, graph)
        .with_pin(EditorPin::output("then", "then", "exec"))
        .with_detail(NodeDetail::Event(EventRef {
            name: format!("Receive{}", name),
            owner_class: "/Script/Engine.Actor".into(),
        }))
}

/// Function call with `exec`/`then` pins. `owner_program` makes it a script function.
pub fn call(guid: &str, function: &str, graph: &str, owner_program: Option<&str>) -> EditorNode {
    EditorNode::new(guid, "K2Node_CallFunction")
        .with_title(function)
        .in_graph(PROGRAM, graph)
        .with_pin(EditorPin::input("exec", "execute", "exec"))
        .with_pin(EditorPin::output("then", "then", "exec"))
        .with_detail(NodeDetail::Function(FunctionRef {
            name: function.into(),
            owner_class: if owner_program.is_some() {
                "BP_Door_C".into()
            } else {
                "KismetSystemLibrary".into()
            },
            latent: false,
            owner_program: owner_program.map(str::to_string),
        }))
}

pub fn function_entry(guid: &str, function: &str) -> EditorNode {
    EditorNode::new(guid, "K2Node_FunctionEntry")
        .with_title(function)
        .in_graph(PROGRAM, function)
        .with_pin(EditorPin::output("then", "then", "exec"))
        .with_detail(NodeDetail::FunctionEntry {
            function_name: function.into(),
        })
}

pub fn knot(guid: &str, graph: &str) -> EditorNode {
    EditorNode::new(guid, "K2Node_Knot")
        .in_graph(PROGRAM, graph)
        .with_pin(EditorPin::input("in", "InputPin", "wildcard"))
        .with_pin(EditorPin::output("out", "OutputPin", "wildcard"))
}

/// Connect two pins on both ends.
pub fn wire(nodes: &mut [EditorNode], from: (&str, &str), to: (&str, &str)) {
    link_one_way(nodes, from, to);
    link_one_way(nodes, to, from);
}

/// Record a link on the `at` pin only.
pub fn link_one_way(nodes: &mut [EditorNode], at: (&str, &str), other: (&str, &str)) {
    let node = nodes
        .iter_mut()
        .find(|node| node.guid == at.0)
        .expect("fixture node exists");
    let pin = node
        .pins
        .iter_mut()
        .find(|pin| pin.id == at.1)
        .expect("fixture pin exists");
    pin.linked_to.push(PinLink::new(other.0, other.1));
}

pub fn graph(name: &str, nodes: Vec<EditorNode>) -> EditorGraph {
    EditorGraph {
        name: name.into(),
        owner: GraphOwner::Program,
        nodes,
    }
}

/// `BeginPlay -> OpenDoor()`, where `OpenDoor` calls `Unlock` which calls `PrintString`.
pub fn door_snapshot() -> EditorSnapshot {
    let mut event_graph = vec![
        event("begin", "BeginPlay", "EventGraph"),
        call("open", "OpenDoor", "EventGraph", Some(PROGRAM)),
    ];
    wire(&mut event_graph, ("begin", "then"), ("open", "exec"));

    let mut open_door = vec![
        function_entry("open_entry", "OpenDoor"),
        call("unlock", "Unlock", "OpenDoor", Some(PROGRAM)),
    ];
    wire(&mut open_door, ("open_entry", "then"), ("unlock", "exec"));

    let mut unlock = vec![
        function_entry("unlock_entry", "Unlock"),
        call("print", "PrintString", "Unlock", None),
    ];
    wire(&mut unlock, ("unlock_entry", "then"), ("print", "exec"));

    EditorSnapshot {
        programs: vec![EditorProgram {
            name: "BP_Door".into(),
            path: PROGRAM.into(),
            kind: ProgramKind::Normal,
            generated_class: "BP_Door_C".into(),
            graphs: vec![
                graph("EventGraph", event_graph),
                graph("OpenDoor", open_door),
                graph("Unlock", unlock),
            ],
        }],
        structs: vec![UserStruct {
            path: HINGE_STRUCT.into(),
            definition: StructDef {
                name: "S_Hinge".into(),
                comment: String::new(),
                members: vec![
                    StructMember {
                        name: "Angle".into(),
                        member_type: MemberType::Float,
                        default_value: "90.0".into(),
                        ..Default::default()
                    },
                    StructMember {
                        name: "Pivot".into(),
                        member_type: MemberType::Struct,
                        type_name: "Vector".into(),
                        ..Default::default()
                    },
                ],
            },
        }],
        enums: vec![UserEnum {
            path: DOOR_STATE_ENUM.into(),
            definition: EnumDef {
                name: "E_DoorState".into(),
                comment: String::new(),
                values: vec![
                    EnumValue {
                        name: "Closed".into(),
                        comment: String::new(),
                    },
                    EnumValue {
                        name: "Open".into(),
                        comment: String::new(),
                    },
                ],
            },
        }],
    }
}

/// Nodes of the snapshot's event graph.
pub fn event_graph_nodes(snapshot: &EditorSnapshot) -> Vec<EditorNode> {
    snapshot.programs[0].graphs[0].nodes.clone()
}

pub fn hinge_ref() -> TypeRef {
    TypeRef::new("S_Hinge", HINGE_STRUCT)
}
