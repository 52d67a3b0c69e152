//! Programs, their graphs, and whole editor snapshots.

use super::node::{EditorNode, GraphRef};
use super::GraphSource;
use crate::error::SerializeError;
use crate::ir::{EnumDef, ProgramKind, StructDef};
use serde::{Deserialize, Serialize};

/// What a graph hangs off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphOwner {
    #[default]
    Program,
    /// Bound graph of a collapsed/composite node.
    Composite { node: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorGraph {
    pub name: String,

    #[serde(default)]
    pub owner: GraphOwner,

    #[serde(default)]
    pub nodes: Vec<EditorNode>,
}

impl EditorGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.owner, GraphOwner::Composite { .. })
    }
}

/// A scripted program (class, macro library, interface...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorProgram {
    pub name: String,

    /// Content path, e.g. `/Game/Blueprints/BP_Door.BP_Door`.
    pub path: String,

    #[serde(default)]
    pub kind: ProgramKind,

    /// Name of the class the program generates, e.g. `BP_Door_C`.
    #[serde(default)]
    pub generated_class: String,

    #[serde(default)]
    pub graphs: Vec<EditorGraph>,
}

impl EditorProgram {
    pub fn find_graph(&self, name: &str) -> Option<&EditorGraph> {
        self.graphs.iter().find(|graph| graph.name == name)
    }

    pub fn graph_ref(&self, name: &str) -> GraphRef {
        GraphRef::new(self.path.clone(), name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStruct {
    pub path: String,

    #[serde(flatten)]
    pub definition: StructDef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnum {
    pub path: String,

    #[serde(flatten)]
    pub definition: EnumDef,
}

/// Everything the translator may look up, captured as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    #[serde(default)]
    pub programs: Vec<EditorProgram>,

    #[serde(default)]
    pub structs: Vec<UserStruct>,

    #[serde(default)]
    pub enums: Vec<UserEnum>,
}

impl EditorSnapshot {
    pub fn from_json(text: &str) -> Result<Self, SerializeError> {
        serde_json::from_str(text).map_err(SerializeError::Decode)
    }
}

impl GraphSource for EditorSnapshot {
    fn program(&self, path: &str) -> Option<&EditorProgram> {
        self.programs.iter().find(|program| program.path == path)
    }

    fn user_struct(&self, path: &str) -> Option<&StructDef> {
        self.structs
            .iter()
            .find(|user| user.path == path)
            .map(|user| &user.definition)
    }

    fn user_enum(&self, path: &str) -> Option<&EnumDef> {
        self.enums
            .iter()
            .find(|user| user.path == path)
            .map(|user| &user.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_resolves_graphs_and_types() {
        let snapshot = EditorSnapshot::from_json(
            r#"{
                "programs": [{
                    "name": "BP_Door",
                    "path": "/Game/BP_Door.BP_Door",
                    "kind": "Normal",
                    "generated_class": "BP_Door_C",
                    "graphs": [
                        { "name": "EventGraph" },
                        { "name": "Collapsed", "owner": { "kind": "composite", "node": "g7" } }
                    ]
                }],
                "structs": [{ "path": "/Game/S_Hinge.S_Hinge", "name": "S_Hinge", "members": [] }]
            }"#,
        )
        .unwrap();

        let graph = snapshot
            .graph(&GraphRef::new("/Game/BP_Door.BP_Door", "Collapsed"))
            .unwrap();
        assert!(graph.is_composite());
        assert!(snapshot.graph(&GraphRef::new("/Game/BP_Door.BP_Door", "Missing")).is_none());
        assert_eq!(snapshot.user_struct("/Game/S_Hinge.S_Hinge").unwrap().name, "S_Hinge");
        assert!(snapshot.user_enum("/Game/E_State.E_State").is_none());

        let program = snapshot.program("/Game/BP_Door.BP_Door").unwrap();
        let collapsed = program.graph_ref("Collapsed");
        assert_eq!(collapsed, GraphRef::new("/Game/BP_Door.BP_Door", "Collapsed"));
        assert_eq!(snapshot.graph(&collapsed).unwrap().name, "Collapsed");
    }
}
