//! # Blueprint IR Root
//!
//! The top-level document produced by one translation: metadata, graphs and
//! any user-defined types they reference.

use super::flow::Flows;
use super::node::Node;
use super::types::{EnumDef, StructDef};
use serde::{Deserialize, Serialize};

/// Version tag written into every IR document.
pub const IR_VERSION: &str = "1.0.0";

/// Kind of program the translated graphs belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProgramKind {
    #[default]
    Normal,
    Const,
    MacroLibrary,
    Interface,
    LevelScript,
    FunctionLibrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphKind {
    #[default]
    EventGraph,
    Function,
    Composite,
    Macro,
    Construction,
    Animation,
    Struct,
    Enum,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub blueprint_type: ProgramKind,
    pub blueprint_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub name: String,
    pub graph_type: GraphKind,

    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub flows: Flows,
}

impl Graph {
    pub fn new(name: impl Into<String>, graph_type: GraphKind) -> Self {
        Self {
            name: name.into(),
            graph_type,
            ..Default::default()
        }
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// IR root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub version: String,
    pub metadata: Metadata,

    #[serde(default)]
    pub graphs: Vec<Graph>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structs: Vec<StructDef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumDef>,
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::new(Metadata::default())
    }
}

impl Blueprint {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            version: IR_VERSION.to_string(),
            metadata,
            graphs: Vec::new(),
            structs: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// True if at least one graph contains a node.
    pub fn has_nodes(&self) -> bool {
        self.graphs.iter().any(|graph| !graph.nodes.is_empty())
    }

    pub fn node_count(&self) -> usize {
        self.graphs.iter().map(|graph| graph.nodes.len()).sum()
    }
}
