//! # Editor Input Model
//!
//! Read-only view of the graph editor: nodes with their pins and
//! category-specific details, plus the [`GraphSource`] lookup the translator
//! uses to follow subgraphs and user-defined types.

mod node;
mod program;

pub use node::{
    strip_class_prefix, ContainerKind, DelegateRef, EditorNode, EditorPin, EventRef, FunctionRef,
    GraphRef, NodeClass, NodeDetail, PinDirection, PinLink, SignatureRef, TypeRef, VariableProperty,
    VariableRef, CLASS_PREFIX,
};
pub use program::{EditorGraph, EditorProgram, EditorSnapshot, GraphOwner, UserEnum, UserStruct};

use crate::ir::{EnumDef, StructDef};

/// Lookup into the editor's programs and type definitions.
pub trait GraphSource {
    fn program(&self, path: &str) -> Option<&EditorProgram>;

    fn graph(&self, graph: &GraphRef) -> Option<&EditorGraph> {
        self.program(&graph.program)?.find_graph(&graph.name)
    }

    fn user_struct(&self, _path: &str) -> Option<&StructDef> {
        None
    }

    fn user_enum(&self, _path: &str) -> Option<&EnumDef> {
        None
    }
}

/// A source that knows nothing. Subgraphs and user types are never resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl GraphSource for NoSource {
    fn program(&self, _path: &str) -> Option<&EditorProgram> {
        None
    }
}
