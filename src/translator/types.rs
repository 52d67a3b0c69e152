//! Collection of user-defined structs and enums referenced by nodes.

use super::session::TranslationSession;
use crate::editor::{EditorNode, NodeDetail};
use crate::ir::NodeCategory;

impl TranslationSession<'_> {
    /// Record every user struct and enum `node` refers to, once per session.
    pub(crate) fn collect_user_types(&mut self, node: &EditorNode, category: NodeCategory) {
        if !self.config.collect_user_types {
            return;
        }

        if is_struct_node(category) {
            if let NodeDetail::Struct(structure) = &node.detail {
                self.collect_struct(&structure.path);
            }
        }

        for pin in node.pins.iter().filter(|pin| !pin.hidden) {
            let object = match &pin.sub_category_object {
                Some(object) => object,
                None => continue,
            };
            match pin.category.as_str() {
                "struct" => self.collect_struct(&object.path),
                "byte" | "enum" => self.collect_enum(&object.path),
                _ => {}
            }
        }
    }

    fn collect_struct(&mut self, path: &str) {
        if path.is_empty() || !self.config.is_user_path(path) {
            return;
        }
        if !self.struct_paths.insert(path.to_string()) {
            return;
        }

        let source = self.source;
        match source.user_struct(path) {
            Some(definition) => {
                tracing::debug!("[TRANSLATE] Collected struct '{}' from {}", definition.name, path);
                self.blueprint.structs.push(definition.clone());
            }
            None => tracing::debug!("[TRANSLATE] No definition for struct {}", path),
        }
    }

    fn collect_enum(&mut self, path: &str) {
        if path.is_empty() || !self.config.is_user_path(path) {
            return;
        }
        if !self.enum_paths.insert(path.to_string()) {
            return;
        }

        let source = self.source;
        match source.user_enum(path) {
            Some(definition) => {
                tracing::debug!("[TRANSLATE] Collected enum '{}' from {}", definition.name, path);
                self.blueprint.enums.push(definition.clone());
            }
            None => tracing::debug!("[TRANSLATE] No definition for enum {}", path),
        }
    }
}

fn is_struct_node(category: NodeCategory) -> bool {
    matches!(
        category,
        NodeCategory::MakeStruct
            | NodeCategory::BreakStruct
            | NodeCategory::SetFieldsInStruct
            | NodeCategory::StructOperation
            | NodeCategory::StructMemberGet
            | NodeCategory::StructMemberSet
    )
}
