//! Raw nodes and pins as the graph editor exposes them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the editor puts on every script node class name.
pub const CLASS_PREFIX: &str = "K2Node_";

/// Strip [`CLASS_PREFIX`] from a class name.
pub fn strip_class_prefix(name: &str) -> &str {
    name.strip_prefix(CLASS_PREFIX).unwrap_or(name)
}

/// Runtime class of a node and the chain of classes it derives from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeClass {
    pub name: String,

    /// Base classes, nearest first.
    #[serde(default)]
    pub ancestors: Vec<String>,
}

impl NodeClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
        }
    }

    pub fn with_ancestors<I, S>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ancestors = ancestors.into_iter().map(Into::into).collect();
        self
    }

    /// Class name without the editor prefix.
    pub fn base_name(&self) -> &str {
        strip_class_prefix(&self.name)
    }

    /// True if this class is `base` or derives from it. Prefixes are ignored.
    pub fn is_a(&self, base: &str) -> bool {
        let base = strip_class_prefix(base);
        self.base_name() == base
            || self
                .ancestors
                .iter()
                .any(|ancestor| strip_class_prefix(ancestor) == base)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    #[default]
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    None,
    Array,
    Set,
    Map,
}

/// A named object with its full path, e.g. a struct or class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,

    #[serde(default)]
    pub path: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The far end of a wire: a node guid and a pin id on that node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinLink {
    pub node: String,
    pub pin: String,
}

impl PinLink {
    pub fn new(node: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            pin: pin.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPin {
    pub id: String,
    pub name: String,
    pub direction: PinDirection,

    /// Host category such as `exec`, `bool`, `object`, `struct`.
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub sub_category: String,

    #[serde(default)]
    pub sub_category_object: Option<TypeRef>,

    /// Member reference name, used by delegate signature pins.
    #[serde(default)]
    pub sub_category_member: String,

    /// Terminal category of map values.
    #[serde(default)]
    pub value_category: String,

    #[serde(default)]
    pub container: ContainerKind,

    #[serde(default)]
    pub is_reference: bool,

    #[serde(default)]
    pub is_const: bool,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub default_value: String,

    /// Path of a default object, if one is assigned.
    #[serde(default)]
    pub default_object: Option<String>,

    #[serde(default)]
    pub default_text: String,

    #[serde(default)]
    pub linked_to: Vec<PinLink>,
}

impl EditorPin {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        direction: PinDirection,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            direction,
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn input(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(id, name, PinDirection::Input, category)
    }

    pub fn output(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(id, name, PinDirection::Output, category)
    }

    pub fn linked(mut self, node: impl Into<String>, pin: impl Into<String>) -> Self {
        self.linked_to.push(PinLink::new(node, pin));
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_object(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.sub_category_object = Some(TypeRef::new(name, path));
        self
    }

    pub fn with_container(mut self, container: ContainerKind) -> Self {
        self.container = container;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_exec(&self) -> bool {
        self.category == "exec"
    }

    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == PinDirection::Output
    }
}

/// Identifies a graph inside a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphRef {
    /// Path of the owning program.
    pub program: String,
    pub name: String,
}

impl GraphRef {
    pub fn new(program: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for GraphRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.program, self.name)
    }
}

/// Target of a function call node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRef {
    pub name: String,

    #[serde(default)]
    pub owner_class: String,

    #[serde(default)]
    pub latent: bool,

    /// Program whose generated class owns the function, when it is script-defined.
    #[serde(default)]
    pub owner_program: Option<String>,
}

/// Flags of the property backing a variable node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableProperty {
    #[serde(default)]
    pub is_parameter: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRef {
    /// Display name of the variable.
    pub name: String,

    /// Referenced member name.
    #[serde(default)]
    pub member_name: String,

    /// Backing property, if it could be resolved.
    #[serde(default)]
    pub property: Option<VariableProperty>,

    /// Class the node's program generates, if known.
    #[serde(default)]
    pub blueprint_class: Option<String>,

    /// Reference is scoped to a local function frame.
    #[serde(default)]
    pub local_scope: bool,

    /// Enclosing member scope the variable resolves in, if any.
    #[serde(default)]
    pub member_scope: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    /// Event, custom function or bound delegate property name.
    pub name: String,

    /// Owning class (path for native events, name for bound events).
    #[serde(default)]
    pub owner_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRef {
    pub name: String,

    #[serde(default)]
    pub owner_class: String,

    #[serde(default)]
    pub owner_program: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateRef {
    /// Delegate property or bound function name.
    pub name: String,

    #[serde(default)]
    pub owner_class: String,

    /// Class a created delegate binds into.
    #[serde(default)]
    pub scope_class: Option<String>,

    #[serde(default)]
    pub scope_program: Option<String>,

    #[serde(default)]
    pub signature: Option<SignatureRef>,
}

/// Category-specific introspection the extractors read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDetail {
    #[default]
    None,
    Function(FunctionRef),
    Variable(VariableRef),
    Event(EventRef),
    Struct(TypeRef),
    Delegate(DelegateRef),
    Cast {
        target: String,
    },
    Macro {
        graph: GraphRef,
    },
    Composite {
        graph: GraphRef,
    },
    FunctionEntry {
        function_name: String,
    },
    Timeline {
        name: String,
    },
    Component {
        template_class: String,
    },
}

/// One node of the editor graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorNode {
    /// Stable per-session identity.
    pub guid: String,
    pub class: NodeClass,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub comment: String,

    #[serde(default)]
    pub pure: bool,

    #[serde(default)]
    pub pins: Vec<EditorPin>,

    #[serde(default)]
    pub detail: NodeDetail,

    /// Path of the owning program.
    #[serde(default)]
    pub program: String,

    /// Name of the owning graph.
    #[serde(default)]
    pub graph: String,
}

impl EditorNode {
    pub fn new(guid: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            class: NodeClass::new(class_name),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_ancestors<I, S>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = self.class.with_ancestors(ancestors);
        self
    }

    pub fn with_pin(mut self, pin: EditorPin) -> Self {
        self.pins.push(pin);
        self
    }

    pub fn with_detail(mut self, detail: NodeDetail) -> Self {
        self.detail = detail;
        self
    }

    pub fn pure(mut self) -> Self {
        self.pure = true;
        self
    }

    pub fn in_graph(mut self, program: impl Into<String>, graph: impl Into<String>) -> Self {
        self.program = program.into();
        self.graph = graph.into();
        self
    }

    pub fn is_a(&self, base: &str) -> bool {
        self.class.is_a(base)
    }

    pub fn find_pin(&self, id: &str) -> Option<&EditorPin> {
        self.pins.iter().find(|pin| pin.id == id)
    }

    pub fn first_input(&self) -> Option<&EditorPin> {
        self.pins.iter().find(|pin| pin.is_input())
    }

    pub fn first_output(&self) -> Option<&EditorPin> {
        self.pins.iter().find(|pin| pin.is_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_walks_ancestors_and_ignores_prefix() {
        let class = NodeClass::new("K2Node_CustomEvent")
            .with_ancestors(["K2Node_Event", "K2Node_EditablePinBase"]);
        assert_eq!(class.base_name(), "CustomEvent");
        assert!(class.is_a("CustomEvent"));
        assert!(class.is_a("Event"));
        assert!(class.is_a("K2Node_EditablePinBase"));
        assert!(!class.is_a("CallFunction"));
    }

    #[test]
    fn detail_is_internally_tagged() {
        let detail: NodeDetail = serde_json::from_str(
            r#"{
                "kind": "function",
                "name": "PrintString",
                "owner_class": "KismetSystemLibrary"
            }"#,
        )
        .unwrap();
        match detail {
            NodeDetail::Function(function) => {
                assert_eq!(function.name, "PrintString");
                assert!(!function.latent);
                assert_eq!(function.owner_program, None);
            }
            other => panic!("unexpected detail {:?}", other),
        }

        let detail: NodeDetail =
            serde_json::from_str(r#"{ "kind": "cast", "target": "Pawn" }"#).unwrap();
        assert_eq!(detail, NodeDetail::Cast { target: "Pawn".into() });
    }
}
