//! # IR Nodes
//!
//! The closed set of semantic node categories and the node record itself.

use super::pin::{is_false, Pin};
use serde::{Deserialize, Serialize};

/// Canonical semantic category of a node.
///
/// Serialized by variant name, so the JSON tag is e.g. `"CallFunction"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeCategory {
    // Function calls
    #[default]
    CallFunction,
    CallArrayFunction,
    CallDataTableFunction,
    CallDelegate,
    CallFunctionOnMember,
    CallMaterialParameterCollection,
    CallParentFunction,
    GenericToText,
    GetDataTableRow,
    FunctionEntry,
    FunctionResult,
    FunctionTerminator,

    // Variables
    VariableSet,
    VariableGet,
    VariableSetRef,
    Variable,
    LocalVariable,
    LocalVariableSet,
    LocalVariableGet,
    FunctionParameter,
    LocalFunctionVariable,
    MakeVariable,
    TemporaryVariable,
    SetVariableOnPersistentFrame,

    // Events
    Event,
    CustomEvent,
    ActorBoundEvent,
    ComponentBoundEvent,
    GeneratedBoundEvent,
    GetInputAxisKeyValue,
    GetInputAxisValue,
    GetInputVectorAxisValue,
    EventNodeInterface,
    InputAction,
    InputActionEvent,
    InputAxisEvent,
    InputAxisKeyEvent,
    InputKey,
    InputKeyEvent,
    InputTouch,
    InputTouchEvent,
    InputVectorAxisEvent,

    // Flow control
    ForEachLoop,
    ForEachElementInEnum,
    WhileLoop,
    ForLoop,
    Sequence,
    Branch,
    Select,
    Gate,
    MultiGate,
    DoOnceMultiInput,
    DoOnce,
    Knot,
    Tunnel,
    TunnelBoundary,

    // Switches
    Switch,
    SwitchInt,
    SwitchString,
    SwitchEnum,
    SwitchName,

    // Structs
    MakeStruct,
    BreakStruct,
    SetFieldsInStruct,
    StructMemberGet,
    StructMemberSet,
    StructOperation,

    // Containers
    MakeArray,
    MakeMap,
    MakeSet,
    MakeContainer,
    GetArrayItem,

    // Casts and conversions
    DynamicCast,
    ClassDynamicCast,
    CastByteToEnum,
    ConvertAsset,
    EditablePinBase,
    ExternalGraphInterface,

    // Delegates
    AddDelegate,
    CreateDelegate,
    ClearDelegate,
    RemoveDelegate,
    AssignDelegate,
    DelegateSet,

    // Async
    AsyncAction,
    BaseAsyncTask,

    // Components
    AddComponent,
    AddComponentByClass,
    AddPinInterface,

    // Objects and assets
    ConstructObjectFromClass,
    GenericCreateObject,
    Timeline,
    SpawnActor,
    SpawnActorFromClass,
    FormatText,
    GetClassDefaults,
    GetSubsystem,
    LoadAsset,
    Copy,
    Comment,

    // Math and logic
    BitmaskLiteral,
    EnumEquality,
    EnumInequality,
    EnumLiteral,
    GetEnumeratorName,
    GetEnumeratorNameAsString,
    GetNumEnumEntries,
    MathExpression,
    EaseFunction,
    CommutativeAssociativeBinaryOperator,
    PureAssignmentStatement,
    AssignmentStatement,

    // Special
    #[serde(rename = "Self")]
    SelfRef,
    Composite,
    DeadClass,
    Literal,
    Message,
    PromotableOperator,
    MacroInstance,
    BaseMCDelegate,
}

impl NodeCategory {
    /// Pass-through relay nodes that only route a wire.
    pub fn is_relay(&self) -> bool {
        matches!(self, NodeCategory::Knot)
    }

    /// Categories that are latent regardless of their backing function.
    pub fn is_always_latent(&self) -> bool {
        matches!(
            self,
            NodeCategory::AsyncAction | NodeCategory::BaseAsyncTask | NodeCategory::Timeline
        )
    }
}

/// One node of an IR graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub category: NodeCategory,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub member_parent: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub member_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub pure: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub latent: bool,

    #[serde(default)]
    pub input_pins: Vec<Pin>,

    #[serde(default)]
    pub output_pins: Vec<Pin>,
}

impl Node {
    pub fn new(id: impl Into<String>, category: NodeCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Inputs followed by outputs.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.input_pins.iter().chain(self.output_pins.iter())
    }

    pub fn find_pin(&self, id: &str) -> Option<&Pin> {
        self.pins().find(|pin| pin.id == id)
    }

    pub fn has_exec_input(&self) -> bool {
        self.input_pins.iter().any(Pin::is_exec)
    }

    pub fn has_exec_output(&self) -> bool {
        self.output_pins.iter().any(Pin::is_exec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::pin::PinType;

    #[test]
    fn category_tags_use_variant_names() {
        assert_eq!(
            serde_json::to_value(NodeCategory::CallMaterialParameterCollection).unwrap(),
            "CallMaterialParameterCollection"
        );
        assert_eq!(serde_json::to_value(NodeCategory::SelfRef).unwrap(), "Self");
        let parsed: NodeCategory = serde_json::from_str("\"Self\"").unwrap();
        assert_eq!(parsed, NodeCategory::SelfRef);
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut node = Node::new("N1", NodeCategory::Branch, "Branch");
        node.input_pins.push(Pin::new("P1", "Execute", PinType::Exec));
        let json = serde_json::to_value(&node).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("pure"));
        assert!(!object.contains_key("member_parent"));
        assert_eq!(object["type"], "Branch");
        assert!(node.has_exec_input());
        assert!(!node.has_exec_output());
    }
}
