//! Static lookup data for the classifier.

use crate::ir::NodeCategory;

/// Class base names (without the `K2Node_` prefix) with a direct category.
pub(crate) const NAME_TABLE: &[(&str, NodeCategory)] = &[
    // Function calls
    ("CallFunction", NodeCategory::CallFunction),
    ("CallArrayFunction", NodeCategory::CallArrayFunction),
    ("CallDataTableFunction", NodeCategory::CallDataTableFunction),
    ("CallDelegate", NodeCategory::CallDelegate),
    ("CallFunctionOnMember", NodeCategory::CallFunctionOnMember),
    ("CallMaterialParameterCollectionFunction", NodeCategory::CallMaterialParameterCollection),
    ("CallParentFunction", NodeCategory::CallParentFunction),
    ("FunctionEntry", NodeCategory::FunctionEntry),
    ("FunctionResult", NodeCategory::FunctionResult),
    ("FunctionTerminator", NodeCategory::FunctionTerminator),
    // Variables
    ("Variable", NodeCategory::Variable),
    ("VariableGet", NodeCategory::VariableGet),
    ("VariableSet", NodeCategory::VariableSet),
    ("VariableSetRef", NodeCategory::VariableSetRef),
    ("LocalVariable", NodeCategory::LocalVariable),
    ("MakeVariable", NodeCategory::MakeVariable),
    ("TemporaryVariable", NodeCategory::TemporaryVariable),
    ("SetVariableOnPersistentFrame", NodeCategory::SetVariableOnPersistentFrame),
    // Events
    ("Event", NodeCategory::Event),
    ("CustomEvent", NodeCategory::CustomEvent),
    ("ActorBoundEvent", NodeCategory::ActorBoundEvent),
    ("ComponentBoundEvent", NodeCategory::ComponentBoundEvent),
    ("InputAction", NodeCategory::InputAction),
    ("InputActionEvent", NodeCategory::InputActionEvent),
    ("InputAxisEvent", NodeCategory::InputAxisEvent),
    ("InputAxisKeyEvent", NodeCategory::InputAxisKeyEvent),
    ("InputKey", NodeCategory::InputKey),
    ("InputKeyEvent", NodeCategory::InputKeyEvent),
    ("InputTouch", NodeCategory::InputTouch),
    ("InputTouchEvent", NodeCategory::InputTouchEvent),
    ("InputVectorAxisEvent", NodeCategory::InputVectorAxisEvent),
    // Flow control
    ("ExecutionSequence", NodeCategory::Sequence),
    ("IfThenElse", NodeCategory::Branch),
    ("DoOnceMultiInput", NodeCategory::DoOnceMultiInput),
    ("MultiGate", NodeCategory::MultiGate),
    ("Knot", NodeCategory::Knot),
    ("Tunnel", NodeCategory::Tunnel),
    ("TunnelBoundary", NodeCategory::TunnelBoundary),
    // Switches
    ("Switch", NodeCategory::Switch),
    ("SwitchInteger", NodeCategory::SwitchInt),
    ("SwitchString", NodeCategory::SwitchString),
    ("SwitchEnum", NodeCategory::SwitchEnum),
    ("SwitchName", NodeCategory::SwitchName),
    // Structs
    ("MakeStruct", NodeCategory::MakeStruct),
    ("BreakStruct", NodeCategory::BreakStruct),
    ("SetFieldsInStruct", NodeCategory::SetFieldsInStruct),
    ("StructMemberGet", NodeCategory::StructMemberGet),
    ("StructMemberSet", NodeCategory::StructMemberSet),
    ("StructOperation", NodeCategory::StructOperation),
    // Containers
    ("MakeArray", NodeCategory::MakeArray),
    ("MakeMap", NodeCategory::MakeMap),
    ("MakeSet", NodeCategory::MakeSet),
    ("MakeContainer", NodeCategory::MakeContainer),
    ("GetArrayItem", NodeCategory::GetArrayItem),
    // Casts
    ("DynamicCast", NodeCategory::DynamicCast),
    ("ClassDynamicCast", NodeCategory::ClassDynamicCast),
    ("CastByteToEnum", NodeCategory::CastByteToEnum),
    ("ConvertAsset", NodeCategory::ConvertAsset),
    // Delegates
    ("AddDelegate", NodeCategory::AddDelegate),
    ("CreateDelegate", NodeCategory::CreateDelegate),
    ("ClearDelegate", NodeCategory::ClearDelegate),
    ("RemoveDelegate", NodeCategory::RemoveDelegate),
    ("AssignDelegate", NodeCategory::AssignDelegate),
    ("DelegateSet", NodeCategory::DelegateSet),
    // Async
    ("AsyncAction", NodeCategory::AsyncAction),
    ("BaseAsyncTask", NodeCategory::BaseAsyncTask),
    // Components
    ("AddComponent", NodeCategory::AddComponent),
    ("AddComponentByClass", NodeCategory::AddComponentByClass),
    ("AddPinInterface", NodeCategory::AddPinInterface),
    // Objects and assets
    ("ConstructObjectFromClass", NodeCategory::ConstructObjectFromClass),
    ("GenericCreateObject", NodeCategory::GenericCreateObject),
    ("Timeline", NodeCategory::Timeline),
    ("SpawnActor", NodeCategory::SpawnActor),
    ("SpawnActorFromClass", NodeCategory::SpawnActorFromClass),
    ("FormatText", NodeCategory::FormatText),
    ("GetClassDefaults", NodeCategory::GetClassDefaults),
    ("GetSubsystem", NodeCategory::GetSubsystem),
    ("LoadAsset", NodeCategory::LoadAsset),
    ("Copy", NodeCategory::Copy),
    // Math and logic
    ("BitmaskLiteral", NodeCategory::BitmaskLiteral),
    ("EnumEquality", NodeCategory::EnumEquality),
    ("EnumInequality", NodeCategory::EnumInequality),
    ("EnumLiteral", NodeCategory::EnumLiteral),
    ("GetEnumeratorName", NodeCategory::GetEnumeratorName),
    ("GetEnumeratorNameAsString", NodeCategory::GetEnumeratorNameAsString),
    ("GetNumEnumEntries", NodeCategory::GetNumEnumEntries),
    ("MathExpression", NodeCategory::MathExpression),
    ("EaseFunction", NodeCategory::EaseFunction),
    ("CommutativeAssociativeBinaryOperator", NodeCategory::CommutativeAssociativeBinaryOperator),
    ("PureAssignmentStatement", NodeCategory::PureAssignmentStatement),
    ("AssignmentStatement", NodeCategory::AssignmentStatement),
    // Special
    ("Self", NodeCategory::SelfRef),
    ("Composite", NodeCategory::Composite),
    ("DeadClass", NodeCategory::DeadClass),
    ("Literal", NodeCategory::Literal),
    ("Message", NodeCategory::Message),
    ("PromotableOperator", NodeCategory::PromotableOperator),
    ("MacroInstance", NodeCategory::MacroInstance),
    ("BaseMCDelegate", NodeCategory::BaseMCDelegate),
];

/// Base class whose hierarchy match defers to the variable sub-algorithm.
pub(crate) const VARIABLE_BASE: &str = "Variable";

/// Ordered base classes tested by the hierarchy walk. First match wins.
pub(crate) const HIERARCHY: &[(&str, NodeCategory)] = &[
    ("CallFunction", NodeCategory::CallFunction),
    ("Event", NodeCategory::Event),
    ("MakeStruct", NodeCategory::MakeStruct),
    (VARIABLE_BASE, NodeCategory::Variable),
    ("VariableSetRef", NodeCategory::VariableSetRef),
    ("ActorBoundEvent", NodeCategory::ActorBoundEvent),
    ("AddComponent", NodeCategory::AddComponent),
    ("AddComponentByClass", NodeCategory::AddComponentByClass),
    ("AddDelegate", NodeCategory::AddDelegate),
    ("AddPinInterface", NodeCategory::AddPinInterface),
    ("AssignDelegate", NodeCategory::AssignDelegate),
    ("AssignmentStatement", NodeCategory::AssignmentStatement),
    ("AsyncAction", NodeCategory::AsyncAction),
    ("BaseAsyncTask", NodeCategory::BaseAsyncTask),
    ("BaseMCDelegate", NodeCategory::BaseMCDelegate),
    ("BitmaskLiteral", NodeCategory::BitmaskLiteral),
    ("BreakStruct", NodeCategory::BreakStruct),
    ("CallArrayFunction", NodeCategory::CallArrayFunction),
    ("CallDataTableFunction", NodeCategory::CallDataTableFunction),
    ("CallDelegate", NodeCategory::CallDelegate),
    ("CallFunctionOnMember", NodeCategory::CallFunctionOnMember),
    ("CallMaterialParameterCollectionFunction", NodeCategory::CallMaterialParameterCollection),
    ("CallParentFunction", NodeCategory::CallParentFunction),
    ("CastByteToEnum", NodeCategory::CastByteToEnum),
    ("ClassDynamicCast", NodeCategory::ClassDynamicCast),
    ("ClearDelegate", NodeCategory::ClearDelegate),
    ("CommutativeAssociativeBinaryOperator", NodeCategory::CommutativeAssociativeBinaryOperator),
    ("ComponentBoundEvent", NodeCategory::ComponentBoundEvent),
    ("Composite", NodeCategory::Composite),
    ("ConstructObjectFromClass", NodeCategory::ConstructObjectFromClass),
    ("ConvertAsset", NodeCategory::ConvertAsset),
    ("Copy", NodeCategory::Copy),
    ("CreateDelegate", NodeCategory::CreateDelegate),
    ("CustomEvent", NodeCategory::CustomEvent),
    ("DeadClass", NodeCategory::DeadClass),
    ("DelegateSet", NodeCategory::DelegateSet),
    ("DoOnceMultiInput", NodeCategory::DoOnceMultiInput),
    ("DynamicCast", NodeCategory::DynamicCast),
    ("EaseFunction", NodeCategory::EaseFunction),
    ("EditablePinBase", NodeCategory::EditablePinBase),
    ("EnumEquality", NodeCategory::EnumEquality),
    ("EnumInequality", NodeCategory::EnumInequality),
    ("EnumLiteral", NodeCategory::EnumLiteral),
    ("EventNodeInterface", NodeCategory::EventNodeInterface),
    ("ExecutionSequence", NodeCategory::Sequence),
    ("ExternalGraphInterface", NodeCategory::ExternalGraphInterface),
    ("ForEachElementInEnum", NodeCategory::ForEachElementInEnum),
    ("FormatText", NodeCategory::FormatText),
    ("FunctionEntry", NodeCategory::FunctionEntry),
    ("FunctionResult", NodeCategory::FunctionResult),
    ("FunctionTerminator", NodeCategory::FunctionTerminator),
    ("GenericCreateObject", NodeCategory::GenericCreateObject),
    ("GetArrayItem", NodeCategory::GetArrayItem),
    ("GetClassDefaults", NodeCategory::GetClassDefaults),
    ("GetDataTableRow", NodeCategory::GetDataTableRow),
    ("GetEnumeratorName", NodeCategory::GetEnumeratorName),
    ("GetEnumeratorNameAsString", NodeCategory::GetEnumeratorNameAsString),
    ("GetInputAxisKeyValue", NodeCategory::GetInputAxisKeyValue),
    ("GetInputAxisValue", NodeCategory::GetInputAxisValue),
    ("GetInputVectorAxisValue", NodeCategory::GetInputVectorAxisValue),
    ("GetNumEnumEntries", NodeCategory::GetNumEnumEntries),
    ("GetSubsystem", NodeCategory::GetSubsystem),
    ("IfThenElse", NodeCategory::Branch),
    ("InputAction", NodeCategory::InputAction),
    ("InputActionEvent", NodeCategory::InputActionEvent),
    ("InputAxisEvent", NodeCategory::InputAxisEvent),
    ("InputAxisKeyEvent", NodeCategory::InputAxisKeyEvent),
    ("InputKey", NodeCategory::InputKey),
    ("InputKeyEvent", NodeCategory::InputKeyEvent),
    ("InputTouch", NodeCategory::InputTouch),
    ("InputTouchEvent", NodeCategory::InputTouchEvent),
    ("InputVectorAxisEvent", NodeCategory::InputVectorAxisEvent),
    ("Knot", NodeCategory::Knot),
    ("Literal", NodeCategory::Literal),
    ("LoadAsset", NodeCategory::LoadAsset),
    ("MacroInstance", NodeCategory::MacroInstance),
    ("MakeArray", NodeCategory::MakeArray),
    ("MakeContainer", NodeCategory::MakeContainer),
    ("MakeMap", NodeCategory::MakeMap),
    ("MakeSet", NodeCategory::MakeSet),
    ("MakeVariable", NodeCategory::MakeVariable),
    ("MathExpression", NodeCategory::MathExpression),
    ("Message", NodeCategory::Message),
    ("MultiGate", NodeCategory::MultiGate),
    ("PromotableOperator", NodeCategory::PromotableOperator),
    ("PureAssignmentStatement", NodeCategory::PureAssignmentStatement),
    ("RemoveDelegate", NodeCategory::RemoveDelegate),
    ("Select", NodeCategory::Select),
    ("Self", NodeCategory::SelfRef),
    ("SetFieldsInStruct", NodeCategory::SetFieldsInStruct),
    ("SetVariableOnPersistentFrame", NodeCategory::SetVariableOnPersistentFrame),
    ("SpawnActor", NodeCategory::SpawnActor),
    ("SpawnActorFromClass", NodeCategory::SpawnActorFromClass),
    ("StructMemberGet", NodeCategory::StructMemberGet),
    ("StructMemberSet", NodeCategory::StructMemberSet),
    ("StructOperation", NodeCategory::StructOperation),
    ("Switch", NodeCategory::Switch),
    ("SwitchEnum", NodeCategory::SwitchEnum),
    ("SwitchInteger", NodeCategory::SwitchInt),
    ("SwitchName", NodeCategory::SwitchName),
    ("SwitchString", NodeCategory::SwitchString),
    ("TemporaryVariable", NodeCategory::TemporaryVariable),
    ("Timeline", NodeCategory::Timeline),
    ("Tunnel", NodeCategory::Tunnel),
    ("TunnelBoundary", NodeCategory::TunnelBoundary),
];
