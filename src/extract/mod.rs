//! # Node Property Extraction
//!
//! Per-category extractors that read the semantic attributes of a node
//! (owning type, member name, purity, latency, display name) and report any
//! subgraph the node leads into.
//!
//! Dispatch from [`NodeCategory`] to extractor is a closed `match` in
//! [`extractor_for`], so adding a category without deciding how it is
//! extracted fails to compile.

mod cast;
mod container;
mod delegate;
mod event;
mod flow_control;
mod function;
mod generic;
mod structs;
mod variable;

pub use cast::CastExtractor;
pub use container::ContainerExtractor;
pub use delegate::DelegateExtractor;
pub use event::EventExtractor;
pub use flow_control::FlowControlExtractor;
pub use function::{FunctionCallExtractor, FunctionEntryExtractor};
pub use generic::GenericExtractor;
pub use structs::StructExtractor;
pub use variable::VariableExtractor;

use crate::editor::{EditorNode, GraphRef, GraphSource, NodeDetail};
use crate::ir::NodeCategory;

/// Attributes pulled from one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub name: String,
    pub member_parent: String,
    pub member_name: String,
    pub comment: String,
    pub pure: bool,
    pub latent: bool,
    pub subgraphs: Vec<SubgraphLink>,
}

/// A nested graph a node leads into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgraphLink {
    pub graph: GraphRef,
    pub origin: SubgraphOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubgraphOrigin {
    /// Bound graph of a collapsed node.
    Composite { math_expression: bool },
    Macro,
    Function,
    Delegate,
}

/// Read-only lookups available while extracting.
pub struct ExtractContext<'a> {
    pub source: &'a dyn GraphSource,
}

impl<'a> ExtractContext<'a> {
    pub fn new(source: &'a dyn GraphSource) -> Self {
        Self { source }
    }

    /// Display name of the program at `path`, falling back to the asset name in the path.
    pub fn program_name(&self, path: &str) -> String {
        if let Some(program) = self.source.program(path) {
            return program.name.clone();
        }
        asset_name(path).to_string()
    }
}

/// Per-category extraction.
pub trait NodeExtractor {
    /// Fill category-specific fields of `out`. Common fields are already set.
    fn extract(
        &self,
        node: &EditorNode,
        category: NodeCategory,
        cx: &ExtractContext<'_>,
        out: &mut Extraction,
    );
}

/// Extract every attribute of `node` for its classified `category`.
pub fn extract(node: &EditorNode, category: NodeCategory, cx: &ExtractContext<'_>) -> Extraction {
    let mut out = Extraction {
        name: node.title.clone(),
        comment: node.comment.clone(),
        pure: node.pure,
        ..Default::default()
    };

    extractor_for(category).extract(node, category, cx, &mut out);

    if category.is_always_latent() {
        out.latent = true;
    }
    if let NodeDetail::Function(function) = &node.detail {
        out.latent |= function.latent;
    }

    if out.name.is_empty() {
        out.name = if out.member_name.is_empty() {
            node.class.base_name().to_string()
        } else {
            out.member_name.clone()
        };
    }

    tracing::trace!(
        "[EXTRACT] {} ({:?}) parent='{}' member='{}' pure={} latent={}",
        out.name,
        category,
        out.member_parent,
        out.member_name,
        out.pure,
        out.latent
    );

    out
}

/// The extractor responsible for `category`.
pub fn extractor_for(category: NodeCategory) -> &'static dyn NodeExtractor {
    use NodeCategory::*;

    match category {
        CallFunction
        | CallArrayFunction
        | CallDataTableFunction
        | CallFunctionOnMember
        | CallMaterialParameterCollection
        | CallParentFunction
        | GenericToText
        | GetDataTableRow
        | GetInputAxisKeyValue
        | GetInputAxisValue
        | GetInputVectorAxisValue
        | CommutativeAssociativeBinaryOperator
        | PromotableOperator
        | Message => &FunctionCallExtractor,

        FunctionEntry | FunctionResult | FunctionTerminator | MacroInstance => {
            &FunctionEntryExtractor
        }

        VariableSet
        | VariableGet
        | VariableSetRef
        | Variable
        | LocalVariable
        | LocalVariableSet
        | LocalVariableGet
        | FunctionParameter
        | LocalFunctionVariable
        | MakeVariable
        | TemporaryVariable
        | SetVariableOnPersistentFrame => &VariableExtractor,

        Event
        | CustomEvent
        | ActorBoundEvent
        | ComponentBoundEvent
        | GeneratedBoundEvent
        | EventNodeInterface
        | InputAction
        | InputActionEvent
        | InputAxisEvent
        | InputAxisKeyEvent
        | InputKey
        | InputKeyEvent
        | InputTouch
        | InputTouchEvent
        | InputVectorAxisEvent => &EventExtractor,

        ForEachLoop
        | ForEachElementInEnum
        | WhileLoop
        | ForLoop
        | Sequence
        | Branch
        | Select
        | Gate
        | MultiGate
        | DoOnceMultiInput
        | DoOnce
        | Switch
        | SwitchInt
        | SwitchString
        | SwitchEnum
        | SwitchName => &FlowControlExtractor,

        MakeStruct | BreakStruct | SetFieldsInStruct | StructMemberGet | StructMemberSet
        | StructOperation => &StructExtractor,

        MakeArray | MakeMap | MakeSet | MakeContainer | GetArrayItem => &ContainerExtractor,

        DynamicCast | ClassDynamicCast | CastByteToEnum => &CastExtractor,

        CallDelegate | AddDelegate | CreateDelegate | ClearDelegate | RemoveDelegate
        | AssignDelegate | DelegateSet | BaseMCDelegate => &DelegateExtractor,

        Knot
        | Tunnel
        | TunnelBoundary
        | ConvertAsset
        | EditablePinBase
        | ExternalGraphInterface
        | AsyncAction
        | BaseAsyncTask
        | AddComponent
        | AddComponentByClass
        | AddPinInterface
        | ConstructObjectFromClass
        | GenericCreateObject
        | Timeline
        | SpawnActor
        | SpawnActorFromClass
        | FormatText
        | GetClassDefaults
        | GetSubsystem
        | LoadAsset
        | Copy
        | Comment
        | BitmaskLiteral
        | EnumEquality
        | EnumInequality
        | EnumLiteral
        | GetEnumeratorName
        | GetEnumeratorNameAsString
        | GetNumEnumEntries
        | MathExpression
        | EaseFunction
        | PureAssignmentStatement
        | AssignmentStatement
        | SelfRef
        | Composite
        | DeadClass
        | Literal => &GenericExtractor,
    }
}

/// Strip the `SKEL_` prefix and `_C` suffix the editor puts on generated class names.
pub fn clean_class_name(name: &str) -> String {
    let name = name.strip_prefix("SKEL_").unwrap_or(name);
    let name = name.strip_suffix("_C").unwrap_or(name);
    name.to_string()
}

/// `BP_Door` from `/Game/Blueprints/BP_Door.BP_Door`.
pub(crate) fn asset_name(path: &str) -> &str {
    let tail = path.rsplit('/').next().unwrap_or(path);
    tail.split('.').next().unwrap_or(tail)
}

/// Log a category-specific attribute that could not be resolved.
pub(crate) fn log_gap(node: &EditorNode, category: NodeCategory, what: &str) {
    tracing::debug!(
        "[EXTRACT] {:?} node '{}' ({}) has no {}",
        category,
        node.title,
        node.guid,
        what
    );
}
