//! # Error Types
//!
//! One error enum per fallible stage, plus the crate-level [`Error`] used by
//! the pipeline entry points in [`crate::compiler`].

use thiserror::Error;

/// Failures that abort a translation outright.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no nodes provided to translate")]
    EmptyInput,

    #[error("translation produced no graph containing nodes")]
    NoNodes,
}

/// Hard structural violations found by the validator.
///
/// Soft anomalies are reported through [`crate::validate::ValidationReport`]
/// instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid or missing version '{found}' (expected '{expected}')")]
    Version { found: String, expected: String },

    #[error("missing blueprint name")]
    MissingName,

    #[error("missing blueprint class")]
    MissingClass,

    #[error("no graphs found")]
    NoGraphs,

    #[error("no nodes found in any graph")]
    NoNodes,

    #[error("graph at index {index} has an empty name")]
    EmptyGraphName { index: usize },

    #[error("no nodes in graph '{graph}'")]
    EmptyGraph { graph: String },

    #[error("node in graph '{graph}' has an empty id")]
    EmptyNodeId { graph: String },

    #[error("node {node} in graph '{graph}' has an empty name")]
    EmptyNodeName { graph: String, node: String },

    #[error("duplicate node id {node} in graph '{graph}'")]
    DuplicateNodeId { graph: String, node: String },

    #[error("node {node} in graph '{graph}' cannot be both pure and latent")]
    PureAndLatent { graph: String, node: String },

    #[error("pure node {node} in graph '{graph}' has both exec input and exec output pins")]
    PureWithExecPins { graph: String, node: String },

    #[error("duplicate pin id {pin} on node {node} in graph '{graph}'")]
    DuplicatePinId {
        graph: String,
        node: String,
        pin: String,
    },

    #[error("execution flow '{chain}' in graph '{graph}' needs at least 2 nodes")]
    ShortExecution { graph: String, chain: String },

    #[error("execution flow '{chain}' references non-existent node {node} in graph '{graph}'")]
    DanglingExecution {
        graph: String,
        chain: String,
        node: String,
    },

    #[error(
        "data flow {source_ref} -> {target_ref} in graph '{graph}' references unknown pin {missing}"
    )]
    DanglingData {
        graph: String,
        source_ref: String,
        target_ref: String,
        missing: String,
    },

    #[error("struct at index {index} has no name")]
    UnnamedStruct { index: usize },

    #[error("member at index {index} of struct '{name}' has no name")]
    UnnamedStructMember { name: String, index: usize },

    #[error("member '{member}' of struct '{name}' requires a type name")]
    MissingMemberTypeName { name: String, member: String },

    #[error("enum at index {index} has no name")]
    UnnamedEnum { index: usize },

    #[error("value at index {index} of enum '{name}' has no name")]
    UnnamedEnumValue { name: String, index: usize },
}

/// Failures converting the IR to or from text.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to serialize blueprint: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to parse blueprint text: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Failures loading a [`crate::config::TranslatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Crate-level error returned by the pipeline entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("graph '{graph}' not found in program '{program}'")]
    GraphNotFound { program: String, graph: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
