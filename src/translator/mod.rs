//! # Graph Translation
//!
//! Turns editor nodes into the IR. Each call runs a fresh
//! [`TranslationSession`] through these steps:
//!
//! 1. Derive blueprint metadata from the first node's program
//! 2. Classify and extract every node, assigning `N<n>` / `P<n>` IDs
//! 3. Trace execution and data wires through relay nodes
//! 4. Drain the subgraph queue up to the configured depth
//! 5. Prune flows that reference unknown nodes or pins

mod flows;
mod pins;
mod scope;
mod session;
mod subgraph;
mod types;

pub use session::TranslationSession;

use crate::classify::NodeClassifier;
use crate::config::TranslatorConfig;
use crate::editor::{EditorNode, GraphSource};
use crate::error::TranslateError;
use crate::ir::{Blueprint, GraphKind};

/// Translator with its classifier and settings fixed at construction.
///
/// Holds no per-call state; one instance can serve any number of
/// translations.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
    classifier: NodeClassifier,
}

impl Translator {
    pub fn new(config: TranslatorConfig, classifier: NodeClassifier) -> Self {
        Self { config, classifier }
    }

    pub fn with_config(config: TranslatorConfig) -> Self {
        Self::new(config, NodeClassifier::new())
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn classifier(&self) -> &NodeClassifier {
        &self.classifier
    }

    /// Translate a graph's nodes into a [`Blueprint`].
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes of the main graph; the first one decides program metadata
    /// * `source` - Lookup used to follow subgraphs and user-defined types
    ///
    /// # Returns
    ///
    /// * `Ok(Blueprint)` - The translated IR
    /// * `Err(TranslateError)` - If `nodes` is empty or nothing translatable was found
    pub fn translate(
        &self,
        nodes: &[EditorNode],
        source: &dyn GraphSource,
    ) -> Result<Blueprint, TranslateError> {
        TranslationSession::new(&self.config, &self.classifier, source).run(nodes)
    }
}

/// Decide the kind of a translated graph.
pub fn graph_kind(name: &str, composite: bool, has_function_entry: bool) -> GraphKind {
    if has_function_entry {
        return GraphKind::Function;
    }
    if composite {
        return GraphKind::Composite;
    }

    let name = name.to_lowercase();
    if name.contains("construction") {
        GraphKind::Construction
    } else if name.contains("macro") {
        GraphKind::Macro
    } else if name.contains("animation") {
        GraphKind::Animation
    } else {
        GraphKind::EventGraph
    }
}
