//! State owned by a single translation.

use super::flows::trace_flows;
use super::graph_kind;
use super::pins::translate_pins;
use super::scope::GraphScope;
use super::subgraph::WorkItem;
use crate::classify::NodeClassifier;
use crate::config::TranslatorConfig;
use crate::editor::{EditorNode, GraphRef, GraphSource};
use crate::error::TranslateError;
use crate::extract::{self, asset_name, clean_class_name, ExtractContext};
use crate::ir::{Blueprint, Graph, Metadata, Node, NodeCategory};
use crate::validate;
use std::collections::{HashSet, VecDeque};

/// One translation pass: the IR under construction, the subgraph work
/// queue and the sets of graphs and types already taken.
///
/// Built fresh for every call to [`super::Translator::translate`] and
/// consumed by [`TranslationSession::run`].
pub struct TranslationSession<'a> {
    pub(crate) config: &'a TranslatorConfig,
    pub(crate) classifier: &'a NodeClassifier,
    pub(crate) source: &'a dyn GraphSource,
    pub(crate) blueprint: Blueprint,
    pub(crate) queue: VecDeque<WorkItem>,
    pub(crate) seen: HashSet<GraphRef>,
    pub(crate) struct_paths: HashSet<String>,
    pub(crate) enum_paths: HashSet<String>,
}

impl<'a> TranslationSession<'a> {
    pub fn new(
        config: &'a TranslatorConfig,
        classifier: &'a NodeClassifier,
        source: &'a dyn GraphSource,
    ) -> Self {
        Self {
            config,
            classifier,
            source,
            blueprint: Blueprint::default(),
            queue: VecDeque::new(),
            seen: HashSet::new(),
            struct_paths: HashSet::new(),
            enum_paths: HashSet::new(),
        }
    }

    /// Translate `nodes` as the main graph, then every reachable subgraph.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes of the main graph, in editor order
    ///
    /// # Returns
    ///
    /// * `Ok(Blueprint)` - The IR, with dangling flows already pruned
    /// * `Err(TranslateError)` - If `nodes` is empty or no graph ends up with nodes
    pub fn run(mut self, nodes: &[EditorNode]) -> Result<Blueprint, TranslateError> {
        let first = match nodes.first() {
            Some(first) => first,
            None => {
                tracing::error!("[TRANSLATE] No nodes provided to translate");
                return Err(TranslateError::EmptyInput);
            }
        };

        tracing::info!("[TRANSLATE] Translating {} nodes", nodes.len());
        self.blueprint.metadata = self.metadata_for(&first.program);

        let main_ref = GraphRef::new(first.program.clone(), first.graph.clone());
        let composite = self
            .source
            .graph(&main_ref)
            .map(|graph| graph.is_composite())
            .unwrap_or(false);
        let name = if first.graph.is_empty() {
            "EventGraph".to_string()
        } else {
            first.graph.clone()
        };
        self.seen.insert(main_ref);

        let main = self.translate_graph(&name, composite, nodes, 0);
        if main.nodes.is_empty() {
            tracing::warn!("[TRANSLATE] Main graph '{}' has no translatable nodes", main.name);
        } else {
            self.blueprint.graphs.push(main);
        }

        self.drain_queue();

        for graph in &mut self.blueprint.graphs {
            let pruned = validate::prune_dangling_flows(graph);
            if !pruned.is_empty() {
                tracing::debug!(
                    "[TRANSLATE] Pruned {} flows from graph '{}'",
                    pruned.len(),
                    graph.name
                );
            }
        }

        if !self.blueprint.has_nodes() {
            tracing::error!("[TRANSLATE] No graph contains any nodes");
            return Err(TranslateError::NoNodes);
        }

        tracing::info!(
            "[TRANSLATE] Translation complete: {} graphs, {} nodes, {} structs, {} enums",
            self.blueprint.graphs.len(),
            self.blueprint.node_count(),
            self.blueprint.structs.len(),
            self.blueprint.enums.len()
        );

        Ok(self.blueprint)
    }

    fn metadata_for(&self, program_path: &str) -> Metadata {
        match self.source.program(program_path) {
            Some(program) => Metadata {
                name: program.name.clone(),
                blueprint_type: program.kind,
                blueprint_class: clean_class_name(&program.generated_class),
            },
            None => {
                let name = asset_name(program_path).to_string();
                tracing::warn!(
                    "[TRANSLATE] Program '{}' not found, deriving metadata from its path",
                    program_path
                );
                Metadata {
                    blueprint_class: name.clone(),
                    name,
                    ..Default::default()
                }
            }
        }
    }

    /// Translate one graph's nodes, queueing any subgraphs they lead into.
    ///
    /// All node and pin IDs are assigned before any wire is traced.
    pub(crate) fn translate_graph(
        &mut self,
        name: &str,
        composite: bool,
        nodes: &[EditorNode],
        depth: u8,
    ) -> Graph {
        let cx = ExtractContext::new(self.source);
        let mut scope = GraphScope::new(nodes);
        let mut translated = Vec::with_capacity(nodes.len());
        let mut has_entry = false;

        for node in nodes {
            let category = self.classifier.classify(node);

            if category.is_relay() {
                scope.mark_relay(&node.guid);
                continue;
            }

            let id = match scope.assign_node_id(&node.guid) {
                Some(id) => id,
                None => {
                    tracing::debug!("[TRANSLATE] Node {} listed twice, skipping", node.guid);
                    continue;
                }
            };

            has_entry |= category == NodeCategory::FunctionEntry || node.is_a("FunctionEntry");

            let extraction = extract::extract(node, category, &cx);
            for link in &extraction.subgraphs {
                self.enqueue_subgraph(link, depth);
            }
            self.collect_user_types(node, category);

            let (input_pins, output_pins) = translate_pins(node, category, &mut scope);
            tracing::debug!(
                "[TRANSLATE] {} = {:?} '{}' ({} in, {} out)",
                id,
                category,
                extraction.name,
                input_pins.len(),
                output_pins.len()
            );

            translated.push(Node {
                id,
                category,
                name: extraction.name,
                member_parent: extraction.member_parent,
                member_name: extraction.member_name,
                comment: extraction.comment,
                pure: extraction.pure,
                latent: extraction.latent,
                input_pins,
                output_pins,
            });
        }

        let flows = trace_flows(nodes, &scope);
        let kind = graph_kind(name, composite, has_entry);

        tracing::info!(
            "[TRANSLATE] Graph '{}' ({:?}): {} nodes, {} exec flows, {} data flows",
            name,
            kind,
            scope.node_count(),
            flows.execution.len(),
            flows.data.len()
        );

        Graph {
            name: name.to_string(),
            graph_type: kind,
            nodes: translated,
            flows,
        }
    }
}
