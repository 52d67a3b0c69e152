//! Bounded discovery of nested graphs.
//!
//! Subgraphs found while translating a graph are queued with the depth of
//! the graph that found them and drained first-in first-out once the main
//! graph is done.

use super::session::TranslationSession;
use crate::editor::GraphRef;
use crate::extract::{SubgraphLink, SubgraphOrigin};
use crate::validate;

/// A queued subgraph and the depth of the graph that discovered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorkItem {
    pub graph: GraphRef,
    pub parent_depth: u8,
}

impl TranslationSession<'_> {
    /// Queue `link` for translation if it is user-authored, unseen and within the depth limit.
    pub(crate) fn enqueue_subgraph(&mut self, link: &SubgraphLink, depth: u8) {
        if !self.is_user_authored(link) {
            tracing::debug!("[TRANSLATE] Not expanding built-in graph {}", link.graph);
            return;
        }

        if self.seen.contains(&link.graph) {
            tracing::debug!("[TRANSLATE] Graph {} already processed or queued", link.graph);
            return;
        }

        let next_depth = depth.saturating_add(1);
        if next_depth > self.config.max_depth {
            tracing::warn!(
                "[TRANSLATE] Skipping subgraph {}: depth {} exceeds max depth {}",
                link.graph,
                next_depth,
                self.config.max_depth
            );
            return;
        }

        tracing::debug!(
            "[TRANSLATE] Queued {:?} subgraph {} at depth {}",
            link.origin,
            link.graph,
            next_depth
        );
        self.seen.insert(link.graph.clone());
        self.queue.push_back(WorkItem {
            graph: link.graph.clone(),
            parent_depth: depth,
        });
    }

    /// Translate queued subgraphs until the queue is empty.
    pub(crate) fn drain_queue(&mut self) {
        let source = self.source;

        while let Some(item) = self.queue.pop_front() {
            let depth = item.parent_depth.saturating_add(1);
            let editor_graph = match source.graph(&item.graph) {
                Some(graph) => graph,
                None => {
                    tracing::warn!("[TRANSLATE] Subgraph {} could not be resolved", item.graph);
                    continue;
                }
            };

            tracing::info!(
                "[TRANSLATE] Processing subgraph '{}' at depth {}",
                editor_graph.name,
                depth
            );
            let graph = self.translate_graph(
                &editor_graph.name,
                editor_graph.is_composite(),
                &editor_graph.nodes,
                depth,
            );

            if graph.nodes.is_empty() {
                tracing::debug!("[TRANSLATE] Subgraph '{}' has no nodes, dropping", graph.name);
                continue;
            }

            if let Err(e) = validate::validate_flow_references(&graph) {
                tracing::warn!("[TRANSLATE] Subgraph '{}' has flow problems: {}", graph.name, e);
            }

            self.blueprint.graphs.push(graph);
        }
    }

    fn is_user_authored(&self, link: &SubgraphLink) -> bool {
        match link.origin {
            SubgraphOrigin::Composite { math_expression } => !math_expression,
            _ => self.config.is_user_path(&link.graph.program),
        }
    }
}
