//! Execution and data flow tracing.
//!
//! Wires are followed through relay (knot) nodes until they reach a real
//! node, so relays never appear in the recorded flows.

use super::scope::GraphScope;
use crate::editor::{EditorNode, EditorPin, PinLink};
use crate::ir::{Flows, PinRef};
use std::collections::HashSet;

/// Trace every wire leaving the translated nodes of `nodes`.
///
/// Must run after all node and pin IDs in `scope` are assigned.
pub(crate) fn trace_flows<'n>(nodes: &'n [EditorNode], scope: &GraphScope<'n>) -> Flows {
    let mut flows = Flows::default();

    for node in nodes {
        let source_id = match scope.node_id(&node.guid) {
            Some(id) => id,
            None => continue,
        };

        for pin in node.pins.iter().filter(|pin| !pin.hidden) {
            for link in &pin.linked_to {
                if pin.is_exec() {
                    if pin.is_output() {
                        trace_execution(scope, source_id, link, &mut flows);
                    }
                } else {
                    trace_data(scope, node, pin, link, &mut flows);
                }
            }
        }
    }

    flows
}

fn trace_execution(scope: &GraphScope<'_>, source_id: &str, link: &PinLink, flows: &mut Flows) {
    let target = match resolve_through_relays(scope, link) {
        Some((node, _)) => node,
        None => return,
    };

    match scope.node_id(&target.guid) {
        Some(target_id) => {
            if flows.add_execution(source_id, target_id) {
                tracing::debug!("[TRANSLATE] Exec flow: {} -> {}", source_id, target_id);
            }
        }
        None => tracing::debug!(
            "[TRANSLATE] Exec target {} has no id, skipping",
            target.guid
        ),
    }
}

fn trace_data(
    scope: &GraphScope<'_>,
    node: &EditorNode,
    pin: &EditorPin,
    link: &PinLink,
    flows: &mut Flows,
) {
    let (target_node, target_pin) = match resolve_through_relays(scope, link) {
        Some(found) => found,
        None => return,
    };

    let local = pin_ref(scope, &node.guid, &pin.id);
    let remote = pin_ref(scope, &target_node.guid, &target_pin.id);
    let (local, remote) = match (local, remote) {
        (Some(local), Some(remote)) => (local, remote),
        _ => {
            tracing::debug!(
                "[TRANSLATE] Data link {}.{} -> {}.{} has unassigned ids, skipping",
                node.guid,
                pin.id,
                target_node.guid,
                target_pin.id
            );
            return;
        }
    };

    // Key is always the upstream output
    let (output, input) = if pin.is_output() {
        (local, remote)
    } else {
        (remote, local)
    };

    if let Some(previous) = flows.add_data(&output, &input) {
        if previous != input.to_string() {
            tracing::debug!(
                "[TRANSLATE] Data flow {} now feeds {} (was {})",
                output,
                input,
                previous
            );
        }
    }
}

fn pin_ref(scope: &GraphScope<'_>, guid: &str, pin: &str) -> Option<PinRef> {
    Some(PinRef::new(scope.node_id(guid)?, scope.pin_id(guid, pin)?))
}

/// Follow `start` through any chain of relay nodes.
///
/// Returns the first non-relay node reached and the pin the wire lands on.
/// `None` for a wire leaving the graph, a relay with nothing on its far side,
/// or a relay loop.
pub(crate) fn resolve_through_relays<'n>(
    scope: &GraphScope<'n>,
    start: &PinLink,
) -> Option<(&'n EditorNode, &'n EditorPin)> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut node_guid = start.node.as_str();
    let mut pin_id = start.pin.as_str();

    loop {
        let node = match scope.editor_node(node_guid) {
            Some(node) => node,
            None => {
                tracing::debug!(
                    "[TRANSLATE] Linked node {} is outside the translated set",
                    node_guid
                );
                return None;
            }
        };

        if !visited.insert(node.guid.as_str()) {
            tracing::warn!("[TRANSLATE] Relay loop detected at node {}", node.guid);
            return None;
        }

        let pin = node.find_pin(pin_id)?;
        if !scope.is_relay(&node.guid) {
            return Some((node, pin));
        }

        // Leave the relay on the side opposite to where the wire entered
        let far_side = if pin.is_input() {
            node.first_output()
        } else {
            node.first_input()
        };
        let next = match far_side.and_then(|pin| pin.linked_to.first()) {
            Some(next) => next,
            None => {
                tracing::debug!("[TRANSLATE] Relay {} is a dead end", node.guid);
                return None;
            }
        };

        node_guid = next.node.as_str();
        pin_id = next.pin.as_str();
    }
}
