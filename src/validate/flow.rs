//! Referential integrity of a graph's flows.

use crate::error::ValidationError;
use crate::ir::{exec_chain_nodes, Graph, PinRef};

/// Check that every execution chain and data entry of `graph` names existing
/// nodes and pins. Stops at the first violation.
pub fn validate_flow_references(graph: &Graph) -> Result<(), ValidationError> {
    for chain in &graph.flows.execution {
        check_chain(graph, chain)?;
    }
    for (source, target) in &graph.flows.data {
        check_data(graph, source, target)?;
    }
    Ok(())
}

/// Remove every flow entry that fails [`validate_flow_references`].
///
/// # Returns
///
/// One message per removed entry, each also logged as a warning.
pub fn prune_dangling_flows(graph: &mut Graph) -> Vec<String> {
    let mut removed = Vec::new();

    let mut execution = std::mem::take(&mut graph.flows.execution);
    execution.retain(|chain| match check_chain(graph, chain) {
        Ok(()) => true,
        Err(e) => {
            removed.push(e.to_string());
            false
        }
    });
    graph.flows.execution = execution;

    let mut data = std::mem::take(&mut graph.flows.data);
    data.retain(|source, target| match check_data(graph, source, target) {
        Ok(()) => true,
        Err(e) => {
            removed.push(e.to_string());
            false
        }
    });
    graph.flows.data = data;

    for message in &removed {
        tracing::warn!("[VALIDATE] Removed {}", message);
    }
    removed
}

fn check_chain(graph: &Graph, chain: &str) -> Result<(), ValidationError> {
    let nodes = exec_chain_nodes(chain);
    if nodes.len() < 2 {
        return Err(ValidationError::ShortExecution {
            graph: graph.name.clone(),
            chain: chain.to_string(),
        });
    }

    match nodes.iter().find(|id| graph.find_node(id).is_none()) {
        Some(missing) => Err(ValidationError::DanglingExecution {
            graph: graph.name.clone(),
            chain: chain.to_string(),
            node: missing.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_data(graph: &Graph, source: &str, target: &str) -> Result<(), ValidationError> {
    let missing = [source, target]
        .into_iter()
        .find(|reference| !resolves(graph, reference));

    match missing {
        Some(missing) => Err(ValidationError::DanglingData {
            graph: graph.name.clone(),
            source_ref: source.to_string(),
            target_ref: target.to_string(),
            missing: missing.to_string(),
        }),
        None => Ok(()),
    }
}

fn resolves(graph: &Graph, reference: &str) -> bool {
    PinRef::parse(reference)
        .and_then(|pin_ref| {
            let node = graph.find_node(&pin_ref.node)?;
            node.find_pin(&pin_ref.pin)
        })
        .is_some()
}
