//! Node-level checks.

use super::Validator;
use crate::error::ValidationError;
use crate::ir::{Graph, Node};
use std::collections::HashSet;

impl Validator {
    pub(super) fn check_node(&mut self, graph: &Graph, node: &Node) -> Result<(), ValidationError> {
        if node.id.is_empty() {
            return Err(ValidationError::EmptyNodeId {
                graph: graph.name.clone(),
            });
        }
        if node.name.is_empty() {
            return Err(ValidationError::EmptyNodeName {
                graph: graph.name.clone(),
                node: node.id.clone(),
            });
        }

        if node.pure && node.latent {
            return Err(ValidationError::PureAndLatent {
                graph: graph.name.clone(),
                node: node.id.clone(),
            });
        }
        if node.pure
            && node.has_exec_input()
            && node.has_exec_output()
            && !node.category.is_relay()
        {
            return Err(ValidationError::PureWithExecPins {
                graph: graph.name.clone(),
                node: node.id.clone(),
            });
        }

        let mut pin_ids = HashSet::new();
        for pin in node.pins() {
            if !pin.id.is_empty() && !pin_ids.insert(pin.id.as_str()) {
                return Err(ValidationError::DuplicatePinId {
                    graph: graph.name.clone(),
                    node: node.id.clone(),
                    pin: pin.id.clone(),
                });
            }
            self.check_pin(&node.id, pin);
        }

        Ok(())
    }
}
