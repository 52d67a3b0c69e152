//! Flow records and the string forms they use in the IR.
//!
//! Execution chains are `N1->N2->N3`; data references are `N1.P2`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const EXEC_SEPARATOR: &str = "->";
pub const PIN_SEPARATOR: char = '.';

/// Execution and data connections of one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flows {
    #[serde(default)]
    pub execution: Vec<String>,

    /// Output pin reference to input pin reference.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl Flows {
    pub fn is_empty(&self) -> bool {
        self.execution.is_empty() && self.data.is_empty()
    }

    /// Record `source->target` once.
    pub fn add_execution(&mut self, source: &str, target: &str) -> bool {
        let chain = format!("{}{}{}", source, EXEC_SEPARATOR, target);
        if self.execution.contains(&chain) {
            return false;
        }
        self.execution.push(chain);
        true
    }

    /// Record an output→input data edge. Returns the target it replaced, if any.
    pub fn add_data(&mut self, output: &PinRef, input: &PinRef) -> Option<String> {
        self.data.insert(output.to_string(), input.to_string())
    }
}

/// Split an execution chain into its node IDs.
pub fn exec_chain_nodes(chain: &str) -> Vec<&str> {
    chain
        .split(EXEC_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// A `NodeID.PinID` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinRef {
    pub node: String,
    pub pin: String,
}

impl PinRef {
    pub fn new(node: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            pin: pin.into(),
        }
    }

    /// Parse `N1.P2`. Anything other than exactly two non-empty parts is rejected.
    pub fn parse(text: &str) -> Option<PinRef> {
        let mut parts = text.split(PIN_SEPARATOR);
        let node = parts.next()?;
        let pin = parts.next()?;
        if parts.next().is_some() || node.is_empty() || pin.is_empty() {
            return None;
        }
        Some(PinRef::new(node, pin))
    }
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.node, PIN_SEPARATOR, self.pin)
    }
}
