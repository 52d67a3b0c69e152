//! # Structural Validation
//!
//! Checks a translated [`Blueprint`] before it is serialized. Hard
//! violations abort with a [`ValidationError`]; pin-level anomalies that a
//! downstream consumer can live with are collected as warnings in the
//! [`ValidationReport`].
//!
//! Flow references are checked separately by [`validate_flow_references`]
//! and cleaned up by [`prune_dangling_flows`], which the translator runs on
//! every graph it emits.

mod flow;
mod node;
mod pin;

pub use flow::{prune_dangling_flows, validate_flow_references};

use crate::error::ValidationError;
use crate::ir::{Blueprint, EnumDef, Graph, StructDef, IR_VERSION};
use std::collections::HashSet;

/// Soft problems found by a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Accumulates warnings while walking a blueprint.
#[derive(Debug, Default)]
pub struct Validator {
    warnings: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a whole blueprint.
    ///
    /// # Arguments
    ///
    /// * `blueprint` - The IR to check
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationReport)` - No hard violation; warnings may still be present
    /// * `Err(ValidationError)` - The first hard violation found
    pub fn validate(mut self, blueprint: &Blueprint) -> Result<ValidationReport, ValidationError> {
        tracing::debug!("[VALIDATE] Validating blueprint '{}'", blueprint.metadata.name);

        if blueprint.version != IR_VERSION {
            return Err(ValidationError::Version {
                found: blueprint.version.clone(),
                expected: IR_VERSION.to_string(),
            });
        }
        if blueprint.metadata.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if blueprint.metadata.blueprint_class.is_empty() {
            return Err(ValidationError::MissingClass);
        }
        if blueprint.graphs.is_empty() {
            return Err(ValidationError::NoGraphs);
        }
        if !blueprint.has_nodes() {
            return Err(ValidationError::NoNodes);
        }

        for (index, graph) in blueprint.graphs.iter().enumerate() {
            if graph.name.is_empty() {
                return Err(ValidationError::EmptyGraphName { index });
            }
            self.check_graph(graph)?;
        }

        for (index, structure) in blueprint.structs.iter().enumerate() {
            check_struct(index, structure)?;
        }
        for (index, enumeration) in blueprint.enums.iter().enumerate() {
            check_enum(index, enumeration)?;
        }

        tracing::debug!(
            "[VALIDATE] Blueprint '{}' is valid ({} warnings)",
            blueprint.metadata.name,
            self.warnings.len()
        );
        Ok(self.finish())
    }

    /// Validate a single graph: nodes, pins and flow references.
    pub fn validate_graph(mut self, graph: &Graph) -> Result<ValidationReport, ValidationError> {
        self.check_graph(graph)?;
        Ok(self.finish())
    }

    fn check_graph(&mut self, graph: &Graph) -> Result<(), ValidationError> {
        if graph.nodes.is_empty() {
            return Err(ValidationError::EmptyGraph {
                graph: graph.name.clone(),
            });
        }

        let mut node_ids = HashSet::new();
        for node in &graph.nodes {
            self.check_node(graph, node)?;
            if !node_ids.insert(node.id.as_str()) {
                return Err(ValidationError::DuplicateNodeId {
                    graph: graph.name.clone(),
                    node: node.id.clone(),
                });
            }
        }

        validate_flow_references(graph)
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("[VALIDATE] {}", message);
        self.warnings.push(message);
    }

    fn finish(self) -> ValidationReport {
        ValidationReport {
            warnings: self.warnings,
        }
    }
}

/// Validate a whole blueprint with a fresh [`Validator`].
pub fn validate(blueprint: &Blueprint) -> Result<ValidationReport, ValidationError> {
    Validator::new().validate(blueprint)
}

/// Validate one graph with a fresh [`Validator`].
pub fn validate_graph(graph: &Graph) -> Result<ValidationReport, ValidationError> {
    Validator::new().validate_graph(graph)
}

fn check_struct(index: usize, structure: &StructDef) -> Result<(), ValidationError> {
    if structure.name.is_empty() {
        return Err(ValidationError::UnnamedStruct { index });
    }

    for (member_index, member) in structure.members.iter().enumerate() {
        if member.name.is_empty() {
            return Err(ValidationError::UnnamedStructMember {
                name: structure.name.clone(),
                index: member_index,
            });
        }
        if member.member_type.requires_type_name() && member.type_name.is_empty() {
            return Err(ValidationError::MissingMemberTypeName {
                name: structure.name.clone(),
                member: member.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_enum(index: usize, enumeration: &EnumDef) -> Result<(), ValidationError> {
    if enumeration.name.is_empty() {
        return Err(ValidationError::UnnamedEnum { index });
    }

    for (value_index, value) in enumeration.values.iter().enumerate() {
        if value.name.is_empty() {
            return Err(ValidationError::UnnamedEnumValue {
                name: enumeration.name.clone(),
                index: value_index,
            });
        }
    }
    Ok(())
}
