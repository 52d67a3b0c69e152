//! # IR Serialization
//!
//! JSON text form of a [`Blueprint`]. Empty optional fields and false flags
//! are omitted, so compact output stays small.

use crate::config::OutputConfig;
use crate::error::SerializeError;
use crate::ir::Blueprint;
use serde::Serialize;

/// Layout of the produced JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Compact,
    Pretty { indent: usize },
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::Pretty { indent: 4 }
    }
}

impl From<&OutputConfig> for TextStyle {
    fn from(output: &OutputConfig) -> Self {
        if output.pretty {
            TextStyle::Pretty {
                indent: output.indent,
            }
        } else {
            TextStyle::Compact
        }
    }
}

/// Render `blueprint` as JSON text.
///
/// # Arguments
///
/// * `blueprint` - The IR to render
/// * `style` - Compact or indented output
///
/// # Returns
///
/// * `Ok(String)` - The JSON text
/// * `Err(SerializeError)` - If encoding fails
pub fn to_text(blueprint: &Blueprint, style: TextStyle) -> Result<String, SerializeError> {
    let text = match style {
        TextStyle::Compact => serde_json::to_string(blueprint).map_err(SerializeError::Encode)?,
        TextStyle::Pretty { indent } => {
            let indent = b" ".repeat(indent);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut buffer = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            blueprint
                .serialize(&mut serializer)
                .map_err(SerializeError::Encode)?;
            // serde_json only ever writes valid UTF-8
            String::from_utf8_lossy(&buffer).into_owned()
        }
    };

    tracing::debug!(
        "[SERIALIZE] Rendered '{}' ({} bytes, {:?})",
        blueprint.metadata.name,
        text.len(),
        style
    );
    Ok(text)
}

/// Parse JSON text back into a [`Blueprint`].
pub fn from_text(text: &str) -> Result<Blueprint, SerializeError> {
    let blueprint: Blueprint = serde_json::from_str(text).map_err(SerializeError::Decode)?;
    tracing::debug!(
        "[SERIALIZE] Parsed '{}' ({} graphs)",
        blueprint.metadata.name,
        blueprint.graphs.len()
    );
    Ok(blueprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Graph, Metadata, Node, NodeCategory, Pin, PinType};

    fn sample() -> Blueprint {
        let mut blueprint = Blueprint::new(Metadata {
            name: "BP_Door".into(),
            blueprint_class: "BP_Door".into(),
            ..Default::default()
        });
        let mut graph = Graph::new("EventGraph", Default::default());
        let mut node = Node::new("N1", NodeCategory::Event, "Event BeginPlay");
        node.output_pins.push(Pin::new("P1", "then", PinType::Exec));
        graph.nodes.push(node);
        blueprint.graphs.push(graph);
        blueprint
    }

    #[test]
    fn empty_fields_are_omitted() {
        let text = to_text(&sample(), TextStyle::Compact).unwrap();
        assert!(!text.contains("member_parent"));
        assert!(!text.contains("\"pure\""));
        assert!(!text.contains("\"type\":\"Exec\""));
        assert!(!text.contains("structs"));
        assert!(text.contains("\"version\":\"1.0.0\""));
    }

    #[test]
    fn pretty_style_uses_requested_indent() {
        let text = to_text(&sample(), TextStyle::Pretty { indent: 2 }).unwrap();
        assert!(text.contains("\n  \"version\""));
        assert_eq!(from_text(&text).unwrap(), sample());
    }

    #[test]
    fn output_config_selects_style() {
        let output = OutputConfig { pretty: false, indent: 4 };
        assert_eq!(TextStyle::from(&output), TextStyle::Compact);
        assert_eq!(TextStyle::from(&OutputConfig::default()), TextStyle::Pretty { indent: 4 });
    }

    #[test]
    fn malformed_text_is_a_decode_error() {
        assert!(matches!(from_text("{ not json"), Err(SerializeError::Decode(_))));
    }
}
