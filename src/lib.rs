//! # Pulsar Blueprint Intermediate Representation (PBIR)
//!
//! Translator from Blueprint visual node graphs into a compact, validated
//! JSON intermediate representation for downstream code generation.
//!
//! PBIR takes nodes as the graph editor exposes them and provides:
//! - Classification of every node into one of ~120 canonical categories
//! - Per-category extraction of owning type, member name, purity and latency
//! - Stable short node/pin IDs and relay-free execution and data flows
//! - Bounded expansion of user-authored functions, macros and collapsed graphs
//! - Structural validation and compact or pretty JSON output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pbir::{compile_snapshot, EditorSnapshot, TranslatorConfig};
//!
//! let snapshot = EditorSnapshot::from_json(&std::fs::read_to_string("session.json")?)?;
//! let config = TranslatorConfig::default().with_max_depth(1);
//!
//! match compile_snapshot(&snapshot, "/Game/BP_Door.BP_Door", "EventGraph", &config) {
//!     Ok(ir) => {
//!         std::fs::write("BP_Door.ir.json", ir)?;
//!     }
//!     Err(e) => eprintln!("Compilation failed: {}", e),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! PBIR follows a multi-phase pipeline:
//!
//! 1. **Classification** - Map each editor node to a [`NodeCategory`]
//! 2. **Translation** - Extract node properties, assign IDs, trace flows, expand subgraphs
//! 3. **Validation** - Check required fields, IDs, purity and flow references
//! 4. **Serialization** - Render the IR as JSON text

pub mod classify;
pub mod compiler;
pub mod config;
pub mod editor;
pub mod error;
pub mod extract;
pub mod ir;
pub mod serialize;
pub mod translator;
pub mod validate;

// Re-export the main compilation API
pub use compiler::{compile_nodes, compile_nodes_with_report, compile_snapshot, CompileOutput};

pub use classify::NodeClassifier;
pub use config::{OutputConfig, TranslatorConfig, MAX_TRANSLATION_DEPTH};
pub use editor::{
    EditorGraph, EditorNode, EditorPin, EditorProgram, EditorSnapshot, GraphRef, GraphSource,
    NoSource, NodeDetail,
};
pub use error::{ConfigError, Error, Result, SerializeError, TranslateError, ValidationError};
pub use ir::{
    are_compatible, are_pins_compatible, Blueprint, Flows, Graph, GraphKind, Metadata, Node,
    NodeCategory, Pin, PinRef, PinType, ProgramKind, IR_VERSION,
};
pub use serialize::{from_text, to_text, TextStyle};
pub use translator::{TranslationSession, Translator};
pub use validate::{prune_dangling_flows, validate, ValidationReport, Validator};
