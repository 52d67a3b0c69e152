//! # Blueprint Compiler
//!
//! Main entry points for turning editor graphs into IR text.

use crate::classify::NodeClassifier;
use crate::config::TranslatorConfig;
use crate::editor::{EditorNode, EditorSnapshot, GraphRef, GraphSource};
use crate::error::{Error, Result};
use crate::ir::Blueprint;
use crate::serialize::{self, TextStyle};
use crate::translator::Translator;
use crate::validate::{ValidationReport, Validator};

/// Everything one compilation produced.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub blueprint: Blueprint,
    pub report: ValidationReport,
    pub text: String,
}

/// Compile editor nodes to IR text
///
/// This is the main entry point. It translates the nodes (following
/// subgraphs through `source` when the config allows), validates the result
/// and renders it in the configured output style.
///
/// # Arguments
///
/// * `nodes` - Nodes of the graph to compile
/// * `source` - Lookup for programs, subgraphs and user-defined types
/// * `config` - Translation and output settings
///
/// # Returns
///
/// * `Ok(String)` - The IR as JSON text
/// * `Err(Error)` - A descriptive error if any phase fails
///
/// # Examples
///
/// ```rust,no_run
/// use pbir::{compile_nodes, EditorNode, NoSource, TranslatorConfig};
///
/// let nodes: Vec<EditorNode> = Vec::new();
/// match compile_nodes(&nodes, &NoSource, &TranslatorConfig::default()) {
///     Ok(text) => println!("IR:\n{}", text),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn compile_nodes(
    nodes: &[EditorNode],
    source: &dyn GraphSource,
    config: &TranslatorConfig,
) -> Result<String> {
    compile_nodes_with_report(nodes, source, config).map(|output| output.text)
}

/// Compile editor nodes and keep the intermediate results
///
/// Same pipeline as [`compile_nodes`], but also returns the translated
/// [`Blueprint`] and the validator's warnings.
///
/// # Arguments
///
/// * `nodes` - Nodes of the graph to compile
/// * `source` - Lookup for programs, subgraphs and user-defined types
/// * `config` - Translation and output settings
///
/// # Returns
///
/// * `Ok(CompileOutput)` - Blueprint, validation report and text
/// * `Err(Error)` - A descriptive error if any phase fails
pub fn compile_nodes_with_report(
    nodes: &[EditorNode],
    source: &dyn GraphSource,
    config: &TranslatorConfig,
) -> Result<CompileOutput> {
    tracing::info!("[PBIR] Starting Blueprint compilation");
    tracing::info!(
        "[PBIR] Input: {} nodes (max depth {})",
        nodes.len(),
        config.max_depth
    );

    // Phase 1: Classification tables
    tracing::info!("[PBIR] Phase 1: Loading node classifier...");
    let classifier = NodeClassifier::new();
    tracing::info!("[PBIR] Loaded {} node names", classifier.name_count());

    // Phase 2: Translation
    tracing::info!("[PBIR] Phase 2: Translating graph...");
    let translator = Translator::new(config.clone(), classifier);
    let blueprint = translator.translate(nodes, source)?;
    tracing::info!(
        "[PBIR] Translation complete ({} graphs, {} nodes)",
        blueprint.graphs.len(),
        blueprint.node_count()
    );

    // Phase 3: Validation
    tracing::info!("[PBIR] Phase 3: Validating IR...");
    let report = Validator::new().validate(&blueprint).map_err(|e| {
        tracing::error!("[PBIR] Validation failed: {}", e);
        e
    })?;
    tracing::info!("[PBIR] Validation passed ({} warnings)", report.warnings.len());

    // Phase 4: Serialization
    tracing::info!("[PBIR] Phase 4: Serializing IR...");
    let text = serialize::to_text(&blueprint, TextStyle::from(&config.output))?;

    tracing::info!("[PBIR] Serialization complete ({} bytes)", text.len());
    tracing::info!("[PBIR] Compilation successful!");

    Ok(CompileOutput {
        blueprint,
        report,
        text,
    })
}

/// Compile one graph of a captured editor snapshot
///
/// # Arguments
///
/// * `snapshot` - Programs and user types captured from the editor
/// * `program_path` - Path of the program owning the graph
/// * `graph_name` - Name of the graph to compile
/// * `config` - Translation and output settings
///
/// # Returns
///
/// * `Ok(String)` - The IR as JSON text
/// * `Err(Error)` - [`Error::GraphNotFound`] if the graph does not exist, or any pipeline error
pub fn compile_snapshot(
    snapshot: &EditorSnapshot,
    program_path: &str,
    graph_name: &str,
    config: &TranslatorConfig,
) -> Result<String> {
    let graph = snapshot
        .graph(&GraphRef::new(program_path, graph_name))
        .ok_or_else(|| Error::GraphNotFound {
            program: program_path.to_string(),
            graph: graph_name.to_string(),
        })?;

    tracing::info!(
        "[PBIR] Compiling graph '{}' of {}",
        graph.name,
        program_path
    );
    compile_nodes(&graph.nodes, snapshot, config)
}
