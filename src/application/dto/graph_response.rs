use crate::graph_generation::domain::DependencyGraph;
use std::path::PathBuf;

/// Result of the optional renderer step
///
/// A renderer failure is kept here instead of failing the whole use case:
/// the graph file has already been written at that point.
#[derive(Debug)]
pub enum RenderOutcome {
    /// Rendering was not requested
    Skipped,
    /// The image was written to the output path
    Rendered,
    /// The renderer failed; carries a `GraphError::Render`
    Failed(anyhow::Error),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered)
    }
}

/// GraphResponse - Internal response DTO from the graph generation use case
#[derive(Debug)]
pub struct GraphResponse {
    /// Dependency ids as declared in the manifest (duplicates preserved)
    pub dependencies: Vec<String>,
    /// De-duplicated graph built from `dependencies`
    pub graph: DependencyGraph,
    /// Serialized graph text
    pub graph_text: String,
    /// Where the graph text was written
    pub graph_path: PathBuf,
    /// Requested image path
    pub output_path: PathBuf,
    pub render: RenderOutcome,
}
