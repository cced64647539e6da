use crate::graph_generation::domain::DependencyGraph;

/// GraphFormatter port for serializing a dependency graph
///
/// This port abstracts the textual diagram language the graph is written in.
pub trait GraphFormatter {
    /// Serializes the graph into diagram text
    ///
    /// Output must be deterministic: the same graph always yields
    /// byte-identical text.
    fn format(&self, graph: &DependencyGraph) -> String;

    /// File extension (without the dot) for files holding this format
    fn file_extension(&self) -> &'static str;
}
