use crate::graph_generation::domain::{DependencyGraph, PackageName};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Graph declaration header for a top-down Mermaid flowchart
const MERMAID_HEADER: &str = "graph TD";

/// MermaidFormatter adapter for Mermaid flowchart output
///
/// Produces, one per line:
/// ```text
/// graph TD
/// Root[Root]
/// Root --> Dependency
/// ```
/// Lines are joined by `\n` without a trailing newline.
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Builds Mermaid text directly from a root name and a raw dependency list
    ///
    /// Repeated identifiers in `dependencies` produce a single edge.
    ///
    /// # Errors
    /// Returns an error if `root` is empty
    pub fn build(root: &str, dependencies: &[String]) -> Result<String> {
        let root = PackageName::new(root.to_string())?;
        let graph = DependencyGraph::new(root, dependencies);
        Ok(Self::new().format(&graph))
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MermaidFormatter {
    fn format(&self, graph: &DependencyGraph) -> String {
        let root = graph.root().as_str();

        let mut lines = Vec::with_capacity(graph.edge_count() + 2);
        lines.push(MERMAID_HEADER.to_string());
        lines.push(format!("{root}[{root}]"));
        lines.extend(
            graph
                .dependencies()
                .iter()
                .map(|dep| format!("{root} --> {dep}")),
        );

        lines.join("\n")
    }

    fn file_extension(&self) -> &'static str {
        "mmd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_mermaid_graph() {
        let output = MermaidFormatter::build("MyPackage", &deps(&["PackageA", "PackageB"])).unwrap();

        assert_eq!(
            output,
            "graph TD\nMyPackage[MyPackage]\nMyPackage --> PackageA\nMyPackage --> PackageB"
        );
    }

    #[test]
    fn test_build_mermaid_graph_no_dependencies() {
        let output = MermaidFormatter::build("MyPackage", &[]).unwrap();
        assert_eq!(output, "graph TD\nMyPackage[MyPackage]");
    }

    #[test]
    fn test_build_mermaid_graph_collapses_repeats() {
        let output =
            MermaidFormatter::build("MyPackage", &deps(&["PackageA", "PackageA"])).unwrap();

        assert_eq!(output.matches("MyPackage --> PackageA").count(), 1);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_build_mermaid_graph_first_occurrence_order() {
        let output = MermaidFormatter::build(
            "Root",
            &deps(&["C", "A", "C", "B", "A", "C"]),
        )
        .unwrap();

        let edges: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(edges, vec!["Root --> C", "Root --> A", "Root --> B"]);
    }

    #[test]
    fn test_build_mermaid_graph_is_deterministic() {
        let input = deps(&["System.Memory", "System.Buffers", "System.Memory"]);
        let first = MermaidFormatter::build("Azure.Core", &input).unwrap();
        let second = MermaidFormatter::build("Azure.Core", &input).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_build_mermaid_graph_root_with_spaces() {
        let output = MermaidFormatter::build("My Package", &deps(&["PackageA"])).unwrap();
        assert_eq!(
            output,
            "graph TD\nMy Package[My Package]\nMy Package --> PackageA"
        );
    }

    #[test]
    fn test_build_mermaid_graph_invalid_root() {
        assert!(MermaidFormatter::build("", &deps(&["PackageA"])).is_err());
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(MermaidFormatter::new().file_extension(), "mmd");
    }
}
