use super::PackageName;
use std::collections::HashSet;

/// DependencyGraph aggregate: a root package with one edge per distinct dependency
///
/// Edges keep the order in which each identifier first appeared in the input;
/// later repeats are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: PackageName,
    dependencies: Vec<String>,
}

impl DependencyGraph {
    pub fn new(root: PackageName, dependencies: &[String]) -> Self {
        let mut seen = HashSet::new();
        let dependencies = dependencies
            .iter()
            .filter(|dep| seen.insert(dep.as_str()))
            .cloned()
            .collect();

        Self { root, dependencies }
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.len()
    }
}
