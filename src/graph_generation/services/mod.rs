mod dependency_extractor;

pub use dependency_extractor::{DependencyExtractor, MANIFEST_SUFFIX};
