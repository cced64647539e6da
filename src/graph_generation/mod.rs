/// Domain layer - Pure dependency graph logic
///
/// This layer has no I/O dependencies: it turns archive bytes into
/// dependency identifiers and identifiers into a graph.
pub mod domain;
pub mod services;
