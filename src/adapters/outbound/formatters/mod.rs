/// Formatter adapters for graph output formats
mod mermaid_formatter;

pub use mermaid_formatter::MermaidFormatter;
