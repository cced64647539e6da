/// Renderer adapters that rasterize diagram files via external programs
mod mermaid_cli;

pub use mermaid_cli::{MermaidCliRenderer, RenderSettings};
