use crate::shared::error::GraphError;
use crate::shared::Result;

/// NewType wrapper for the graph root label
///
/// Any non-empty string is accepted and emitted verbatim as the Mermaid node
/// id and label; no escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(GraphError::Validation {
                message: "Package name cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
