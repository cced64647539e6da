use nupkg_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramRenderer that records invocations instead of spawning a process
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    pub should_fail: bool,
    pub invocations: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> Vec<(PathBuf, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl DiagramRenderer for MockDiagramRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));
        if self.should_fail {
            return Err(GraphError::Render {
                command: "mock-mmdc".to_string(),
                details: "Mock renderer failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "mock-mmdc"
    }
}
