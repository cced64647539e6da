use nupkg_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock GraphWriter that keeps written files in memory
#[derive(Default, Clone)]
pub struct MockGraphWriter {
    pub files: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MockGraphWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.files.lock().unwrap().clone()
    }
}

impl GraphWriter for MockGraphWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
