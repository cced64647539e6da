use nupkg_graph::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PackageFetcher that returns canned bytes and records requested URLs
#[derive(Clone)]
pub struct MockPackageFetcher {
    pub archive: Vec<u8>,
    pub should_fail: bool,
    pub requested_urls: Arc<Mutex<Vec<String>>>,
}

impl MockPackageFetcher {
    pub fn new(archive: Vec<u8>) -> Self {
        Self {
            archive,
            should_fail: false,
            requested_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.requested_urls.lock().unwrap().len()
    }
}

impl PackageFetcher for MockPackageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        if self.should_fail {
            return Err(GraphError::Transport {
                url: url.to_string(),
                details: "Mock transport failure".to_string(),
            }
            .into());
        }
        Ok(self.archive.clone())
    }
}
