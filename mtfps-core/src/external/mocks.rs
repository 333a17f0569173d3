// mtfps-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::FfprobeExecutor;
use crate::error::{CoreError, CoreResult};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock implementation of FfprobeExecutor.
///
/// Paths without a stored document behave like a file ffprobe refuses.
#[derive(Default)]
pub struct MockFfprobeExecutor {
    documents: HashMap<PathBuf, Value>,
    received_calls: RefCell<Vec<PathBuf>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Stores the document returned for `path`.
    pub fn expect_document(&mut self, path: impl Into<PathBuf>, document: Value) {
        self.documents.insert(path.into(), document);
    }

    pub fn get_received_calls(&self) -> Vec<PathBuf> {
        self.received_calls.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_raw(&self, path: &Path) -> CoreResult<Value> {
        self.received_calls.borrow_mut().push(path.to_path_buf());
        match self.documents.get(path) {
            Some(document) => Ok(document.clone()),
            None => {
                log::debug!("MockFfprobeExecutor: no document for {}", path.display());
                Err(CoreError::FfprobeParse(format!(
                    "MockFfprobeExecutor: no document for {}",
                    path.display()
                )))
            }
        }
    }
}
