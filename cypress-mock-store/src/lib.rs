pub mod document;

use std::fs;
use std::path::Path;

use cypress_mock_common::StartupError;
use log::{info, warn};

pub use document::BaseDocument;

/// Loads the base document served by the mock from a JSON file.
pub fn load_document(path: impl AsRef<Path>) -> Result<BaseDocument, StartupError> {
    let path = path.as_ref();
    info!("Loading document from {path:?}");

    let raw = fs::read_to_string(path).map_err(|source| StartupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&raw).map_err(|source| StartupError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let document = BaseDocument::new(value);
    match document.node_count() {
        Some(count) => info!("Document loaded with {count} nodes."),
        // Not fatal: every request will fail, but the server still starts.
        None => warn!("Document at {path:?} has no data.project.runs.nodes array"),
    }
    Ok(document)
}
