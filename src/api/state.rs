use std::sync::Arc;

use crate::services::providers::MediaExtractor;

/// Shared application state
///
/// Holds only the extractor handle. Requests never share mutable data, so no
/// lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn MediaExtractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn MediaExtractor>) -> Self {
        Self { extractor }
    }
}
