//! Cleaned document cache.

use std::sync::Arc;

use super::slot::SlotMap;
use crate::core::IconId;
use crate::error::IconResult;
use crate::image::svg::CleanedDocument;

/// Extracted documents by id. Each source is extracted at most once.
#[derive(Default)]
pub struct DocumentCache {
    slots: SlotMap<IconResult<Arc<CleanedDocument>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Arc<CleanedDocument>> {
        self.slots.peek(id).and_then(Result::ok)
    }

    /// Cached result for `id`, running `extract` on the first miss.
    pub fn get_or_extract(
        &self,
        id: &IconId,
        extract: impl FnOnce() -> IconResult<CleanedDocument>,
    ) -> IconResult<Arc<CleanedDocument>> {
        self.slots.get_or_init(id, || extract().map(Arc::new))
    }

    pub fn len(&self) -> usize {
        self.slots.count(Result::is_ok)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
