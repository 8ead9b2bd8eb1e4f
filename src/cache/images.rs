//! Final image cache.

use std::sync::Arc;

use image::RgbaImage;

use super::slot::SlotMap;
use crate::core::IconId;
use crate::error::{IconError, IconResult};

type Entry = IconResult<Arc<RgbaImage>>;

/// Rendered icons by id. Write-once per key, no eviction.
///
/// Every stored image is exactly `size x size`.
pub struct ImageCache {
    size: u32,
    slots: SlotMap<Entry>,
}

impl ImageCache {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            slots: SlotMap::default(),
        }
    }

    /// Whether a rendered image for `id` is available.
    ///
    /// Remembered failures count as absent.
    pub fn has(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<Arc<RgbaImage>> {
        self.slots.peek(id).and_then(Result::ok)
    }

    /// Whether `id` has been settled, successfully or not.
    pub fn is_settled(&self, id: &str) -> bool {
        self.slots.peek(id).is_some()
    }

    /// Insert `image` unless `id` is already settled or the size is wrong.
    pub fn put(&self, id: &IconId, image: RgbaImage) -> bool {
        if image.dimensions() != (self.size, self.size) {
            return false;
        }
        self.slots.set(id, Ok(Arc::new(image)))
    }

    /// Cached result for `id`, rendering with `render` on the first miss.
    ///
    /// Concurrent misses for the same id wait for one `render` call.
    pub fn get_or_render(
        &self,
        id: &IconId,
        render: impl FnOnce() -> IconResult<RgbaImage>,
    ) -> IconResult<Arc<RgbaImage>> {
        let size = self.size;
        self.slots.get_or_init(id, || {
            let image = render()?;
            if image.dimensions() != (size, size) {
                return Err(IconError::RenderFailed);
            }
            Ok(Arc::new(image))
        })
    }

    /// Number of successfully rendered entries.
    pub fn len(&self) -> usize {
        self.slots.count(Result::is_ok)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of remembered failures.
    pub fn failures(&self) -> usize {
        self.slots.count(Result::is_err)
    }
}
