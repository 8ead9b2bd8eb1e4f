//! In-memory memoization keyed by [`IconId`](crate::core::IconId).
//!
//! Both caches share one slot scheme: a slot is created under a single
//! lock, then filled at most once outside it. Concurrent misses for the
//! same key block on the slot instead of repeating the work.
//!
//! ```text
//! SlotMap ── Mutex<FxHashMap<IconId, Arc<OnceLock<V>>>>
//!    ├── DocumentCache   V = Result<Arc<CleanedDocument>, IconError>
//!    └── ImageCache      V = Result<Arc<RgbaImage>, IconError>
//! ```
//!
//! Failures are stored like results: every stage is deterministic, so a
//! retry would reproduce the same error.

mod documents;
mod images;
mod slot;

pub use documents::DocumentCache;
pub use images::ImageCache;
