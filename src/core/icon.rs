//! Icon identity.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Glyph shown for icons without a usable image or a configured fallback.
pub const DEFAULT_FALLBACK: &str = "questionmark.square.dashed";

/// Stable key naming one logical icon (e.g. `icon.resin`).
///
/// Cheap to clone; hashes like the underlying `str` so maps keyed by
/// `IconId` can be queried with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconId(Arc<str>);

impl IconId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output file name: `<id>.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }

    /// Whether `id` can name a file directly inside the output directory.
    pub fn is_file_stem(id: &str) -> bool {
        if id.contains(['/', '\\']) || id.contains("..") {
            return false;
        }
        let mut components = Path::new(id).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}

impl Borrow<str> for IconId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logical icon: its source document and fallback glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub id: IconId,
    /// Resolved path of the vendor template document.
    pub source: PathBuf,
    /// Glyph shown instead when rendering fails.
    pub fallback: String,
}

impl IconAsset {
    pub fn new(id: impl AsRef<str>, source: impl Into<PathBuf>, fallback: impl Into<String>) -> Self {
        Self {
            id: IconId::new(id),
            source: source.into(),
            fallback: fallback.into(),
        }
    }
}
