//! Icon store: catalog, caches and prewarm behind one owner.
//!
//! Two ways to get an image:
//!
//! - strict: [`IconStore::image`] returns the pipeline error
//! - soft: [`IconStore::lookup`] falls back to the icon's glyph
//!
//! Either way an uncached icon renders inline on first access, and each
//! icon's document is extracted and rendered at most once per store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use image::RgbaImage;
use rayon::prelude::*;

use crate::cache::{DocumentCache, ImageCache};
use crate::core::{Catalog, DEFAULT_FALLBACK, IconAsset, IconId};
use crate::debug;
use crate::error::{IconError, IconResult};
use crate::image::svg::{CleanedDocument, extract};
use crate::pipeline::{RenderOptions, read_source, render_document};
use crate::prewarm::{PrewarmCoordinator, PrewarmState};

/// Result of a soft lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum IconImage<'a> {
    Rendered(Arc<RgbaImage>),
    /// Glyph to present instead.
    Fallback(&'a str),
}

impl IconImage<'_> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Work counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Pipeline runs from a cleaned document to a final image.
    pub renders: usize,
    /// Source reads plus extractions.
    pub extractions: usize,
    /// Successfully cached images.
    pub cached: usize,
    /// Icons whose failure is remembered.
    pub failed: usize,
}

pub struct IconStore {
    catalog: Catalog,
    options: RenderOptions,
    documents: DocumentCache,
    images: ImageCache,
    prewarm: PrewarmCoordinator,
    renders: AtomicUsize,
    extractions: AtomicUsize,
}

impl IconStore {
    pub fn new(catalog: Catalog, options: RenderOptions) -> Self {
        Self {
            images: ImageCache::new(options.size),
            documents: DocumentCache::new(),
            prewarm: PrewarmCoordinator::new(),
            renders: AtomicUsize::new(0),
            extractions: AtomicUsize::new(0),
            catalog,
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn asset(&self, id: &str) -> IconResult<&IconAsset> {
        self.catalog
            .get(id)
            .ok_or_else(|| IconError::UnknownIcon(id.to_string()))
    }

    /// Single-variant document for `id`, extracted on first use.
    pub fn cleaned_document(&self, id: &str) -> IconResult<Arc<CleanedDocument>> {
        let asset = self.asset(id)?;
        self.documents.get_or_extract(&asset.id, || {
            self.extractions.fetch_add(1, Ordering::Relaxed);
            let source = read_source(&asset.source)?;
            extract(&source, &self.options.variants)
        })
    }

    /// Final image for `id`, rendered inline on a miss.
    pub fn image(&self, id: &str) -> IconResult<Arc<RgbaImage>> {
        let asset = self.asset(id)?;
        self.images.get_or_render(&asset.id, || {
            let document = self.cleaned_document(id)?;
            self.renders.fetch_add(1, Ordering::Relaxed);
            render_document(&document, &self.options)
        })
    }

    /// Render `id` into the cache unless already there.
    ///
    /// Returns whether an image is available afterwards.
    pub fn precompile(&self, id: &str) -> bool {
        match self.image(id) {
            Ok(_) => true,
            Err(e) => {
                debug!("prewarm"; "{}: {}", id, e);
                false
            }
        }
    }

    /// Image for `id`, or the glyph to show instead.
    pub fn lookup(&self, id: &str) -> IconImage<'_> {
        let Ok(asset) = self.asset(id) else {
            return IconImage::Fallback(DEFAULT_FALLBACK);
        };
        match self.image(id) {
            Ok(image) => IconImage::Rendered(image),
            Err(e) => {
                debug!("lookup"; "{} falls back to {}: {}", id, asset.fallback, e);
                IconImage::Fallback(&asset.fallback)
            }
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.images.has(id)
    }

    /// Render every catalog icon once. Later calls return immediately;
    /// concurrent calls wait for the first.
    ///
    /// Returns `true` for the call that did the work.
    pub fn ensure_precompiled(&self) -> bool {
        self.prewarm_with(|_, _| {})
    }

    /// [`Self::ensure_precompiled`], reporting each icon's outcome to
    /// `observer` as it settles.
    pub fn prewarm_with<F>(&self, observer: F) -> bool
    where
        F: Fn(&IconId, &IconResult<Arc<RgbaImage>>) + Sync,
    {
        self.prewarm.ensure(|| {
            self.catalog.assets().par_iter().for_each(|asset| {
                let result = self.image(asset.id.as_str());
                if let Err(e) = &result {
                    debug!("prewarm"; "{}: {}", asset.id, e);
                }
                observer(&asset.id, &result);
            });
        })
    }

    /// Prewarm on a background thread.
    pub fn spawn_prewarm(self: &Arc<Self>) -> JoinHandle<()> {
        let store = Arc::clone(self);
        thread::spawn(move || {
            store.ensure_precompiled();
        })
    }

    pub fn prewarm_state(&self) -> PrewarmState {
        self.prewarm.state()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            renders: self.renders.load(Ordering::Relaxed),
            extractions: self.extractions.load(Ordering::Relaxed),
            cached: self.images.len(),
            failed: self.images.failures(),
        }
    }
}
