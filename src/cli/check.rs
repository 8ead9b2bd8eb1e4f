//! `check` command: content padding of rendered PNGs.
//!
//! Content touching an edge usually means the glyph was clipped; a blank
//! image means rendering produced nothing.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use rayon::prelude::*;

use super::CheckArgs;
use crate::config::Manifest;
use crate::image::{ContentBounds, content_bounds};
use crate::log;
use crate::utils::{list_pngs, plural_count};

/// Content measurements of one image.
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub content: Option<ContentBounds>,
}

impl ImageReport {
    pub fn is_blank(&self) -> bool {
        self.content.is_none()
    }

    pub fn touches_edge(&self) -> bool {
        self.content
            .is_some_and(|b| b.touches_edge(self.width, self.height))
    }

    pub fn is_flagged(&self) -> bool {
        self.is_blank() || self.touches_edge()
    }
}

impl fmt::Display for ImageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let status = if self.is_flagged() {
            "⚠".yellow().to_string()
        } else {
            "✓".green().to_string()
        };

        match self.content {
            None => write!(f, "{status} {name:35} blank"),
            Some(b) => {
                let (top, bottom, left, right) = b.padding(self.width, self.height);
                write!(
                    f,
                    "{status} {name:35} size={:2}x{:2} padding=(t:{top:2},b:{bottom:2},l:{left:2},r:{right:2})",
                    b.width(),
                    b.height()
                )
            }
        }
    }
}

/// Measure content of the PNG at `path`, counting pixels with alpha above
/// `threshold`.
pub fn inspect(path: &Path, threshold: u8) -> Result<ImageReport> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    Ok(ImageReport {
        path: path.to_path_buf(),
        width: image.width(),
        height: image.height(),
        content: content_bounds(&image, threshold),
    })
}

/// Inspect every PNG in `dir`, sorted by name.
pub fn inspect_dir(dir: &Path, threshold: u8) -> Result<Vec<ImageReport>> {
    let pngs = list_pngs(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    pngs.par_iter().map(|path| inspect(path, threshold)).collect()
}

pub fn check_images(args: &CheckArgs, manifest: &Manifest) -> Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| manifest.output_dir(None));

    let reports = inspect_dir(&dir, args.threshold)?;
    if reports.is_empty() {
        log!("check"; "no png files in {}", dir.display());
        return Ok(());
    }

    log!("check"; "checking {} for clipped content", plural_count(reports.len(), "image"));
    for report in &reports {
        println!("{report}");
    }

    let flagged = reports.iter().filter(|r| r.is_flagged()).count();
    if flagged > 0 {
        bail!("{} flagged", plural_count(flagged, "image"));
    }
    log!("check"; "all clear");
    Ok(())
}
