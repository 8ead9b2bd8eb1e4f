//! `render` command: catalog icons to `<icon-id>.png`.
//!
//! All icons are rendered and encoded before anything touches the output
//! directory, so a failing icon leaves previous output intact.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::RenderArgs;
use crate::config::Manifest;
use crate::logger::ProgressLine;
use crate::pipeline::encode_png;
use crate::store::IconStore;
use crate::utils::{plural_count, write_atomic};
use crate::{debug, log};

/// Render the selected icons of `manifest` into the output directory.
pub fn render_icons(args: &RenderArgs, manifest: &Manifest) -> Result<()> {
    let resources = manifest.resources_dir(args.resources.as_deref());
    let output = manifest.output_dir(args.output.as_deref());

    let catalog = manifest.catalog(&resources)?;
    let catalog = if args.icons.is_empty() {
        catalog
    } else {
        catalog
            .select(&args.icons)
            .map_err(|id| anyhow::anyhow!("unknown icon `{id}`"))?
    };

    debug!("render"; "resources: {}", resources.display());
    let store = IconStore::new(catalog, manifest.render_options());
    render_to(&store, &output).map(|_| ())
}

/// Render every icon of `store` and write them into `output`.
///
/// Returns the written paths in catalog order.
pub fn render_to(store: &IconStore, output: &Path) -> Result<Vec<PathBuf>> {
    let total = store.catalog().len();
    log!("render"; "rendering {}", plural_count(total, "icon"));

    let progress = ProgressLine::new("render", &[("icons", total)]);
    store.prewarm_with(|_, _| progress.inc("icons"));
    progress.finish();

    let mut artifacts = Vec::with_capacity(total);
    let mut failed = 0;
    for asset in store.catalog().iter() {
        let encoded = store
            .image(asset.id.as_str())
            .and_then(|image| encode_png(&image));
        match encoded {
            Ok(data) => artifacts.push((output.join(asset.id.file_name()), data)),
            Err(e) => {
                log!("error"; "{} ({}): {}", asset.id, asset.source.display(), e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!(
            "{} failed, nothing written to {}",
            plural_count(failed, "icon"),
            output.display()
        );
    }

    let mut written = Vec::with_capacity(artifacts.len());
    for (path, data) in artifacts {
        write_atomic(&path, &data).with_context(|| format!("failed to write {}", path.display()))?;
        log!("render"; "{} ({} bytes)", path.display(), data.len());
        written.push(path);
    }
    Ok(written)
}
