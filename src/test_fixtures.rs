//! Vendor template fixtures shared by unit tests.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::core::{Catalog, IconAsset};

/// A variant group holding one filled `side x side` square at `(x, y)`.
pub fn square_variant(id: &str, x: f32, y: f32, side: f32) -> String {
    format!(r#"<g id="{id}"><path d="M {x} {y} h {side} v {side} h -{side} Z"/></g>"#)
}

/// A 3300x2200 template shaped like the vendor export: comments, a
/// doctype, notes and guides around a `Symbols` group holding `variants`.
pub fn vendor_document(variants: &[String]) -> String {
    let mut symbols = String::new();
    for variant in variants {
        let _ = writeln!(symbols, "    {variant}");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!--Generator: Apple Native CoreSVG 232.5-->
<!DOCTYPE svg
PUBLIC "-//W3C//DTD SVG 1.1//EN"
       "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="3300" height="2200">
 <!--glyph: "", point size: 100.0, font version: "19.0d1e3"-->
 <style>.SFSymbolsPreview{{fill:none}}</style>
 <defs><linearGradient id="unused"/></defs>
 <g id="Notes">
  <rect height="2200" id="artboard" style="fill:white;opacity:1" width="3300" x="0" y="0"/>
  <text>Weight/Scale Variations</text>
 </g>
 <g id="Guides">
  <line fill="none" stroke="rgb(39,170,225)" stroke-width="0.5" x1="263" x2="3036" y1="292" y2="292"/>
 </g>
 <g id="Symbols">
{symbols} </g>
</svg>
"#
    )
}

/// Write one template per `(id, document)` into `dir` and build a catalog
/// over them, in order.
pub fn catalog_in(dir: &Path, icons: &[(&str, String)]) -> Catalog {
    let assets = icons
        .iter()
        .map(|(id, document)| {
            let source = dir.join(format!("{id}.svg"));
            fs::write(&source, document).unwrap();
            IconAsset::new(id, source, format!("{id}.fallback"))
        })
        .collect();
    Catalog::new(assets).unwrap()
}
