//! `[[icons]]` table configuration.
//!
//! # Example
//!
//! ```toml
//! [[icons]]
//! id = "icon.resin"                                   # Output name: icon.resin.png
//! source = "icon.resin.symbolset/resin.icon.svg"      # Relative to [paths].resources
//! fallback = "moon.fill"                              # Glyph shown when rendering fails
//! ```
//!
//! Omitting the table entirely selects the built-in widget icon set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use crate::core::DEFAULT_FALLBACK;

/// One icon of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub id: String,
    pub source: PathBuf,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl IconEntry {
    fn builtin(id: &str, source: &str, fallback: &str) -> Self {
        Self {
            id: id.to_string(),
            source: PathBuf::from(source),
            fallback: fallback.to_string(),
        }
    }
}

/// Built-in widget icon set.
pub fn default_icons() -> Vec<IconEntry> {
    [
        ("icon.info.unavailable", "icon.info.unavailable.symbolset/icon.info.unavailable.svg", "exclamationmark.circle"),
        ("icon.resin", "icon.resin.symbolset/resin.icon.svg", "moon.fill"),
        ("icon.trailblazePower", "icon.trailblazePower.symbolset/icon.trailblazePower.svg", "bolt.fill"),
        ("icon.zzzBattery", "icon.zzzBattery.symbolset/icon.zzzBattery.svg", "minus.plus.batteryblock.fill"),
        ("icon.dailyTask.gi", "icon.dailyTask.gi.symbolset/icon.dailyTask.gi.svg", "checklist"),
        ("icon.dailyTask.hsr", "icon.dailyTask.hsr.symbolset/icon.dailyTask.hsr.svg", "checklist"),
        ("icon.dailyTask.zzz", "icon.dailyTask.zzz.symbolset/icon.dailyTask.zzz.svg", "checklist"),
        ("icon.expedition.gi", "icon.expedition.gi.symbolset/icon.expedition.gi.svg", "flag.fill"),
        ("icon.expedition.hsr", "icon.expedition.hsr.symbolset/icon.expedition.hsr.svg", "flag.fill"),
        ("icon.transformer", "icon.transformer.symbolset/icon.transformer.svg", "arrow.left.arrow.right"),
        ("icon.homeCoin", "icon.homeCoin.symbolset/icon.homeCoin.svg", "dollarsign.circle"),
        ("icon.trounceBlossom", "icon.trounceBlossom.symbolset/icon.trounceBlossom.svg", "leaf.fill"),
        ("icon.echoOfWar", "icon.echoOfWar.symbolset/icon.echoOfWar.svg", "shield.lefthalf.filled"),
        ("icon.simulatedUniverse", "icon.simulatedUniverse.symbolset/icon.simulatedUniverse.svg", "globe"),
        ("icon.zzzVHSStore", "icon.zzzVHSStore.symbolset/icon.zzzVHSStore.svg", "film"),
        ("icon.zzzScratch", "icon.zzzScratch.symbolset/icon.zzzScratch.svg", "ticket"),
        ("icon.zzzBounty", "icon.zzzBounty.symbolset/icon.zzzBounty.svg", "target"),
        ("icon.zzzInvestigation", "icon.zzzInvestigation.symbolset/icon.zzzInvestigation.svg", "magnifyingglass"),
    ]
    .into_iter()
    .map(|(id, source, fallback)| IconEntry::builtin(id, source, fallback))
    .collect()
}
