//! Enumerated set of known icons.

use rustc_hash::FxHashMap;

use super::{IconAsset, IconId};

/// Ordered icon list with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: Vec<IconAsset>,
    index: FxHashMap<IconId, usize>,
}

impl Catalog {
    /// Build a catalog. Returns the first duplicated id on conflict.
    pub fn new(assets: Vec<IconAsset>) -> Result<Self, IconId> {
        let mut index = FxHashMap::default();
        for (i, asset) in assets.iter().enumerate() {
            if index.insert(asset.id.clone(), i).is_some() {
                return Err(asset.id.clone());
            }
        }
        Ok(Self { assets, index })
    }

    pub fn get(&self, id: &str) -> Option<&IconAsset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconAsset> {
        self.assets.iter()
    }

    pub fn assets(&self) -> &[IconAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Restrict to `ids`, keeping catalog order.
    ///
    /// Returns the first unknown id on failure.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Self, String> {
        let wanted: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        if let Some(unknown) = wanted.iter().find(|id| !self.contains(id)) {
            return Err((*unknown).to_string());
        }
        let assets = self
            .assets
            .iter()
            .filter(|a| wanted.contains(&a.id.as_str()))
            .cloned()
            .collect();
        Ok(Self::new(assets).unwrap_or_default())
    }
}
