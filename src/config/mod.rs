//! Manifest configuration for `icons.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Manifest section definitions
//! │   ├── render     # [render]
//! │   ├── paths      # [paths]
//! │   └── icons      # [[icons]]
//! ├── error          # ConfigError
//! └── mod.rs         # Manifest (this file)
//! ```
//!
//! The manifest is optional: without one, the built-in icon set and default
//! render options are used, rooted at the current directory.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{IconEntry, PathsConfig, RenderConfig, default_icons};

use crate::core::{Catalog, IconAsset, IconId};
use crate::log;
use crate::pipeline::RenderOptions;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "icons.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing icons.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Resources and output directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Icon table
    #[serde(default = "default_icons")]
    pub icons: Vec<IconEntry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            render: RenderConfig::default(),
            paths: PathsConfig::default(),
            icons: default_icons(),
        }
    }
}

impl Manifest {
    /// Load the manifest at `path`.
    ///
    /// A missing file falls back to defaults rooted at the current directory,
    /// unless `explicit` is set (the user named the file), in which case it
    /// is an error.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let mut manifest = if path.exists() {
            Self::from_path(path)?
        } else if explicit {
            return Err(ConfigError::Io(
                path.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "manifest not found"),
            ));
        } else {
            crate::debug!("config"; "no {} found, using built-in icon set", path.display());
            Self::default()
        };

        manifest.root = match path.parent() {
            Some(parent) if path.exists() && !parent.as_os_str().is_empty() => {
                parent.to_path_buf()
            }
            _ => std::env::current_dir().map_err(|e| ConfigError::Io(PathBuf::from("."), e))?,
        };

        manifest.validate()?;
        Ok(manifest)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (manifest, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(manifest)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let manifest = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((manifest, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        self.render.validate(&mut errors);

        if self.icons.is_empty() {
            errors.push("icons must list at least one icon".into());
        }
        let mut seen = FxHashSet::default();
        for icon in &self.icons {
            if icon.id.trim().is_empty() {
                errors.push("icons.id must not be empty".into());
            } else if !IconId::is_file_stem(&icon.id) {
                errors.push(format!("icons.id `{}` must be a plain file name", icon.id));
            } else if !seen.insert(icon.id.as_str()) {
                errors.push(format!("icons.id `{}` is listed more than once", icon.id));
            }
            if icon.source.as_os_str().is_empty() {
                errors.push(format!("icons `{}` has an empty source", icon.id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Join `path` onto the manifest root unless absolute.
    pub fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Resolved resources directory, honoring a CLI override.
    pub fn resources_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override.map_or_else(|| self.root_join(&self.paths.resources), Path::to_path_buf)
    }

    /// Resolved output directory, honoring a CLI override.
    pub fn output_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override.map_or_else(|| self.root_join(&self.paths.output), Path::to_path_buf)
    }

    /// Build the icon catalog with sources resolved against `resources`.
    pub fn catalog(&self, resources: &Path) -> Result<Catalog, ConfigError> {
        let assets = self
            .icons
            .iter()
            .map(|entry| {
                let source = if entry.source.is_absolute() {
                    entry.source.clone()
                } else {
                    resources.join(&entry.source)
                };
                IconAsset::new(&entry.id, source, &entry.fallback)
            })
            .collect();

        Catalog::new(assets).map_err(|dup| {
            ConfigError::Validation(format!("icons.id `{dup}` is listed more than once"))
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render.to_options()
    }
}

/// Parse manifest content without touching the filesystem.
impl FromStr for Manifest {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let (manifest, _) = Self::parse_with_ignored(content)?;
        Ok(manifest)
    }
}

// ============================================================================
// tests
// ============================================================================
