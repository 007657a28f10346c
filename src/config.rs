/// Runtime configuration
///
/// The only configurable input is where the catalog comes from:
/// - `COMPRO_CATALOG` environment variable naming a JSON file
/// - `<config dir>/compro-store/catalog.json` if present
///   (Linux: ~/.config, macOS: ~/Library/Application Support, Windows: %APPDATA%)
/// - otherwise the catalog compiled into the binary

use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::state::catalog::Catalog;

/// Environment variable overriding the catalog location
pub const CATALOG_ENV: &str = "COMPRO_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogSource,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        let env_path = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
        Self::resolve(env_path, Self::default_catalog_path())
    }

    fn resolve(env_path: Option<PathBuf>, default_path: Option<PathBuf>) -> Self {
        let catalog = match (env_path, default_path) {
            (Some(path), _) => CatalogSource::File(path),
            (None, Some(path)) if path.is_file() => CatalogSource::File(path),
            _ => CatalogSource::Builtin,
        };
        Config { catalog }
    }

    fn default_catalog_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("compro-store");
        path.push("catalog.json");
        Some(path)
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            CatalogSource::Builtin => Catalog::builtin(),
            CatalogSource::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    tracing::info!(path = %path.display(), "loading catalog override");
    Catalog::load(path)
}
