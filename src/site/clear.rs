/// Removal of generated site artifacts.
use std::fs;
use std::path::Path;

use super::errors::SiteError;

/// Artifact paths removed by `sitecli clear`, relative to the site directory.
pub const GENERATED_PATHS: &[&str] = &["build", ".docusaurus", "node_modules/.cache"];

/// Result for one artifact path.
#[derive(Debug, Clone)]
pub struct ClearedPath {
    /// The artifact path, relative to the site directory.
    pub path: String,
    /// Whether the path existed and was removed.
    pub removed: bool,
}

/// Remove every generated artifact under `site_dir` that exists.
///
/// # Errors
///
/// Returns `SiteError::Io` when an existing artifact cannot be removed.
pub fn clear_generated(site_dir: &Path) -> Result<Vec<ClearedPath>, SiteError> {
    let mut results = Vec::with_capacity(GENERATED_PATHS.len());
    for rel in GENERATED_PATHS {
        let full = site_dir.join(rel);
        let removed = if full.is_dir() {
            fs::remove_dir_all(&full).map_err(|source| SiteError::Io {
                path: full.clone(),
                source,
            })?;
            true
        } else if full.is_file() {
            fs::remove_file(&full).map_err(|source| SiteError::Io {
                path: full.clone(),
                source,
            })?;
            true
        } else {
            false
        };
        results.push(ClearedPath {
            path: (*rel).to_owned(),
            removed,
        });
    }
    Ok(results)
}
