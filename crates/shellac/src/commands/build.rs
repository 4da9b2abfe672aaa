//! Document assembly command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shellac_build::DocumentBuilder;
use shellac_manifest::Manifest;

/// Run the build command.
pub fn run(manifest_path: &Path, root: Option<PathBuf>) -> Result<()> {
    tracing::info!("Assembling documents...");

    let mut manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    if manifest.pages.is_empty() {
        tracing::warn!("No pages configured in {}", manifest_path.display());
        return Ok(());
    }

    if let Some(root) = root {
        manifest.root = root.display().to_string();
    }

    let result = DocumentBuilder::new(manifest).build()?;

    tracing::info!(
        "Assembled {} documents with {} assets in {}ms",
        result.documents,
        result.assets,
        result.duration_ms
    );

    Ok(())
}
