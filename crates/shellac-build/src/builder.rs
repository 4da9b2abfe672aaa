//! Document assembly and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use shellac_manifest::{Manifest, MetaEntry, Page};

use crate::elements;
use crate::resolver::{AssetResolver, ResolveError};
use crate::templates::{DocumentContext, TemplateEngine};

/// Result of assembling every page in a manifest.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of documents written
    pub documents: usize,

    /// Number of assets linked across all documents
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during assembly.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to resolve assets: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to render document: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Assembles the documents described by a manifest.
pub struct DocumentBuilder {
    manifest: Manifest,
    root: PathBuf,
    templates: TemplateEngine,
}

impl DocumentBuilder {
    /// Create a builder for a loaded manifest.
    pub fn new(manifest: Manifest) -> Self {
        let root = PathBuf::from(&manifest.root);

        Self {
            manifest,
            root,
            templates: TemplateEngine::new(),
        }
    }

    /// Assemble every page, each destination to completion before the next.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let mut documents = 0;
        let mut assets = 0;

        for page in &self.manifest.pages {
            for dest in page.dest.paths() {
                assets += self.build_document(page, Path::new(dest))?;
                documents += 1;
            }
        }

        Ok(BuildResult {
            documents,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Assemble one document: create the output directory, resolve assets
    /// against it, render, and write once.
    fn build_document(&self, page: &Page, dest: &Path) -> Result<usize, BuildError> {
        let dest_dir = dest.parent().unwrap_or(Path::new(""));

        if !dest_dir.as_os_str().is_empty() && !dest_dir.exists() {
            fs::create_dir_all(dest_dir).map_err(|e| BuildError::Write(e.to_string()))?;
            tracing::info!("Create path {}", dest_dir.display());
        }

        tracing::debug!("Doctype set to {}", page.doctype);
        tracing::debug!("Encoding set to {}", page.encoding);

        let resolver = AssetResolver::new(self.root.clone(), dest_dir);

        let vendors: Vec<String> = resolver
            .resolve(page.vendors.as_ref())?
            .iter()
            .filter_map(elements::vendor)
            .collect();

        let stylesheets: Vec<String> = resolver
            .resolve(page.stylesheets.as_ref())?
            .iter()
            .map(elements::stylesheet)
            .collect();

        let scripts: Vec<String> = resolver
            .resolve(page.scripts.as_ref())?
            .iter()
            .map(elements::script)
            .collect();

        let meta: Vec<String> = page.meta.iter().map(elements::meta).collect();

        let assets = vendors.len() + stylesheets.len() + scripts.len();

        let body = page.body.as_ref();

        let ctx = DocumentContext {
            doctype: page.doctype.clone(),
            title: page.title.clone(),
            encoding: elements::meta(&MetaEntry::charset(page.encoding.clone())),
            meta,
            vendors,
            stylesheets,
            scripts,
            body_attrs: body
                .and_then(|b| b.attributes())
                .map(elements::attr_suffix)
                .unwrap_or_default(),
            body: body.map(|b| b.content().to_string()).unwrap_or_default(),
        };

        let html = self
            .templates
            .render_document(&ctx)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        fs::write(dest, html).map_err(|e| BuildError::Write(e.to_string()))?;

        tracing::info!("Created {}", dest.display());

        Ok(assets)
    }
}
