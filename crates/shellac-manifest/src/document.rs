//! Manifest loading and the per-page document model.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::asset::{AssetEntry, AssetSpec, Attrs};

/// The parsed `shellac.toml` manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project root that local asset patterns are expanded against
    #[serde(default = "default_root")]
    pub root: String,

    /// Documents to assemble, in manifest order
    #[serde(default, rename = "page")]
    pub pages: Vec<Page>,
}

/// One document to assemble.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Output path(s) the document is written to
    pub dest: Dest,

    /// Doctype rendered on the first line
    #[serde(default = "default_doctype")]
    pub doctype: String,

    /// Character encoding, rendered as a `<meta charset>` element
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// Meta entries, rendered in manifest order
    #[serde(default)]
    pub meta: Vec<MetaEntry>,

    /// Mixed script/stylesheet assets, dispatched by file extension
    #[serde(default)]
    pub vendors: Option<AssetSpec>,

    /// Script assets, rendered at the end of the body
    #[serde(default)]
    pub scripts: Option<AssetSpec>,

    /// Stylesheet assets, rendered in the head
    #[serde(default)]
    pub stylesheets: Option<AssetSpec>,

    /// Body content and attributes
    #[serde(default)]
    pub body: Option<Body>,
}

/// Destination path(s) for a page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Dest {
    /// A single output path
    One(String),

    /// Several output paths receiving the same document
    Many(Vec<String>),
}

impl Dest {
    /// The configured output paths, in order.
    pub fn paths(&self) -> &[String] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        }
    }
}

/// One meta tag, keyed by which of `name`, `http-equiv`, or `charset` is set.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetaEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "http-equiv")]
    pub http_equiv: Option<String>,

    #[serde(default)]
    pub charset: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl MetaEntry {
    /// A `<meta charset="...">` entry.
    pub fn charset(encoding: impl Into<String>) -> Self {
        Self {
            charset: Some(encoding.into()),
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.http_equiv.is_none() && self.charset.is_none()
    }
}

/// The document body: either inner HTML or content plus `<body>` attributes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Body {
    /// Inner HTML
    Html(String),

    /// Inner HTML with attributes on the `<body>` tag
    Detailed(BodySpec),
}

/// Body content with explicit attributes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BodySpec {
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub attributes: Attrs,
}

impl Body {
    /// The inner HTML of the body.
    pub fn content(&self) -> &str {
        match self {
            Self::Html(content) => content,
            Self::Detailed(spec) => &spec.content,
        }
    }

    /// Attributes for the `<body>` tag, if any were configured.
    pub fn attributes(&self) -> Option<&Attrs> {
        match self {
            Self::Html(_) => None,
            Self::Detailed(spec) => Some(&spec.attributes),
        }
    }
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Read(String),

    #[error("Failed to parse manifest: {0}")]
    Parse(String),

    #[error("Page {page} has an empty destination list")]
    MissingDest { page: usize },

    #[error("Meta entry {index} on {dest} has none of name, http-equiv, or charset")]
    EmptyMeta { dest: String, index: usize },

    #[error("Asset entry {index} in {list} on {dest} needs a path or inline content")]
    EmptyAsset {
        dest: String,
        list: &'static str,
        index: usize,
    },
}

impl Manifest {
    /// Load and validate a manifest from a file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ManifestError::Read(format!("{}: {}", path.display(), e)))?;

        content.parse()
    }

    fn validate(&self) -> Result<(), ManifestError> {
        for (page_index, page) in self.pages.iter().enumerate() {
            if page.dest.paths().is_empty() {
                return Err(ManifestError::MissingDest { page: page_index });
            }

            let dest = page.dest.paths()[0].clone();

            for (index, entry) in page.meta.iter().enumerate() {
                if entry.is_empty() {
                    return Err(ManifestError::EmptyMeta {
                        dest: dest.clone(),
                        index,
                    });
                }
            }

            let lists = [
                ("vendors", &page.vendors),
                ("scripts", &page.scripts),
                ("stylesheets", &page.stylesheets),
            ];

            for (list, spec) in lists {
                let Some(spec) = spec else {
                    continue;
                };

                for (index, entry) in spec.iter().enumerate() {
                    if let AssetEntry::Detailed(detailed) = entry {
                        if detailed.path.is_none() && detailed.content.is_none() {
                            return Err(ManifestError::EmptyAsset {
                                dest: dest.clone(),
                                list,
                                index,
                            });
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;

        manifest.validate()?;

        Ok(manifest)
    }
}

fn default_root() -> String {
    ".".to_string()
}

fn default_doctype() -> String {
    "html".to_string()
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}
