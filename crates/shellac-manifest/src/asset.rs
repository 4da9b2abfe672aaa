//! Asset specifications: paths, URLs, glob patterns, and detailed entries.

use indexmap::IndexMap;
use serde::Deserialize;

/// An insertion-ordered attribute map for a rendered element.
pub type Attrs = IndexMap<String, String>;

/// The asset list configured for one slot (vendors, scripts, or stylesheets).
///
/// Accepts either a single entry or an ordered list of entries, so
/// `scripts = "src/**/*.js"` and `scripts = ["a.js", "b.js"]` both work.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AssetSpec {
    /// A single path, URL, glob pattern, or detailed entry
    One(AssetEntry),

    /// An ordered list of entries
    Many(Vec<AssetEntry>),
}

impl AssetSpec {
    /// Iterate the entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        match self {
            Self::One(entry) => std::slice::from_ref(entry).iter(),
            Self::Many(entries) => entries.iter(),
        }
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(entries) => entries.len(),
        }
    }

    /// Whether no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One configured asset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AssetEntry {
    /// A local path, glob pattern, or external URL
    Path(String),

    /// An entry with explicit attributes and/or inline content
    Detailed(DetailedAsset),
}

/// A detailed asset entry.
///
/// Detailed entries bypass path resolution: an explicit `path` is emitted
/// verbatim and inline `content` produces an inline element instead of a
/// referencing tag.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DetailedAsset {
    /// Path or URL, kept as written
    #[serde(default)]
    pub path: Option<String>,

    /// Attributes for the rendered element, in insertion order
    #[serde(default)]
    pub attributes: Attrs,

    /// Inline element content, overriding any path reference
    #[serde(default)]
    pub content: Option<String>,
}
