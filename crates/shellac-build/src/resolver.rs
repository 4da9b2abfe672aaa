//! Asset resolution: external URLs, glob expansion, and path rewriting.

use std::path::{Component, Path, PathBuf};

use globset::Glob;
use regex::Regex;
use walkdir::WalkDir;

use shellac_manifest::{AssetEntry, AssetSpec, Attrs};

/// An asset ready for element rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAsset {
    /// A local file, rewritten relative to the output directory
    Local { path: String, attrs: Attrs },

    /// An external URL, passed through verbatim
    External { url: String, attrs: Attrs },

    /// Inline element content; `path` is kept only as a dispatch hint
    Inline {
        path: Option<String>,
        content: String,
        attrs: Attrs,
    },
}

/// Errors that can occur while resolving assets.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid asset pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },
}

/// Resolves asset specifications against a project root and an output
/// directory.
pub struct AssetResolver {
    root: PathBuf,
    dest_dir: PathBuf,
    external: Regex,
}

impl AssetResolver {
    /// Create a resolver for one output directory.
    ///
    /// `root` and `dest_dir` must be anchored at the same base (both relative
    /// to the working directory, or both absolute).
    pub fn new(root: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dest_dir: dest_dir.into(),
            external: Regex::new(r"^\w+://").expect("scheme pattern is valid"),
        }
    }

    /// Resolve an asset specification into an ordered list of assets.
    ///
    /// Entries resolve in configuration order; glob matches are sorted so
    /// identical inputs produce identical output.
    pub fn resolve(&self, spec: Option<&AssetSpec>) -> Result<Vec<ResolvedAsset>, ResolveError> {
        let mut resolved = Vec::new();

        let Some(spec) = spec else {
            return Ok(resolved);
        };

        for entry in spec.iter() {
            self.resolve_entry(entry, &mut resolved)?;
        }

        Ok(resolved)
    }

    fn resolve_entry(
        &self,
        entry: &AssetEntry,
        resolved: &mut Vec<ResolvedAsset>,
    ) -> Result<(), ResolveError> {
        match entry {
            AssetEntry::Path(path) => {
                if self.is_external(path) {
                    resolved.push(ResolvedAsset::External {
                        url: path.clone(),
                        attrs: Attrs::new(),
                    });
                } else {
                    resolved.extend(self.expand_pattern(path)?.into_iter().map(|path| {
                        ResolvedAsset::Local {
                            path,
                            attrs: Attrs::new(),
                        }
                    }));
                }
            }

            // Detailed entries bypass path resolution entirely: inline
            // content wins, and an explicit path is kept as written.
            AssetEntry::Detailed(detailed) => {
                if let Some(content) = &detailed.content {
                    resolved.push(ResolvedAsset::Inline {
                        path: detailed.path.clone(),
                        content: content.clone(),
                        attrs: detailed.attributes.clone(),
                    });
                } else if let Some(path) = &detailed.path {
                    if self.is_external(path) {
                        resolved.push(ResolvedAsset::External {
                            url: path.clone(),
                            attrs: detailed.attributes.clone(),
                        });
                    } else {
                        resolved.push(ResolvedAsset::Local {
                            path: path.clone(),
                            attrs: detailed.attributes.clone(),
                        });
                    }
                }
                // Entries with neither path nor content are rejected at
                // manifest validation.
            }
        }

        Ok(())
    }

    /// Check whether an asset reference is an external URL.
    pub fn is_external(&self, asset: &str) -> bool {
        self.external.is_match(asset)
    }

    /// Expand a pattern against the project root and rewrite each match
    /// relative to the output directory.
    fn expand_pattern(&self, pattern: &str) -> Result<Vec<String>, ResolveError> {
        let matcher = Glob::new(pattern)
            .map_err(|e| ResolveError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?
            .compile_matcher();

        let mut matches = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());

            if matcher.is_match(relative) {
                matches.push(self.root.join(relative));
            }
        }

        matches.sort();

        if matches.is_empty() {
            tracing::warn!("No assets matched pattern: {}", pattern);
        }

        Ok(matches
            .iter()
            .map(|path| forward_slashes(&relative_to(&self.dest_dir, path)))
            .collect())
    }
}

/// Compute the path of `to` relative to the directory `from`.
///
/// Purely lexical: both paths are normalized and compared component-wise,
/// with `..` segments for the part of `from` outside the common prefix.
fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let from_components: Vec<_> = from.components().collect();
    let to_components: Vec<_> = to.components().collect();

    let common_len = from_components
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();

    for _ in common_len..from_components.len() {
        result.push("..");
    }

    for component in &to_components[common_len..] {
        result.push(component);
    }

    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// Normalize a path lexically: drop `.` segments and fold `..` into the
/// preceding component where possible.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

/// Render a relative path with forward slashes for use in a URL position.
fn forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn external_urls_pass_through() {
        let resolver = AssetResolver::new(".", "dist");
        let spec = AssetSpec::One(AssetEntry::Path(
            "http://cdn.example.com/lib.js".to_string(),
        ));

        let resolved = resolver.resolve(Some(&spec)).unwrap();

        assert_eq!(
            resolved,
            vec![ResolvedAsset::External {
                url: "http://cdn.example.com/lib.js".to_string(),
                attrs: Attrs::new(),
            }]
        );
    }

    #[test]
    fn expands_glob_relative_to_output_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("src/js/app.js"));
        touch(&root.join("src/js/util.js"));
        touch(&root.join("src/js/readme.txt"));

        let resolver = AssetResolver::new(root, root.join("dist"));
        let spec = AssetSpec::One(AssetEntry::Path("src/js/**/*.js".to_string()));

        let resolved = resolver.resolve(Some(&spec)).unwrap();

        assert_eq!(
            resolved,
            vec![
                ResolvedAsset::Local {
                    path: "../src/js/app.js".to_string(),
                    attrs: Attrs::new(),
                },
                ResolvedAsset::Local {
                    path: "../src/js/util.js".to_string(),
                    attrs: Attrs::new(),
                },
            ]
        );
    }

    #[test]
    fn literal_path_matches_only_existing_file() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("main.css"));

        let resolver = AssetResolver::new(root, root.to_path_buf());

        let found = resolver
            .resolve(Some(&AssetSpec::One(AssetEntry::Path("main.css".to_string()))))
            .unwrap();
        assert_eq!(found.len(), 1);

        let missing = resolver
            .resolve(Some(&AssetSpec::One(AssetEntry::Path("other.css".to_string()))))
            .unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn no_spec_resolves_to_nothing() {
        let resolver = AssetResolver::new(".", "dist");

        assert!(resolver.resolve(None).unwrap().is_empty());
    }

    #[test]
    fn malformed_glob_is_an_error() {
        let resolver = AssetResolver::new(".", "dist");
        let spec = AssetSpec::One(AssetEntry::Path("src/[".to_string()));

        let result = resolver.resolve(Some(&spec));

        assert!(matches!(result, Err(ResolveError::Pattern { .. })));
    }

    #[test]
    fn detailed_entry_bypasses_resolution() {
        let resolver = AssetResolver::new(".", "dist");

        let mut attrs = Attrs::new();
        attrs.insert("defer".to_string(), "defer".to_string());

        let spec = AssetSpec::One(AssetEntry::Detailed(shellac_manifest::DetailedAsset {
            path: Some("assets/kept-verbatim.js".to_string()),
            attributes: attrs.clone(),
            content: None,
        }));

        let resolved = resolver.resolve(Some(&spec)).unwrap();

        assert_eq!(
            resolved,
            vec![ResolvedAsset::Local {
                path: "assets/kept-verbatim.js".to_string(),
                attrs,
            }]
        );
    }

    #[test]
    fn inline_content_wins_over_path() {
        let resolver = AssetResolver::new(".", "dist");

        let spec = AssetSpec::One(AssetEntry::Detailed(shellac_manifest::DetailedAsset {
            path: Some("app.js".to_string()),
            attributes: Attrs::new(),
            content: Some("console.log('hi');".to_string()),
        }));

        let resolved = resolver.resolve(Some(&spec)).unwrap();

        assert_eq!(
            resolved,
            vec![ResolvedAsset::Inline {
                path: Some("app.js".to_string()),
                content: "console.log('hi');".to_string(),
                attrs: Attrs::new(),
            }]
        );
    }

    #[test]
    fn mixed_list_keeps_configuration_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("local.js"));

        let resolver = AssetResolver::new(root, root.join("out"));
        let spec = AssetSpec::Many(vec![
            AssetEntry::Path("https://cdn.example.com/first.js".to_string()),
            AssetEntry::Path("local.js".to_string()),
        ]);

        let resolved = resolver.resolve(Some(&spec)).unwrap();

        assert!(matches!(&resolved[0], ResolvedAsset::External { url, .. } if url.ends_with("first.js")));
        assert!(matches!(&resolved[1], ResolvedAsset::Local { path, .. } if path == "../local.js"));
    }

    #[test]
    fn relative_to_walks_up_and_down() {
        assert_eq!(
            relative_to(Path::new("dist/docs"), Path::new("src/app.js")),
            PathBuf::from("../../src/app.js")
        );
        assert_eq!(
            relative_to(Path::new("dist"), Path::new("dist/app.js")),
            PathBuf::from("app.js")
        );
        assert_eq!(
            relative_to(Path::new(""), Path::new("src/app.js")),
            PathBuf::from("src/app.js")
        );
    }

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(normalize(Path::new("./a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
    }
}
