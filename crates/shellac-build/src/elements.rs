//! HTML fragment rendering for resolved assets, meta entries, and the body.

use std::path::Path;

use shellac_manifest::{Attrs, MetaEntry};

use crate::resolver::ResolvedAsset;

/// Escape text for an HTML attribute value or text position.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Serialize an attribute map as space-joined `key="value"` pairs in
/// insertion order, with a leading space when non-empty.
pub fn attr_suffix(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, escape(value)))
        .collect();

    format!(" {}", pairs.join(" "))
}

/// Render a script element for a resolved asset.
pub fn script(asset: &ResolvedAsset) -> String {
    match asset {
        ResolvedAsset::Local { path, attrs } => {
            tracing::info!("Linking script {}", path);
            format!("<script src=\"{}\"{}></script>", escape(path), attr_suffix(attrs))
        }
        ResolvedAsset::External { url, attrs } => {
            tracing::info!("Linking script {}", url);
            format!("<script src=\"{}\"{}></script>", escape(url), attr_suffix(attrs))
        }
        // Inline content is script source, not text: emitted unescaped.
        ResolvedAsset::Inline { content, attrs, .. } => {
            format!("<script{}>{}</script>", attr_suffix(attrs), content)
        }
    }
}

/// Render a stylesheet element for a resolved asset.
pub fn stylesheet(asset: &ResolvedAsset) -> String {
    match asset {
        ResolvedAsset::Local { path, attrs } => {
            tracing::info!("Linking stylesheet {}", path);
            format!(
                "<link rel=\"stylesheet\" href=\"{}\"{}/>",
                escape(path),
                attr_suffix(attrs)
            )
        }
        ResolvedAsset::External { url, attrs } => {
            tracing::info!("Linking stylesheet {}", url);
            format!(
                "<link rel=\"stylesheet\" href=\"{}\"{}/>",
                escape(url),
                attr_suffix(attrs)
            )
        }
        ResolvedAsset::Inline { content, attrs, .. } => {
            format!("<style{}>{}</style>", attr_suffix(attrs), content)
        }
    }
}

/// Render a vendor asset, dispatching on the file extension.
///
/// `.js` renders as a script, `.css` as a stylesheet; anything else is
/// skipped with a warning.
pub fn vendor(asset: &ResolvedAsset) -> Option<String> {
    let reference = match asset {
        ResolvedAsset::Local { path, .. } => Some(path.as_str()),
        ResolvedAsset::External { url, .. } => Some(url.as_str()),
        ResolvedAsset::Inline { path, .. } => path.as_deref(),
    };

    match reference.and_then(extension) {
        Some("js") => Some(script(asset)),
        Some("css") => Some(stylesheet(asset)),
        _ => {
            tracing::warn!(
                "Skipping vendor asset without a .js or .css extension: {}",
                reference.unwrap_or("<inline>")
            );
            None
        }
    }
}

/// Render a meta element, keyed by which of `name`, `http-equiv`, or
/// `charset` is present.
pub fn meta(entry: &MetaEntry) -> String {
    let content = entry.content.as_deref().unwrap_or("");

    if let Some(name) = &entry.name {
        format!(
            "<meta name=\"{}\" content=\"{}\"/>",
            escape(name),
            escape(content)
        )
    } else if let Some(http_equiv) = &entry.http_equiv {
        format!(
            "<meta http-equiv=\"{}\" content=\"{}\"/>",
            escape(http_equiv),
            escape(content)
        )
    } else if let Some(charset) = &entry.charset {
        format!("<meta charset=\"{}\"/>", escape(charset))
    } else {
        String::new()
    }
}

fn extension(reference: &str) -> Option<&str> {
    Path::new(reference).extension().and_then(|e| e.to_str())
}
