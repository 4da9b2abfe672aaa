//! Initialize a starter project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing shellac...");

    let manifest_path = Path::new("shellac.toml");

    if manifest_path.exists() && !yes {
        tracing::warn!("shellac.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(manifest_path, DEFAULT_MANIFEST).context("Failed to write shellac.toml")?;
    tracing::info!("Created shellac.toml");

    let styles_dir = Path::new("src/styles");
    if !styles_dir.exists() {
        fs::create_dir_all(styles_dir).context("Failed to create styles directory")?;
    }

    let stylesheet_path = styles_dir.join("main.css");
    if !stylesheet_path.exists() || yes {
        fs::write(&stylesheet_path, DEFAULT_STYLESHEET).context("Failed to write main.css")?;
        tracing::info!("Created src/styles/main.css");
    }

    let scripts_dir = Path::new("src/scripts");
    if !scripts_dir.exists() {
        fs::create_dir_all(scripts_dir).context("Failed to create scripts directory")?;
    }

    let script_path = scripts_dir.join("app.js");
    if !script_path.exists() || yes {
        fs::write(&script_path, DEFAULT_SCRIPT).context("Failed to write app.js")?;
        tracing::info!("Created src/scripts/app.js");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'shellac build' to assemble dist/index.html.");

    Ok(())
}

const DEFAULT_MANIFEST: &str = r#"# Shellac configuration

# Project root that asset patterns are expanded against
root = "."

[[page]]
# Output path for the assembled document
dest = "dist/index.html"
doctype = "html"
encoding = "UTF-8"
title = "My Site"
stylesheets = "src/styles/**/*.css"
scripts = "src/scripts/**/*.js"

[[page.meta]]
name = "viewport"
content = "width=device-width, initial-scale=1"

[page.body]
content = "<h1>It works</h1>"
"#;

const DEFAULT_STYLESHEET: &str = r#"body {
  font-family: system-ui, sans-serif;
  margin: 2rem auto;
  max-width: 40rem;
}
"#;

const DEFAULT_SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', () => {
  console.log('shellac page ready');
});
"#;
