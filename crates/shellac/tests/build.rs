use std::fs;

use assert_cmd::Command;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const MANIFEST: &str = r#"
root = "."

[[page]]
dest = "dist/index.html"
title = "Example"
stylesheets = "src/styles/**/*.css"
scripts = ["src/scripts/app.js", "http://cdn.example.com/lib.js"]

[[page.meta]]
name = "description"
content = "An assembled page"

[page.body]
content = "<h1>Hello</h1>"
"#;

#[test]
fn builds_documents_from_manifest() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("shellac.toml"), MANIFEST)?;
    fs::create_dir_all(tmp.path().join("src/styles"))?;
    fs::create_dir_all(tmp.path().join("src/scripts"))?;
    fs::write(tmp.path().join("src/styles/main.css"), "body {}")?;
    fs::write(tmp.path().join("src/scripts/app.js"), "")?;

    Command::cargo_bin("shellac")?
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created dist/index.html"))
        .stdout(predicates::str::contains("Assembled 1 documents"));

    let html = fs::read_to_string(tmp.path().join("dist/index.html"))?;
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Example</title>"));
    assert!(html.contains("href=\"../src/styles/main.css\""));
    assert!(html.contains("src=\"../src/scripts/app.js\""));
    assert!(html.contains("src=\"http://cdn.example.com/lib.js\""));
    assert!(html.contains("<meta name=\"description\" content=\"An assembled page\"/>"));
    assert!(html.contains("<h1>Hello</h1>"));

    Ok(())
}

#[test]
fn build_fails_without_manifest() -> TestResult {
    let tmp = tempfile::tempdir()?;

    Command::cargo_bin("shellac")?
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to load"));

    Ok(())
}

#[test]
fn manifest_flag_selects_file() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(
        tmp.path().join("site.toml"),
        "[[page]]\ndest = \"out.html\"\ntitle = \"Alt\"\n",
    )?;

    Command::cargo_bin("shellac")?
        .current_dir(tmp.path())
        .args(["--manifest", "site.toml", "build"])
        .assert()
        .success();

    let html = fs::read_to_string(tmp.path().join("out.html"))?;
    assert!(html.contains("<title>Alt</title>"));

    Ok(())
}

#[test]
fn build_warns_on_empty_manifest() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("shellac.toml"), "root = \".\"\n")?;

    Command::cargo_bin("shellac")?
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicates::str::contains("No pages configured"));

    Ok(())
}

#[test]
fn invalid_manifest_reports_validation_error() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(
        tmp.path().join("shellac.toml"),
        "[[page]]\ndest = \"out.html\"\n\n[[page.meta]]\ncontent = \"orphaned\"\n",
    )?;

    Command::cargo_bin("shellac")?
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicates::str::contains("none of name, http-equiv, or charset"));

    Ok(())
}
