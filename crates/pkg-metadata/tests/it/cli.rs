//! End-to-end tests for the `pkg-metadata` subcommands.

use tempfile::TempDir;

use crate::common::{INSTA_FILTERS, fixture, pkg_metadata_command};
use crate::pkg_metadata_snapshot;

#[test]
fn to_json() {
    let mut cmd = pkg_metadata_command();
    cmd.arg("to-json").arg(fixture("basic", "METADATA"));

    pkg_metadata_snapshot!(INSTA_FILTERS, cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "metadata_version": "2.1",
      "name": "example",
      "version": "1.0",
      "summary": "An example package",
      "keywords": [
        "one",
        "two",
        "three"
      ],
      "author_email": "Jane Doe <jane@example.com>",
      "classifier": [
        "Programming Language :: Python",
        "License :: OSI Approved :: MIT License"
      ],
      "requires_dist": [
        "requests"
      ],
      "requires_python": ">=3.8",
      "description": "A long description.\n"
    }
    ----- stderr -----
    "#);
}

#[test]
fn from_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("metadata.json");
    fs_err::write(
        &input,
        r#"{"name": "foo", "version": "1.0", "keywords": ["a", "b"], "license": null, "description": "Body"}"#,
    )
    .unwrap();

    let mut cmd = pkg_metadata_command();
    cmd.arg("from-json").arg(&input);

    pkg_metadata_snapshot!(INSTA_FILTERS, cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Name: foo
    Version: 1.0
    Keywords: a,b

    Body
    ----- stderr -----
    ");
}

#[test]
fn from_json_invalid() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("metadata.json");
    fs_err::write(&input, "[1, 2, 3]").unwrap();

    let output = pkg_metadata_command()
        .arg("from-json")
        .arg(&input)
        .output()
        .expect("Failed to execute pkg-metadata");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Invalid JSON metadata"), "{stderr}");
}

#[test]
fn pyproject_json() {
    let mut cmd = pkg_metadata_command();
    cmd.arg("pyproject")
        .arg(fixture("pyproject-readme", "pyproject.toml"));

    pkg_metadata_snapshot!(INSTA_FILTERS, cmd, @r##"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "metadata_version": null,
      "name": "example",
      "version": "0.1",
      "summary": "An example package",
      "requires_python": ">=3.8",
      "keywords": [
        "packaging",
        "metadata"
      ],
      "classifier": [
        "Programming Language :: Python :: 3"
      ],
      "requires_dist": [
        "requests"
      ],
      "author": "John Doe",
      "author_email": "Jane Doe <jane@example.com>",
      "project_url": [
        "Home: https://example.com",
        "Source: https://example.com/source"
      ],
      "description_content_type": "text/markdown",
      "description": "# Example\n\nAn example readme.\n"
    }
    ----- stderr -----
    "##);
}

#[test]
fn pyproject_metadata() {
    let mut cmd = pkg_metadata_command();
    cmd.arg("pyproject")
        .arg(fixture("pyproject-readme", "pyproject.toml"))
        .args(["--format", "metadata"]);

    pkg_metadata_snapshot!(INSTA_FILTERS, cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Name: example
    Version: 0.1
    Summary: An example package
    Description-Content-Type: text/markdown
    Keywords: packaging,metadata
    Author: John Doe
    Author-email: Jane Doe <jane@example.com>
    Classifier: Programming Language :: Python :: 3
    Requires-Dist: requests
    Requires-Python: >=3.8
    Project-URL: Home: https://example.com
    Project-URL: Source: https://example.com/source

    # Example

    An example readme.
    ----- stderr -----
    ");
}

#[test]
fn pyproject_without_project_table() {
    let dir = TempDir::new().unwrap();
    fs_err::write(
        dir.path().join("pyproject.toml"),
        "[tool.black]\nline-length = 88\n",
    )
    .unwrap();

    let mut cmd = pkg_metadata_command();
    cmd.current_dir(dir.path()).arg("pyproject");

    pkg_metadata_snapshot!(INSTA_FILTERS, cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: No `[project]` table found in `pyproject.toml`
    ");
}

#[test]
fn pyproject_missing_file() {
    let dir = TempDir::new().unwrap();

    let output = pkg_metadata_command()
        .current_dir(dir.path())
        .arg("pyproject")
        .output()
        .expect("Failed to execute pkg-metadata");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("failed to read `pyproject.toml`"), "{stderr}");
    assert!(stderr.contains("Caused by"), "{stderr}");
}

#[test]
fn pyproject_readme_error() {
    let dir = TempDir::new().unwrap();
    fs_err::write(
        dir.path().join("pyproject.toml"),
        "[project]\nname = \"foo\"\nreadme = \"README.txt\"\n",
    )
    .unwrap();

    let output = pkg_metadata_command()
        .current_dir(dir.path())
        .arg("pyproject")
        .output()
        .expect("Failed to execute pkg-metadata");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("no content type specified"), "{stderr}");
}
