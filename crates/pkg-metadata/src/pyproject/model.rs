//! Data model types for the `[project]` table of `pyproject.toml` (PEP 621).
//!
//! Only the keys that map onto core metadata are modeled; everything else in
//! the table is ignored during deserialization.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::pyproject::Error;

/// A `pyproject.toml` file, of which only `[project]` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PyProjectToml {
    /// The `[project]` table.
    pub project: Option<Project>,
}

impl PyProjectToml {
    /// Parse a `pyproject.toml` from a string.
    pub fn from_string(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a `pyproject.toml` from the given path.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = fs_err::read_to_string(path)?;
        Self::from_string(&content)
    }
}

/// The `[project]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    pub name: Option<String>,
    pub version: Option<String>,
    /// One-line summary; becomes `Summary`.
    pub description: Option<String>,
    #[serde(alias = "requires_python")]
    pub requires_python: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub classifiers: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
    pub dynamic: Option<Vec<String>>,
    #[serde(default)]
    pub authors: Vec<Contact>,
    #[serde(default)]
    pub maintainers: Vec<Contact>,
    /// Project URLs by label, in document order.
    pub urls: Option<IndexMap<String, String>>,
    /// Optional dependency groups (extras), in document order.
    #[serde(default)]
    pub optional_dependencies: IndexMap<String, Vec<String>>,
    pub readme: Option<Readme>,
}

/// An entry in `authors` or `maintainers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The `readme` key: either a path or a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Readme {
    /// `readme = "README.md"`: the content type is inferred from the suffix.
    Path(String),
    /// `readme = { file = "README.txt", content-type = "text/plain" }`.
    Table(ReadmeTable),
}

/// The table form of `readme`.
///
/// `file` and `text` are mutually exclusive; this is checked when the readme
/// is resolved rather than during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReadmeTable {
    pub file: Option<String>,
    pub text: Option<String>,
    pub content_type: Option<String>,
    pub charset: Option<String>,
}
