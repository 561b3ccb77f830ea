//! Core metadata from the `[project]` table of `pyproject.toml`.
//!
//! [`project`] converts a PEP 621 [`Project`] table into the same JSON form
//! produced by [`crate::metadata::decode`]:
//!
//! - `description` -> `summary`, `classifiers` -> `classifier`,
//!   `dependencies` -> `requires_dist`
//! - `authors` / `maintainers` -> `author(_email)` / `maintainer(_email)`
//! - `urls` -> `project_url`
//! - `optional-dependencies` -> `provides_extra`, plus `requires_dist`
//!   entries with an `extra == '...'` marker
//! - `readme` -> `description` and `description_content_type`

use std::path::PathBuf;

use thiserror::Error;

pub mod model;
pub mod projector;
pub mod readme;

pub use model::{Contact, Project, PyProjectToml, Readme, ReadmeTable};
pub use projector::{project, project_relative_to};

#[derive(Debug, Error)]
pub enum Error {
    #[error("readme: no content type specified")]
    MissingContentType,

    #[error("readme: file and text are mutually exclusive")]
    FileAndText,

    #[error("readme: one of file or text must be specified")]
    MissingSource,

    #[error("readme: unsupported charset `{0}`")]
    UnsupportedCharset(String),

    #[error("readme: `{}` is not valid {charset}", path.display())]
    InvalidEncoding { path: PathBuf, charset: String },

    #[error("Invalid requirement in optional dependency group `{extra}`: `{requirement}`")]
    Requirement {
        extra: String,
        requirement: String,
        #[source]
        err: Box<uv_pep508::Pep508Error>,
    },

    #[error("Failed to add marker for optional dependency group `{extra}` to `{requirement}`")]
    Marker {
        extra: String,
        requirement: String,
        #[source]
        err: Box<uv_pep508::Pep508Error>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
