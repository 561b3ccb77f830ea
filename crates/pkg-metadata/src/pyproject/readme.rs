//! Resolve the `readme` key of `[project]` into a description and its
//! content type.

use std::path::Path;

use tracing::debug;

use crate::metadata::charset::{decode_latin1, is_latin1_label, is_utf8_label};
use crate::pyproject::Error;
use crate::pyproject::model::{Readme, ReadmeTable};

/// A resolved readme: the text to use as `Description`, and its
/// `Description-Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReadme {
    pub description: String,
    pub content_type: String,
}

/// Resolve a readme. Relative paths are resolved against `root`.
pub fn resolve_readme(readme: &Readme, root: &Path) -> Result<ResolvedReadme, Error> {
    let table = match readme {
        Readme::Path(path) => ReadmeTable {
            file: Some(path.clone()),
            text: None,
            content_type: infer_content_type(path).map(ToOwned::to_owned),
            charset: Some("utf-8".to_owned()),
        },
        Readme::Table(table) => table.clone(),
    };

    let Some(content_type) = table.content_type else {
        return Err(Error::MissingContentType);
    };

    let description = match (table.text, table.file) {
        (Some(_), Some(_)) => return Err(Error::FileAndText),
        (Some(text), None) => text,
        (None, Some(file)) => {
            let charset = table.charset.as_deref().unwrap_or("utf-8");
            read_readme(&root.join(file), charset)?
        }
        (None, None) => return Err(Error::MissingSource),
    };

    Ok(ResolvedReadme {
        description,
        content_type,
    })
}

/// Infer the content type of a readme from its file extension.
fn infer_content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".md") {
        Some("text/markdown")
    } else if path.ends_with(".rst") {
        Some("text/x-rst")
    } else {
        None
    }
}

/// Read a readme file in the given charset.
fn read_readme(path: &Path, charset: &str) -> Result<String, Error> {
    debug!("Reading readme from `{}` as {charset}", path.display());
    let bytes = fs_err::read(path)?;

    if is_utf8_label(charset) {
        String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
            path: path.to_path_buf(),
            charset: charset.to_owned(),
        })
    } else if is_latin1_label(charset) {
        Ok(decode_latin1(&bytes))
    } else {
        Err(Error::UnsupportedCharset(charset.to_owned()))
    }
}
