//! Projection of `[project]` onto core metadata fields.

use std::path::Path;
use std::str::FromStr;

use uv_pep508::{MarkerTree, Requirement, VerbatimUrl};

use crate::metadata::{FieldValue, Metadata};
use crate::pyproject::Error;
use crate::pyproject::model::{Contact, Project};
use crate::pyproject::readme::resolve_readme;

/// Convert a `[project]` table into core metadata in JSON form.
///
/// A readme given by path is read relative to the current directory.
pub fn project(project: &Project) -> Result<Metadata, Error> {
    project_relative_to(project, Path::new(""))
}

/// Convert a `[project]` table into core metadata in JSON form, reading a
/// readme given by path relative to `root` (usually the directory containing
/// `pyproject.toml`).
///
/// `metadata_version` is always present and `null`: the metadata version is
/// for the caller to choose. `license`, `home_page`, `download_url`,
/// `platform`, `supported_platform`, `requires_external`, `provides_dist` and
/// `obsoletes_dist` are never set.
pub fn project_relative_to(project: &Project, root: &Path) -> Result<Metadata, Error> {
    let mut metadata = Metadata::new();
    metadata.insert_null("metadata_version");

    copy_single(&mut metadata, "name", project.name.as_ref());
    copy_single(&mut metadata, "version", project.version.as_ref());
    copy_single(&mut metadata, "summary", project.description.as_ref());
    copy_single(
        &mut metadata,
        "requires_python",
        project.requires_python.as_ref(),
    );
    copy_list(&mut metadata, "keywords", project.keywords.as_ref());
    copy_list(&mut metadata, "classifier", project.classifiers.as_ref());
    copy_list(&mut metadata, "requires_dist", project.dependencies.as_ref());
    // Passed through as-is; the mapping of `dynamic` onto `Dynamic` is not settled.
    copy_list(&mut metadata, "dynamic", project.dynamic.as_ref());

    add_contacts(&mut metadata, "author", &project.authors);
    add_contacts(&mut metadata, "maintainer", &project.maintainers);

    if let Some(urls) = &project.urls {
        let urls: Vec<String> = urls
            .iter()
            .map(|(label, url)| format!("{label}: {url}"))
            .collect();
        metadata.insert("project_url", urls);
    }

    let mut extras = Vec::new();
    let mut extra_requirements = Vec::new();
    for (extra, requirements) in &project.optional_dependencies {
        extras.push(extra.clone());
        for requirement in requirements {
            extra_requirements.push(add_extra_marker(requirement, extra)?);
        }
    }
    if !extras.is_empty() {
        metadata.insert("provides_extra", extras);
    }
    if !extra_requirements.is_empty() {
        match metadata.get_mut("requires_dist") {
            Some(FieldValue::Multiple(requires_dist)) => {
                requires_dist.extend(extra_requirements);
            }
            _ => metadata.insert("requires_dist", extra_requirements),
        }
    }

    if let Some(readme) = &project.readme {
        let readme = resolve_readme(readme, root)?;
        metadata.insert("description_content_type", readme.content_type);
        metadata.insert("description", readme.description);
    }

    Ok(metadata)
}

fn copy_single(metadata: &mut Metadata, key: &str, value: Option<&String>) {
    if let Some(value) = value {
        metadata.insert(key, value.clone());
    }
}

fn copy_list(metadata: &mut Metadata, key: &str, values: Option<&Vec<String>>) {
    if let Some(values) = values {
        metadata.insert(key, values.clone());
    }
}

/// Fold a list of contacts into the single-use `{tag}` and `{tag}_email`
/// fields.
///
/// Contacts with only a name go into `{tag}`. Contacts with an email go into
/// `{tag}_email`, as `name <email>` if they also have a name. Contacts with
/// neither are skipped.
fn add_contacts(metadata: &mut Metadata, tag: &str, contacts: &[Contact]) {
    let (names, emails) = fold_contacts(contacts);
    if let Some(names) = names {
        metadata.insert(tag, names);
    }
    if let Some(emails) = emails {
        metadata.insert(format!("{tag}_email"), emails);
    }
}

fn fold_contacts(contacts: &[Contact]) -> (Option<String>, Option<String>) {
    let mut names = Vec::new();
    let mut emails = Vec::new();
    for contact in contacts {
        match (&contact.name, &contact.email) {
            (Some(name), None) => names.push(name.clone()),
            (None, Some(email)) => emails.push(email.clone()),
            // TODO: quote names containing commas or angle brackets.
            (Some(name), Some(email)) => emails.push(format!("{name} <{email}>")),
            (None, None) => {}
        }
    }

    let join = |parts: Vec<String>| (!parts.is_empty()).then(|| parts.join(", "));
    (join(names), join(emails))
}

/// Restrict a requirement to an extra: `extra == '<extra>'` becomes the
/// marker, or is and-ed with the existing marker, which is kept as written.
fn add_extra_marker(requirement: &str, extra: &str) -> Result<String, Error> {
    Requirement::<VerbatimUrl>::from_str(requirement).map_err(|err| Error::Requirement {
        extra: extra.to_owned(),
        requirement: requirement.to_owned(),
        err: Box::new(err),
    })?;

    let (head, existing) = split_marker(requirement);
    let marker = match existing.map(str::trim) {
        Some(existing) if !existing.is_empty() => {
            format!("({existing}) and extra == '{extra}'")
        }
        _ => format!("extra == '{extra}'"),
    };
    MarkerTree::from_str(&marker).map_err(|err| Error::Marker {
        extra: extra.to_owned(),
        requirement: requirement.to_owned(),
        err: Box::new(err),
    })?;

    // A URL must be followed by whitespace before the marker.
    let separator = if head.contains('@') { " ; " } else { "; " };
    Ok(format!("{}{separator}{marker}", head.trim()))
}

/// Split a requirement at the `;` that starts its marker.
///
/// A URL may contain `;`, so for `name @ url` requirements the search starts
/// after the URL, which is ended by whitespace.
fn split_marker(requirement: &str) -> (&str, Option<&str>) {
    let at = requirement
        .find('@')
        .filter(|&at| requirement.find(';').is_none_or(|semicolon| at < semicolon));
    let search_from = match at {
        Some(at) => {
            let url = requirement[at + 1..].trim_start();
            let url_start = requirement.len() - url.len();
            url.find(char::is_whitespace)
                .map_or(requirement.len(), |end| url_start + end)
        }
        None => 0,
    };

    match requirement[search_from..].find(';') {
        Some(semicolon) => {
            let semicolon = search_from + semicolon;
            (&requirement[..semicolon], Some(&requirement[semicolon + 1..]))
        }
        None => (requirement, None),
    }
}
