//! Conversion between the core metadata header format and [`Metadata`].
//!
//! The header format is the one used by `METADATA` and `PKG-INFO` files:
//!
//! ```text
//! Metadata-Version: 2.1
//! Name: foo
//! Requires-Dist: pip
//! Requires-Dist: tox
//!
//! Long description goes in the body.
//! ```
//!
//! Only the fields in [`FIELDS`] are read or written; anything else is
//! dropped.

use tracing::trace;

use crate::metadata::charset::{decode_header_value, decode_unknown_8bit};
use crate::metadata::fields::{FIELDS, Field};
use crate::metadata::model::{FieldValue, Metadata};

/// Continuation prefix for folded header lines.
const FOLD: &str = "\n        ";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    MailParse(#[from] mailparse::MailParseError),
}

/// Decode a core metadata header block into its JSON form.
///
/// The input does not have to be UTF-8: header values and the body are
/// recovered as UTF-8 where possible and as Latin-1 otherwise, and RFC 2047
/// encoded words are decoded.
pub fn decode(content: &[u8]) -> Result<Metadata, Error> {
    let (header_block, body) = split_body(content);
    let (headers, _) = mailparse::parse_headers(header_block)?;

    let mut metadata = Metadata::new();
    for field in FIELDS {
        let mut values = headers
            .iter()
            .filter(|header| header.get_key().eq_ignore_ascii_case(field.name()))
            .map(|header| decode_header_value(header.get_value_raw()));

        if field.is_multiple_use() {
            let values: Vec<String> = values.collect();
            if !values.is_empty() {
                metadata.insert(field.key(), values);
            }
        } else if let Some(value) = values.next() {
            if field.name() == "Keywords" {
                metadata.insert(field.key(), split_keywords(&value));
            } else {
                metadata.insert(field.key(), value);
            }
        }
    }

    for header in &headers {
        let key = header.get_key();
        if !FIELDS
            .iter()
            .any(|field| key.eq_ignore_ascii_case(field.name()))
        {
            trace!("Dropping unrecognized header `{key}`");
        }
    }

    // The body takes precedence over a `Description` header.
    if !body.is_empty() {
        metadata.insert("description", decode_unknown_8bit(body));
    }

    Ok(metadata)
}

/// Split `content` into the header block and the body.
///
/// The headers end at the first blank line, which is dropped. A line that is
/// neither a header nor a continuation line also ends the headers, and is the
/// first line of the body.
fn split_body(content: &[u8]) -> (&[u8], &[u8]) {
    let mut offset = 0;
    for line in content.split_inclusive(|&byte| byte == b'\n') {
        let text = line.strip_suffix(b"\n").unwrap_or(line);
        let text = text.strip_suffix(b"\r").unwrap_or(text);
        if text.is_empty() {
            return (&content[..offset], &content[offset + line.len()..]);
        }
        if !is_header_line(text) && !text.starts_with(b" ") && !text.starts_with(b"\t") {
            return (&content[..offset], &content[offset..]);
        }
        offset += line.len();
    }
    (content, &[])
}

/// Whether `line` starts with a header name (printable ASCII other than `:`)
/// followed by a colon.
fn is_header_line(line: &[u8]) -> bool {
    line.iter()
        .position(|&byte| byte == b':')
        .is_some_and(|colon| {
            line[..colon]
                .iter()
                .all(|&byte| byte.is_ascii_graphic())
        })
}

/// Decode a core metadata header block that has already been read as text.
pub fn decode_str(content: &str) -> Result<Metadata, Error> {
    decode(content.as_bytes())
}

/// Encode metadata in the core metadata header format, as UTF-8.
///
/// Keys that are not core metadata fields are ignored.
pub fn encode(metadata: &Metadata) -> Vec<u8> {
    let mut lines = Vec::new();
    let mut body = None;

    for field in FIELDS {
        let key = field.key();
        let Some(value) = metadata.get(&key) else {
            continue;
        };

        match (key.as_str(), value) {
            ("keywords", FieldValue::Multiple(keywords)) => {
                lines.push(header_line(field, &keywords.join(",")));
            }
            ("description", FieldValue::Single(description)) => {
                body = Some(description.clone());
            }
            ("description", FieldValue::Multiple(description)) => {
                body = Some(description.join("\n"));
            }
            (_, FieldValue::Single(value)) => {
                lines.push(header_line(field, value));
            }
            (_, FieldValue::Multiple(values)) => {
                lines.extend(values.iter().map(|value| header_line(field, value)));
            }
        }
    }

    for (key, _) in metadata.iter() {
        if Field::from_key(key).is_none() {
            trace!("Ignoring unrecognized key `{key}`");
        }
    }

    let mut content = lines.join("\n");
    if let Some(body) = body {
        // Without any headers, a single newline marks the start of the body.
        if !content.is_empty() {
            content.push('\n');
        }
        content.push('\n');
        content.push_str(&body);
    }
    content.into_bytes()
}

/// Format a single header line, folding embedded newlines.
fn header_line(field: &Field, value: &str) -> String {
    format!("{}: {}", field.name(), rfc822_escape(value))
}

/// Indent every line after the first by eight spaces, so that the value
/// parses as a single folded header.
///
/// Existing indentation of continuation lines is not preserved on decode.
fn rfc822_escape(value: &str) -> String {
    value.split('\n').collect::<Vec<_>>().join(FOLD)
}

/// Split a `Keywords` value. Comma separation is the standard form; older
/// tools wrote space-separated keywords.
fn split_keywords(value: &str) -> Vec<String> {
    if value.contains(',') {
        value
            .split(',')
            .map(|keyword| keyword.trim().to_owned())
            .collect()
    } else {
        value.split_whitespace().map(ToOwned::to_owned).collect()
    }
}
